use super::view_model::OrderWizardViewModel;
use crate::shared::components::ui::{Button, FileInput, Input, Select, Textarea};
use crate::shared::components::AddressPicker;
use crate::system::auth::session::use_session;
use contracts::domain::a003_order::{fields, Attachment, FormSection, OrderWizard};
use contracts::domain::common::AggregateRoot;
use contracts::enums::{TypeOfWork, VendorStatus};
use contracts::shared::location::LocationLevel;
use leptos::prelude::*;

fn text(vm: OrderWizardViewModel, get: fn(&OrderWizard) -> String) -> Signal<String> {
    Signal::derive(move || vm.wizard.with(get))
}

#[component]
pub fn OrderWizardPage() -> impl IntoView {
    let session = use_session();
    let vm = OrderWizardViewModel::new();
    vm.load_references(session.0.get_untracked());

    let active = vm.active();
    let can_submit = vm.can_submit();

    view! {
        <div class="content order-wizard">
            <div class="header">
                <h2>"New order"</h2>
            </div>

            {move || vm.created.get().map(|id| view! {
                <div class="success">{format!("Order {} created", id)}</div>
            })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <SectionTabs vm=vm />

            <div class="details-form">
                {move || match active.get() {
                    FormSection::Customer => view! { <CustomerSection vm=vm /> }.into_any(),
                    FormSection::Vendor => view! { <VendorSection vm=vm /> }.into_any(),
                    FormSection::Order => view! { <OrderSection vm=vm /> }.into_any(),
                }}
            </div>

            <div class="details-actions">
                <Button variant="secondary".to_string() on_click=Callback::new(move |_| vm.complete_active())>
                    {move || if active.get() == FormSection::Order { "Complete section" } else { "Save and continue" }}
                </Button>
                <Button
                    disabled=Signal::derive(move || !can_submit.get())
                    busy={Signal::<bool>::from(vm.submitting)}
                    on_click=Callback::new(move |_| vm.submit(session.0.get_untracked()))
                >
                    "Submit order"
                </Button>
                <Button variant="ghost".to_string() on_click=Callback::new(move |_| vm.reset())>
                    "Reset"
                </Button>
            </div>
        </div>
    }
}

/// Section headers; any section can be opened, completed ones are marked
#[component]
fn SectionTabs(vm: OrderWizardViewModel) -> impl IntoView {
    let active = vm.active();
    view! {
        <div class="wizard-tabs">
            {FormSection::ALL
                .into_iter()
                .map(|section| {
                    let class = move || {
                        let mut class = String::from("wizard-tabs__tab");
                        if active.get() == section {
                            class.push_str(" wizard-tabs__tab--active");
                        }
                        if vm.wizard.with(|w| w.is_completed(section)) {
                            class.push_str(" wizard-tabs__tab--done");
                        }
                        class
                    };
                    view! {
                        <button type="button" class=class on:click=move |_| vm.select_section(section)>
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CustomerSection(vm: OrderWizardViewModel) -> impl IntoView {
    const S: FormSection = FormSection::Customer;
    let shake: Signal<bool> = vm.shake.into();

    let customer_options = Signal::derive(move || {
        vm.customers.with(|list| {
            list.iter()
                .map(|c| (c.to_string_id(), c.picker_label()))
                .collect::<Vec<_>>()
        })
    });
    let work_options = TypeOfWork::all()
        .into_iter()
        .map(|w| (w.code().to_string(), w.display_name().to_string()))
        .collect::<Vec<_>>();

    view! {
        <Select
            label="Customer".to_string()
            id="order-customer".to_string()
            required=true
            value=text(vm, |w| w.customer.customer_id.clone())
            options=customer_options
            on_change=Callback::new(move |v: String| vm.edit(S, fields::CUSTOMER_ID, |w| w.customer.customer_id = v))
            error=vm.field_error(S, fields::CUSTOMER_ID)
            shake=shake
        />
        <Input
            label="Order onboarding date".to_string()
            id="order-onboarding-date".to_string()
            input_type="date".to_string()
            required=true
            value=text(vm, |w| w.customer.order_onboarding_date.clone())
            on_input=Callback::new(move |v: String| {
                vm.edit(S, fields::ORDER_ONBOARDING_DATE, |w| w.customer.order_onboarding_date = v)
            })
            error=vm.field_error(S, fields::ORDER_ONBOARDING_DATE)
            shake=shake
        />
        <FileInput
            label="Order friendly image".to_string()
            id="order-friendly-image".to_string()
            accept="image/*".to_string()
            required=true
            files=Signal::derive(move || {
                vm.wizard.with(|w| w.customer.order_friendly_image.iter().cloned().collect::<Vec<_>>())
            })
            on_change=Callback::new(move |files: Vec<Attachment>| {
                vm.edit(S, fields::ORDER_FRIENDLY_IMAGE, |w| {
                    w.customer.order_friendly_image = files.into_iter().next()
                })
            })
            error=vm.field_error(S, fields::ORDER_FRIENDLY_IMAGE)
            shake=shake
        />
        <Select
            label="Type of work".to_string()
            id="order-type-of-work".to_string()
            required=true
            value=text(vm, |w| w.customer.type_of_work.map(|t| t.code().to_string()).unwrap_or_default())
            options=Signal::stored(work_options)
            on_change=Callback::new(move |v: String| {
                vm.edit(S, fields::TYPE_OF_WORK, |w| w.customer.type_of_work = TypeOfWork::from_code(&v))
            })
            error=vm.field_error(S, fields::TYPE_OF_WORK)
            shake=shake
        />
        <Input
            label="Work completion date".to_string()
            id="order-work-completion-date".to_string()
            input_type="date".to_string()
            required=true
            value=text(vm, |w| w.customer.work_completion_date.clone())
            on_input=Callback::new(move |v: String| {
                vm.edit(S, fields::WORK_COMPLETION_DATE, |w| w.customer.work_completion_date = v)
            })
            error=vm.field_error(S, fields::WORK_COMPLETION_DATE)
            shake=shake
        />
        <FileInput
            label="Documents".to_string()
            id="order-documents".to_string()
            multiple=true
            required=true
            files=Signal::derive(move || vm.wizard.with(|w| w.customer.documents.clone()))
            on_change=Callback::new(move |files: Vec<Attachment>| {
                vm.edit(S, fields::DOCUMENTS, |w| w.customer.documents = files)
            })
            error=vm.field_error(S, fields::DOCUMENTS)
            shake=shake
        />
        <Input
            label="Total invoice value".to_string()
            id="order-total-invoice-value".to_string()
            input_type="number".to_string()
            required=true
            value=text(vm, |w| w.customer.total_invoice_value.clone())
            on_input=Callback::new(move |v: String| {
                vm.edit(S, fields::TOTAL_INVOICE_VALUE, |w| w.customer.total_invoice_value = v)
            })
            error=vm.field_error(S, fields::TOTAL_INVOICE_VALUE)
            shake=shake
        />
    }
}

#[component]
fn VendorSection(vm: OrderWizardViewModel) -> impl IntoView {
    const S: FormSection = FormSection::Vendor;
    let shake: Signal<bool> = vm.shake.into();

    let vendor_options = Signal::derive(move || {
        vm.vendors.with(|list| {
            list.iter()
                .map(|v| (v.to_string_id(), v.picker_label()))
                .collect::<Vec<_>>()
        })
    });
    let status_options = VendorStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect::<Vec<_>>();
    let has_status = move || vm.wizard.with(|w| w.vendor.current_status.is_some());

    view! {
        <Select
            label="Vendor".to_string()
            id="order-vendor".to_string()
            required=true
            value=text(vm, |w| w.vendor.vendor_id.clone())
            options=vendor_options
            on_change=Callback::new(move |v: String| vm.edit(S, fields::VENDOR_ID, |w| w.vendor.vendor_id = v))
            error=vm.field_error(S, fields::VENDOR_ID)
            shake=shake
        />
        <Input
            label="Vendor onboarding date".to_string()
            id="order-vendor-onboarding-date".to_string()
            input_type="date".to_string()
            required=true
            value=text(vm, |w| w.vendor.vendor_onboarding_date.clone())
            on_input=Callback::new(move |v: String| {
                vm.edit(S, fields::VENDOR_ONBOARDING_DATE, |w| w.vendor.vendor_onboarding_date = v)
            })
            error=vm.field_error(S, fields::VENDOR_ONBOARDING_DATE)
            shake=shake
        />
        <Select
            label="Current status".to_string()
            id="order-current-status".to_string()
            required=true
            value=text(vm, |w| w.vendor.current_status.map(|s| s.code().to_string()).unwrap_or_default())
            options=Signal::stored(status_options)
            on_change=Callback::new(move |v: String| {
                vm.edit(S, fields::CURRENT_STATUS, |w| w.vendor.set_status(VendorStatus::from_code(&v)))
            })
            error=vm.field_error(S, fields::CURRENT_STATUS)
            shake=shake
        />
        <Show when=has_status>
            <Textarea
                label="Status comment".to_string()
                id="order-status-comment".to_string()
                placeholder="Why did the status change?".to_string()
                max_length=500
                value=text(vm, |w| w.vendor.status_comment.clone())
                on_input=Callback::new(move |v: String| {
                    vm.edit(S, fields::STATUS_COMMENT, |w| w.vendor.status_comment = v)
                })
            />
        </Show>
    }
}

#[component]
fn OrderSection(vm: OrderWizardViewModel) -> impl IntoView {
    const S: FormSection = FormSection::Order;

    view! {
        <Input
            label="Title".to_string()
            id="order-title".to_string()
            value=text(vm, |w| w.order.title.clone())
            on_input=Callback::new(move |v: String| vm.edit(S, "title", |w| w.order.title = v))
        />
        <Input
            label="Application number".to_string()
            id="order-application-number".to_string()
            value=text(vm, |w| w.order.application_number.clone())
            on_input=Callback::new(move |v: String| {
                vm.edit(S, "applicationNumber", |w| w.order.application_number = v)
            })
        />
        <AddressPicker selection=vm.jurisdiction depth=LocationLevel::State />
        <Input
            label="Filing deadline".to_string()
            id="order-filing-deadline".to_string()
            input_type="date".to_string()
            value=text(vm, |w| w.order.filing_deadline.clone())
            on_input=Callback::new(move |v: String| vm.edit(S, "filingDeadline", |w| w.order.filing_deadline = v))
        />
        <Textarea
            label="Remarks".to_string()
            id="order-remarks".to_string()
            max_length=2000
            value=text(vm, |w| w.order.remarks.clone())
            on_input=Callback::new(move |v: String| vm.edit(S, "remarks", |w| w.order.remarks = v))
        />
    }
}
