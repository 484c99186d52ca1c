use super::view_model::CustomerDetailsViewModel;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::{AddressPicker, ContactListEditor};
use crate::system::auth::session::use_session;
use leptos::prelude::*;

#[component]
pub fn CustomerDetails(
    #[prop(optional)]
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let vm = CustomerDetailsViewModel::new();
    vm.load_if_needed(id, session.0.get_untracked());

    view! {
        <div class="details-container customer-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit customer" } else { "New customer" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <Input
                    label="Name".to_string()
                    id="customer-name".to_string()
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.update("name", |f| f.name = v))
                    error=vm.field_error("name")
                />
                <Input
                    label="Email".to_string()
                    id="customer-email".to_string()
                    input_type="email".to_string()
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| vm.update("email", |f| f.email = v))
                    error=vm.field_error("email")
                />
                <Input
                    label="Phone".to_string()
                    id="customer-phone".to_string()
                    value=Signal::derive(move || vm.form.with(|f| f.phone.clone()))
                    on_input=Callback::new(move |v: String| vm.update("phone", |f| f.phone = v))
                    error=vm.field_error("phone")
                />

                <AddressPicker
                    selection=vm.address
                    errors=Signal::derive(move || vm.field_errors.get())
                    prefix="address".to_string()
                    required=true
                />

                <ContactListEditor
                    contacts=vm.contacts
                    errors=Signal::derive(move || vm.field_errors.get())
                />

                <Textarea
                    label="Comment".to_string()
                    id="customer-comment".to_string()
                    value=Signal::derive(move || vm.form.with(|f| f.comment.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| {
                        vm.update("comment", |f| f.comment = if v.is_empty() { None } else { Some(v) })
                    })
                />
            </div>

            <div class="details-actions">
                <Button
                    busy={Signal::<bool>::from(vm.saving)}
                    on_click=Callback::new(move |_| vm.save_command(session.0.get_untracked(), on_saved))
                >
                    "Save"
                </Button>
                <Button variant="ghost".to_string() on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
