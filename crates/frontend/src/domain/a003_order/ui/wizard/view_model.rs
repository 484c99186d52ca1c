use super::model;
use crate::shared::api_utils::ApiFailure;
use chrono::Utc;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::a003_order::{FormSection, OrderWizard, SectionErrors};
use contracts::shared::location::AddressSelection;
use contracts::system::auth::{ensure_session, SessionContext};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const SHAKE_MS: u32 = 500;

#[derive(Clone, Copy)]
pub struct OrderWizardViewModel {
    pub wizard: RwSignal<OrderWizard>,
    /// Bound to the jurisdiction picker, copied into the order part on
    /// completion and submit
    pub jurisdiction: RwSignal<AddressSelection>,
    pub customers: RwSignal<Vec<Customer>>,
    pub vendors: RwSignal<Vec<Vendor>>,
    pub shake: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub created: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl OrderWizardViewModel {
    pub fn new() -> Self {
        Self {
            wizard: RwSignal::new(OrderWizard::new()),
            jurisdiction: RwSignal::new(AddressSelection::new()),
            customers: RwSignal::new(Vec::new()),
            vendors: RwSignal::new(Vec::new()),
            shake: RwSignal::new(false),
            error: RwSignal::new(None),
            created: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    /// Customer and vendor lists for the pickers
    pub fn load_references(&self, session: Option<SessionContext>) {
        let vm = *self;
        spawn_local(async move {
            match model::fetch_customers(session.as_ref()).await {
                Ok(list) => vm.customers.set(list),
                Err(e) => vm.error.set(Some(e.message())),
            }
            match model::fetch_vendors(session.as_ref()).await {
                Ok(list) => vm.vendors.set(list),
                Err(e) => vm.error.set(Some(e.message())),
            }
        });
    }

    pub fn active(&self) -> Signal<FormSection> {
        let wizard = self.wizard;
        Signal::derive(move || wizard.with(|w| w.active()))
    }

    pub fn field_error(&self, section: FormSection, field: &'static str) -> Signal<Option<String>> {
        let wizard = self.wizard;
        Signal::derive(move || wizard.with(|w| w.field_error(section, field).map(str::to_string)))
    }

    /// Apply an edit and drop the stale message of the edited field
    pub fn edit(&self, section: FormSection, field: &'static str, apply: impl FnOnce(&mut OrderWizard)) {
        self.wizard.update(|w| {
            apply(w);
            w.clear_field_error(section, field);
        });
    }

    pub fn select_section(&self, section: FormSection) {
        self.wizard.update(|w| w.select_section(section));
    }

    fn sync_jurisdiction(&self) {
        let jurisdiction = self.jurisdiction.get_untracked();
        self.wizard.update(|w| w.order.jurisdiction = jurisdiction);
    }

    /// Validate the visible section; on failure the invalid fields shake
    pub fn complete_active(&self) {
        self.sync_jurisdiction();
        let mut rejected = false;
        self.wizard.update(|w| {
            let section = w.active();
            rejected = w.complete_section(section).is_err();
        });
        if rejected {
            self.trigger_shake();
        }
    }

    fn trigger_shake(&self) {
        let shake = self.shake;
        shake.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SHAKE_MS).await;
            shake.set(false);
        });
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let wizard = self.wizard;
        Signal::derive(move || wizard.with(|w| w.can_submit()))
    }

    /// Send the order when every section is complete; nothing is sent
    /// otherwise
    pub fn submit(&self, session: Option<SessionContext>) {
        self.sync_jurisdiction();
        let payload = match self.wizard.with_untracked(|w| w.submit(|payload| payload)) {
            Ok(payload) => payload,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                self.trigger_shake();
                return;
            }
        };
        if let Err(e) = ensure_session(session.as_ref(), Utc::now()) {
            self.error.set(Some(ApiFailure::Session(e).message()));
            return;
        }
        let Some(session) = session else {
            return;
        };

        let vm = *self;
        vm.submitting.set(true);
        spawn_local(async move {
            match model::create_order(&payload, &session).await {
                Ok(created) => {
                    log::info!("order {} created", created.id);
                    vm.error.set(None);
                    vm.created.set(Some(created.id));
                    vm.reset();
                }
                Err(failure) => {
                    let reported = failure
                        .api_error()
                        .and_then(|e| e.fields.clone())
                        .and_then(|v| serde_json::from_value::<SectionErrors>(v).ok());
                    if let Some(errors) = reported {
                        vm.wizard.update(|w| w.apply_errors(errors));
                        vm.trigger_shake();
                    }
                    vm.error.set(Some(failure.message()));
                }
            }
            vm.submitting.set(false);
        });
    }

    pub fn reset(&self) {
        self.wizard.update(|w| w.reset());
        self.jurisdiction.set(AddressSelection::new());
    }
}

impl Default for OrderWizardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
