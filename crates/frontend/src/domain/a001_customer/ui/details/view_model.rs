use super::model;
use crate::shared::api_utils::ApiFailure;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use contracts::shared::contact::ContactInfo;
use contracts::shared::location::{AddressSelection, LocationTable};
use contracts::shared::validation::FieldErrors;
use contracts::system::auth::{SessionContext, SessionError};
use leptos::prelude::*;

/// ViewModel for the customer form
#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub address: RwSignal<AddressSelection>,
    pub contacts: RwSignal<Vec<ContactInfo>>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CustomerDto::default()),
            address: RwSignal::new(AddressSelection::new()),
            contacts: RwSignal::new(Vec::new()),
            field_errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn update(&self, field: &'static str, apply: impl FnOnce(&mut CustomerDto)) {
        self.form.update(apply);
        self.field_errors.update(|e| {
            e.remove(field);
        });
    }

    fn fill(&self, customer: &Customer) {
        let dto = CustomerDto::from(customer);
        self.address.set(dto.address.clone());
        self.contacts.set(dto.contacts.clone());
        self.form.set(dto);
        self.field_errors.set(FieldErrors::new());
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>, session: Option<SessionContext>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&existing_id, session.as_ref()).await {
                Ok(customer) => vm.fill(&customer),
                Err(e) => vm.error.set(Some(format!("Failed to load: {}", e.message()))),
            }
        });
    }

    fn collect(&self) -> CustomerDto {
        let mut dto = self.form.get_untracked();
        dto.address = self.address.get_untracked();
        dto.contacts = self.contacts.get_untracked();
        dto
    }

    /// Validate locally, then save through the API
    pub fn save_command(&self, session: Option<SessionContext>, on_saved: Callback<String>) {
        let dto = self.collect();
        if let Err(errors) = dto.validate(&LocationTable::builtin()) {
            self.field_errors.set(errors);
            self.error.set(Some("Please correct the highlighted fields".to_string()));
            return;
        }
        let Some(session) = session else {
            self.error.set(Some(ApiFailure::Session(SessionError::Missing).message()));
            return;
        };

        let vm = *self;
        vm.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&dto, &session).await {
                Ok(id) => {
                    vm.error.set(None);
                    on_saved.run(id);
                }
                Err(failure) => {
                    if let Some(fields) = failure.api_error().and_then(|e| e.field_errors()) {
                        vm.field_errors.set(fields);
                    }
                    vm.error.set(Some(failure.message()));
                }
            }
            vm.saving.set(false);
        });
    }
}

impl Default for CustomerDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
