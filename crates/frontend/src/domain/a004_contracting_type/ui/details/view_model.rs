use crate::domain::a004_contracting_type::api;
use contracts::domain::a004_contracting_type::aggregate::ContractingTypeId;
use contracts::domain::a004_contracting_type::form::ContractingTypeForm;
use contracts::shared::api_response::ApiError;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// ViewModel for the contracting type form
#[derive(Clone, Copy)]
pub struct ContractingTypeDetailsVm {
    pub form: RwSignal<ContractingTypeForm>,
    /// Set once a save was attempted; fields re-validate on every edit after that
    pub field_errors: RwSignal<Option<FieldErrors>>,
    pub api_error: RwSignal<Option<ApiError>>,
    pub not_found: RwSignal<bool>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
}

impl ContractingTypeDetailsVm {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(ContractingTypeForm::default()),
            field_errors: RwSignal::new(None),
            api_error: RwSignal::new(None),
            not_found: RwSignal::new(false),
            is_loading: RwSignal::new(false),
            is_saving: RwSignal::new(false),
        };

        Effect::new(move |_| {
            let errors = vm.form.with(|f| f.validate().err());
            if vm.field_errors.with_untracked(Option::is_some) {
                vm.field_errors.set(Some(errors.unwrap_or_default()));
            }
        });

        vm
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| !f.is_new())
    }

    pub fn load_if_needed(&self, id: Option<ContractingTypeId>) {
        let Some(id) = id else { return };
        let vm = *self;
        vm.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(contracting_type) => vm.form.set(contracting_type.into()),
                Err(e) if e.is_not_found() => {
                    log::debug!("contracting type {} not found", id);
                    vm.not_found.set(true);
                }
                Err(e) => vm.api_error.set(Some(e)),
            }
            vm.is_loading.set(false);
        });
    }

    /// Validates and saves; `on_saved` runs after the backend accepted the form
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.field_errors.set(Some(errors));
            return;
        }
        self.field_errors.set(None);

        let vm = *self;
        vm.is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save(&current).await {
                Ok(saved) => {
                    log::info!("contracting type {} saved", saved.id);
                    on_saved.run(());
                }
                Err(e) => vm.api_error.set(Some(e)),
            }
            vm.is_saving.set(false);
        });
    }
}

impl Default for ContractingTypeDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
