use crate::domain::a006_scheduling_request::api;
use contracts::domain::a006_scheduling_request::form::CreateSchedulingRequest;
use contracts::shared::api_response::ApiError;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SchedulingRequestFormVm {
    pub form: RwSignal<CreateSchedulingRequest>,
    /// Set once a submit was attempted; fields re-validate on every edit after that
    pub field_errors: RwSignal<Option<FieldErrors>>,
    pub api_error: RwSignal<Option<ApiError>>,
    pub is_saving: RwSignal<bool>,
}

impl SchedulingRequestFormVm {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(CreateSchedulingRequest::default()),
            field_errors: RwSignal::new(None),
            api_error: RwSignal::new(None),
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

    pub fn notes_len(&self) -> usize {
        self.form
            .with(|f| f.notes.as_deref().map(|n| n.chars().count()).unwrap_or(0))
    }

    /// Empty notes are sent as `null`
    pub fn set_notes(&self, value: String) {
        self.form.update(|f| {
            f.notes = if value.is_empty() { None } else { Some(value) };
        });
    }

    pub fn submit_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.field_errors.set(Some(errors));
            return;
        }
        self.field_errors.set(None);

        let vm = *self;
        vm.is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create(&current).await {
                Ok(created) => {
                    log::info!("scheduling request {} created", created.id);
                    on_saved.run(());
                }
                Err(e) => vm.api_error.set(Some(e)),
            }
            vm.is_saving.set(false);
        });
    }
}

impl Default for SchedulingRequestFormVm {
    fn default() -> Self {
        Self::new()
    }
}
