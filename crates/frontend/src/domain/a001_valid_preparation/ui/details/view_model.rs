use crate::domain::a001_valid_preparation::api;
use contracts::domain::a001_valid_preparation::{ValidPreparation, ValidPreparationDto};
use leptos::prelude::*;

/// Whether `form` would change `original` in any field that record equality sees.
///
/// A new record (`original` is `None`) is compared against the empty record.
pub fn has_unsaved_changes(
    original: Option<&ValidPreparation>,
    form: &ValidPreparationDto,
) -> bool {
    let base = original.cloned().unwrap_or_default();
    let mut applied = base.clone();
    applied.apply(form);
    !ValidPreparation::are_equal(&base, &applied)
}

/// ViewModel for the valid preparation details form
#[derive(Clone, Copy)]
pub struct ValidPreparationDetailsViewModel {
    pub form: RwSignal<ValidPreparationDto>,
    /// Record as last loaded from the server
    pub original: RwSignal<Option<ValidPreparation>>,
    pub error: RwSignal<Option<String>>,
}

impl ValidPreparationDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ValidPreparationDto::default()),
            original: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        !self.form.get().is_new()
    }

    pub fn is_dirty(&self) -> bool {
        let form = self.form.get();
        self.original
            .with(|original| has_unsaved_changes(original.as_ref(), &form))
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<u64>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_valid_preparation(existing_id).await {
                Ok(vp) => {
                    vm.form.set(ValidPreparationDto::from(&vp));
                    vm.original.set(Some(vp));
                }
                Err(e) => vm.error.set(Some(format!("Load failed: {}", e))),
            }
        });
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }
        if !self.is_dirty() {
            on_saved.run(());
            return;
        }

        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match current.id {
                Some(id) => api::update_valid_preparation(id, &current).await,
                None => api::create_valid_preparation(&current).await,
            };
            match result {
                Ok(saved) => {
                    log::debug!("saved valid preparation {}", saved.id);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

impl Default for ValidPreparationDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
