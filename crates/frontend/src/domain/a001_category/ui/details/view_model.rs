use crate::domain::a001_category::api;
use crate::domain::a001_category::ui::list::state::{
    CategoryListState, FormMode, PanelError, SaveRejected,
};
use crate::shared::notify;
use contracts::domain::a001_category::aggregate::CategoryId;
use leptos::prelude::*;

/// ViewModel for the category add/edit form
///
/// The form session itself lives in the list state, next to the toggle
/// confirmation, so only one of them can be open. This type adds the
/// commands and the accessors the view binds to.
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    state: RwSignal<CategoryListState>,
}

impl CategoryDetailsViewModel {
    pub fn new(state: RwSignal<CategoryListState>) -> Self {
        Self { state }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.form().is_some())
    }

    /// Read without tracking: the mode never changes while the form is open
    pub fn mode_untracked(&self) -> Option<FormMode> {
        self.state.with_untracked(|s| s.form().map(|f| f.mode))
    }

    pub fn is_saving(&self) -> bool {
        self.state.with(|s| s.is_saving())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.form().and_then(|f| f.message()))
    }

    pub fn name(&self) -> String {
        self.state
            .with(|s| s.form().map(|f| f.draft.category_name.clone()))
            .unwrap_or_default()
    }

    pub fn description(&self) -> String {
        self.state
            .with(|s| s.form().map(|f| f.draft.description.clone()))
            .unwrap_or_default()
    }

    pub fn is_form_valid(&self) -> bool {
        self.state
            .with(|s| s.form().is_some_and(|f| f.draft.is_valid()))
    }

    pub fn set_name(&self, value: String) {
        self.state
            .update(|s| s.update_draft(|d| d.category_name = value));
    }

    pub fn set_description(&self, value: String) {
        self.state
            .update(|s| s.update_draft(|d| d.description = value));
    }

    /// Open the form with an empty draft
    pub fn open_add(&self) {
        if let Some(Err(e)) = self.state.try_update(|s| s.open_add()) {
            log::debug!("Add form not opened: {}", e);
        }
    }

    /// Close unless a save is in flight
    pub fn close(&self) {
        let closed = self.state.try_update(|s| s.close_form());
        if closed == Some(false) && self.state.with_untracked(|s| s.is_saving()) {
            log::debug!("Ignoring close request while saving");
        }
    }

    /// Load the authoritative record, then open the form in edit mode
    pub fn open_edit_command(&self, id: CategoryId) {
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_category(id).await {
                Ok(category) => match state.try_update(|s| s.open_edit(&category)) {
                    Some(Err(PanelError::InactiveCategory)) => {
                        log::warn!("Category {} became inactive, edit form not opened", id);
                        notify::alert(&PanelError::InactiveCategory.to_string());
                    }
                    Some(Err(e)) => log::debug!("Edit form for category {} not opened: {}", id, e),
                    _ => {}
                },
                Err(e) if e.status() == Some(404) => {
                    log::warn!("Category {} no longer exists", id);
                    notify::alert("Failed to load category details");
                }
                Err(e) => {
                    log::error!("Error fetching category {}: {}", id, e);
                    notify::alert("Failed to load category details");
                }
            }
        });
    }

    /// Validate, then create or update depending on the form mode
    pub fn save_command(&self, on_saved: Callback<()>) {
        let state = self.state;
        let (mode, request) = match state.try_update(|s| s.begin_save()) {
            Some(Ok(ready)) => ready,
            Some(Err(SaveRejected::Invalid(e))) => {
                log::debug!("Category form rejected: {}", e);
                return;
            }
            Some(Err(e)) => {
                log::debug!("Save not started: {}", e);
                return;
            }
            None => return,
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = match mode {
                FormMode::Add => api::create_category(&request).await,
                FormMode::Edit(id) => api::update_category(id, &request).await,
            };

            match result {
                Ok(message) => {
                    state.update(|s| s.finish_save(Ok(())));
                    on_saved.run(());
                    let text = message.unwrap_or_else(|| mode.success_fallback().to_string());
                    notify::alert(&text);
                }
                Err(e) => {
                    log::error!("Error saving category: {}", e);
                    let text = e.user_message("Failed to save category");
                    state.update(|s| s.finish_save(Err(text.clone())));
                    notify::alert(&text);
                }
            }
        });
    }
}
