use contracts::domain::a001_category::aggregate::{Category, CategoryDraft, CategoryId, CategoryRequest};
use contracts::domain::a001_category::listing::{CategoryListQuery, CategoryListing, StatusFilter};
use contracts::shared::metadata::ValidationError;
use leptos::prelude::*;
use thiserror::Error;

/// What the add/edit form is doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(CategoryId),
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Add New Category",
            FormMode::Edit(_) => "Update Category",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Add => "Add Category",
            FormMode::Edit(_) => "Update Category",
        }
    }

    /// Shown when the server sends no message of its own
    pub fn success_fallback(self) -> &'static str {
        match self {
            FormMode::Add => "Category added successfully!",
            FormMode::Edit(_) => "Category updated successfully!",
        }
    }
}

/// Open add/edit form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSession {
    pub mode: FormMode,
    pub draft: CategoryDraft,
    /// A create/update request is in flight
    pub saving: bool,
    /// Set by the first edit; live validation is shown only after it
    pub touched: bool,
    /// Last rejected save or server failure; cleared by the next edit
    pub error: Option<String>,
}

impl FormSession {
    fn new(mode: FormMode, draft: CategoryDraft) -> Self {
        Self {
            mode,
            draft,
            saving: false,
            touched: false,
            error: None,
        }
    }

    /// Message under the form: the last failure, else the live validation
    /// result once the user has typed something
    pub fn message(&self) -> Option<String> {
        if self.error.is_some() {
            return self.error.clone();
        }
        if !self.touched {
            return None;
        }
        self.draft.validate().err().map(|e| e.to_string())
    }
}

/// Category awaiting confirmation of a status flip
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleSession {
    pub category: Category,
    /// The PATCH and the follow-up refetch are in flight
    pub sending: bool,
}

/// Result of applying a list response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// Superseded by a newer request and dropped
    Stale,
    /// The page no longer exists; the cursor moved to the last page and
    /// the list must be fetched again
    PageOutOfRange,
}

/// Which overlay, if any, is on top of the list.
/// Form and toggle confirmation are mutually exclusive.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum PanelMode {
    #[default]
    Idle,
    Form(FormSession),
    ConfirmToggle(ToggleSession),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("Inactive category cannot be updated")]
    InactiveCategory,
    #[error("Another dialog is already open")]
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveRejected {
    #[error("No form is open")]
    NoForm,
    #[error("Save already in progress")]
    AlreadySaving,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Clone, Debug)]
pub struct CategoryListState {
    pub items: Vec<Category>,
    pub filter: StatusFilter,
    // Server-side pagination
    pub page: u32,
    /// `None` when the server returned a flat list
    pub total_pages: Option<u32>,
    pub total_count: Option<u64>,
    pub loading: bool,
    /// List banner; cleared by the next successful fetch
    pub error: Option<String>,
    pub is_loaded: bool,
    pub mode: PanelMode,
    latest_request: u64,
}

impl Default for CategoryListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: StatusFilter::All,
            page: 0,
            total_pages: None,
            total_count: None,
            loading: false,
            error: None,
            is_loaded: false,
            mode: PanelMode::Idle,
            latest_request: 0,
        }
    }
}

impl CategoryListState {
    // ------------------------------------------------------------------
    // Filter and pagination
    // ------------------------------------------------------------------

    /// Returns `false` when the filter did not change.
    /// A new filter always starts from the first page.
    pub fn set_filter(&mut self, filter: StatusFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        self.page = 0;
        true
    }

    pub fn last_page(&self) -> u32 {
        self.total_pages.unwrap_or(1).saturating_sub(1)
    }

    /// Move to `page`, clamped to the known page range
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.min(self.last_page());
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages.is_some_and(|n| n > 1)
    }

    pub fn list_query(&self) -> CategoryListQuery {
        CategoryListQuery::new(self.filter, self.page)
    }

    // ------------------------------------------------------------------
    // List fetch (last request wins)
    // ------------------------------------------------------------------

    /// Mark a fetch as started; returns its ticket and the query to send
    pub fn begin_fetch(&mut self) -> (u64, CategoryListQuery) {
        self.latest_request += 1;
        self.loading = true;
        (self.latest_request, self.list_query())
    }

    /// Apply a fetch result. Responses to superseded requests are dropped.
    /// The error banner stays up until a fetch succeeds.
    pub fn finish_fetch(
        &mut self,
        ticket: u64,
        result: Result<CategoryListing, String>,
    ) -> FetchOutcome {
        if ticket != self.latest_request {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(listing) => {
                self.items = listing.items;
                self.total_pages = listing.total_pages;
                self.total_count = listing.total_elements;
                self.error = None;
                self.is_loaded = true;
                let last = self.last_page();
                if self.page > last {
                    self.page = last;
                    return FetchOutcome::PageOutOfRange;
                }
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        FetchOutcome::Applied
    }

    // ------------------------------------------------------------------
    // Add / edit form
    // ------------------------------------------------------------------

    pub fn is_idle(&self) -> bool {
        self.mode == PanelMode::Idle
    }

    pub fn form(&self) -> Option<&FormSession> {
        match &self.mode {
            PanelMode::Form(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.form().is_some_and(|f| f.saving)
    }

    pub fn open_add(&mut self) -> Result<(), PanelError> {
        if !self.is_idle() {
            return Err(PanelError::Busy);
        }
        self.mode = PanelMode::Form(FormSession::new(FormMode::Add, CategoryDraft::default()));
        Ok(())
    }

    /// `category` must be the record freshly fetched from the server
    pub fn open_edit(&mut self, category: &Category) -> Result<(), PanelError> {
        if !category.can_edit() {
            return Err(PanelError::InactiveCategory);
        }
        if !self.is_idle() {
            return Err(PanelError::Busy);
        }
        self.mode = PanelMode::Form(FormSession::new(
            FormMode::Edit(category.category_id),
            CategoryDraft::from(category),
        ));
        Ok(())
    }

    /// Edit the draft; ignored while saving or when no form is open
    pub fn update_draft(&mut self, f: impl FnOnce(&mut CategoryDraft)) {
        if let PanelMode::Form(session) = &mut self.mode {
            if !session.saving {
                f(&mut session.draft);
                session.touched = true;
                session.error = None;
            }
        }
    }

    /// Validate and lock the form. Nothing may be sent unless this succeeds.
    pub fn begin_save(&mut self) -> Result<(FormMode, CategoryRequest), SaveRejected> {
        let PanelMode::Form(session) = &mut self.mode else {
            return Err(SaveRejected::NoForm);
        };
        if session.saving {
            return Err(SaveRejected::AlreadySaving);
        }
        if let Err(e) = session.draft.validate() {
            session.error = Some(e.to_string());
            return Err(e.into());
        }
        session.saving = true;
        session.error = None;
        Ok((session.mode, session.draft.to_request()))
    }

    /// Success closes the form; failure unlocks it and keeps the draft
    pub fn finish_save(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                if self.form().is_some() {
                    self.mode = PanelMode::Idle;
                }
            }
            Err(message) => {
                if let PanelMode::Form(session) = &mut self.mode {
                    session.saving = false;
                    session.error = Some(message);
                }
            }
        }
    }

    /// Returns `false` while a save is in flight
    pub fn close_form(&mut self) -> bool {
        match &self.mode {
            PanelMode::Form(session) if session.saving => false,
            PanelMode::Form(_) => {
                self.mode = PanelMode::Idle;
                true
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Status toggle confirmation
    // ------------------------------------------------------------------

    pub fn pending_toggle(&self) -> Option<&Category> {
        match &self.mode {
            PanelMode::ConfirmToggle(session) => Some(&session.category),
            _ => None,
        }
    }

    pub fn is_toggling(&self) -> bool {
        matches!(&self.mode, PanelMode::ConfirmToggle(session) if session.sending)
    }

    pub fn request_toggle(&mut self, category: Category) -> Result<(), PanelError> {
        if !self.is_idle() {
            return Err(PanelError::Busy);
        }
        self.mode = PanelMode::ConfirmToggle(ToggleSession {
            category,
            sending: false,
        });
        Ok(())
    }

    /// Returns `false` while the status request is in flight
    pub fn cancel_toggle(&mut self) -> bool {
        match &self.mode {
            PanelMode::ConfirmToggle(session) if !session.sending => {
                self.mode = PanelMode::Idle;
                true
            }
            _ => false,
        }
    }

    /// Lock the confirmation and hand out the category to flip.
    /// The panel stays busy until `finish_toggle`.
    pub fn confirm_toggle(&mut self) -> Option<Category> {
        match &mut self.mode {
            PanelMode::ConfirmToggle(session) if !session.sending => {
                session.sending = true;
                Some(session.category.clone())
            }
            _ => None,
        }
    }

    /// Close the confirmation once the request and the refetch are done
    pub fn finish_toggle(&mut self) -> bool {
        if !self.is_toggling() {
            return false;
        }
        self.mode = PanelMode::Idle;
        true
    }
}

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, status: bool) -> Category {
        Category {
            category_id: CategoryId(id),
            category_name: name.to_string(),
            description: format!("{} description", name),
            status,
        }
    }

    fn paged(items: Vec<Category>, total_pages: u32) -> CategoryListing {
        CategoryListing {
            total_elements: Some(items.len() as u64),
            items,
            total_pages: Some(total_pages),
        }
    }

    fn loaded_with_pages(total_pages: u32) -> CategoryListState {
        let mut state = CategoryListState::default();
        let (ticket, _) = state.begin_fetch();
        state.finish_fetch(ticket, Ok(paged(vec![category(1, "Books", true)], total_pages)));
        state
    }

    #[test]
    fn test_initial_query() {
        let state = CategoryListState::default();
        let query = state.list_query();
        assert_eq!(query.page, 0);
        assert_eq!(query.size, 10);
        assert_eq!(query.status, None);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = loaded_with_pages(5);
        assert!(state.go_to_page(3));

        assert!(state.set_filter(StatusFilter::Active));
        let (_, query) = state.begin_fetch();
        assert_eq!(query.page, 0);
        assert_eq!(query.status, Some(true));
    }

    #[test]
    fn test_same_filter_is_noop() {
        let mut state = loaded_with_pages(5);
        state.go_to_page(2);
        assert!(!state.set_filter(StatusFilter::All));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_go_to_page_is_clamped() {
        let mut state = loaded_with_pages(3);
        assert!(state.go_to_page(10));
        assert_eq!(state.page, 2);
        assert!(!state.go_to_page(2));
    }

    #[test]
    fn test_flat_listing_hides_pagination() {
        let mut state = CategoryListState::default();
        let (ticket, _) = state.begin_fetch();
        let flat = CategoryListing {
            items: vec![category(1, "Books", true), category(2, "Toys", false)],
            total_pages: None,
            total_elements: Some(2),
        };
        assert_eq!(state.finish_fetch(ticket, Ok(flat)), FetchOutcome::Applied);
        assert_eq!(state.items.len(), 2);
        assert!(!state.show_pagination());
        assert!(!state.go_to_page(1));
    }

    #[test]
    fn test_single_page_hides_pagination() {
        assert!(!loaded_with_pages(1).show_pagination());
        assert!(loaded_with_pages(2).show_pagination());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = CategoryListState::default();
        let (first, _) = state.begin_fetch();
        state.set_filter(StatusFilter::Inactive);
        let (second, _) = state.begin_fetch();

        assert_eq!(
            state.finish_fetch(second, Ok(paged(vec![category(2, "Toys", false)], 1))),
            FetchOutcome::Applied
        );
        assert_eq!(
            state.finish_fetch(first, Ok(paged(vec![category(1, "Books", true)], 1))),
            FetchOutcome::Stale
        );
        assert_eq!(state.items[0].category_name, "Toys");
        assert!(!state.loading);
    }

    #[test]
    fn test_fetch_error_sets_banner_until_next_success() {
        let mut state = loaded_with_pages(1);
        let (ticket, _) = state.begin_fetch();
        state.finish_fetch(ticket, Err("Failed to fetch categories".to_string()));
        assert_eq!(state.error.as_deref(), Some("Failed to fetch categories"));
        assert!(!state.loading);
        // previous rows stay visible
        assert_eq!(state.items.len(), 1);

        // banner stays while the retry is in flight
        let (ticket, _) = state.begin_fetch();
        assert!(state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch categories"));

        state.finish_fetch(ticket, Ok(paged(vec![], 0)));
        assert_eq!(state.error, None);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_page_past_the_end_moves_to_last_page() {
        let mut state = loaded_with_pages(2);
        state.set_filter(StatusFilter::Inactive);
        let (ticket, _) = state.begin_fetch();
        state.finish_fetch(ticket, Ok(paged(vec![category(1, "Books", false)], 2)));
        assert!(state.go_to_page(1));

        // last inactive row on page 2 was activated elsewhere
        let (ticket, query) = state.begin_fetch();
        assert_eq!(query.page, 1);
        assert_eq!(
            state.finish_fetch(ticket, Ok(paged(vec![], 1))),
            FetchOutcome::PageOutOfRange
        );
        assert_eq!(state.page, 0);

        let (ticket, query) = state.begin_fetch();
        assert_eq!(query.page, 0);
        assert_eq!(
            state.finish_fetch(ticket, Ok(paged(vec![category(2, "Toys", false)], 1))),
            FetchOutcome::Applied
        );
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_empty_result_on_first_page_is_not_refetched() {
        let mut state = CategoryListState::default();
        let (ticket, _) = state.begin_fetch();
        assert_eq!(state.finish_fetch(ticket, Ok(paged(vec![], 0))), FetchOutcome::Applied);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_open_add_starts_empty_draft() {
        let mut state = CategoryListState::default();
        assert_eq!(state.open_add(), Ok(()));
        let form = state.form().unwrap();
        assert_eq!(form.mode, FormMode::Add);
        assert_eq!(form.draft, CategoryDraft::default());
    }

    #[test]
    fn test_edit_unreachable_for_inactive_category() {
        let mut state = CategoryListState::default();
        assert_eq!(
            state.open_edit(&category(3, "Toys", false)),
            Err(PanelError::InactiveCategory)
        );
        assert!(state.is_idle());
    }

    #[test]
    fn test_open_edit_uses_fetched_record() {
        let mut state = CategoryListState::default();
        state.open_edit(&category(7, "Garden", true)).unwrap();
        let form = state.form().unwrap();
        assert_eq!(form.mode, FormMode::Edit(CategoryId(7)));
        assert_eq!(form.draft.category_id, Some(CategoryId(7)));
        assert_eq!(form.draft.category_name, "Garden");
    }

    #[test]
    fn test_invalid_draft_never_reaches_the_network() {
        let mut state = CategoryListState::default();
        state.open_add().unwrap();

        let rejected = state.begin_save();
        assert!(matches!(rejected, Err(SaveRejected::Invalid(_))));
        assert_eq!(
            state.form().unwrap().error.as_deref(),
            Some("Category name is required")
        );
        assert!(!state.is_saving());

        state.update_draft(|d| {
            d.category_name = "a".repeat(101);
            d.description = "ok".to_string();
        });
        assert!(matches!(state.begin_save(), Err(SaveRejected::Invalid(_))));
        assert!(!state.is_saving());
    }

    #[test]
    fn test_save_locks_form_until_finished() {
        let mut state = CategoryListState::default();
        state.open_add().unwrap();
        state.update_draft(|d| {
            d.category_name = "Shoes".to_string();
            d.description = "Footwear".to_string();
        });

        let (mode, request) = state.begin_save().unwrap();
        assert_eq!(mode, FormMode::Add);
        assert_eq!(request.category_name, "Shoes");
        assert!(state.is_saving());

        assert_eq!(state.begin_save(), Err(SaveRejected::AlreadySaving));
        assert!(!state.close_form());
        state.update_draft(|d| d.category_name.clear());
        assert_eq!(state.form().unwrap().draft.category_name, "Shoes");

        state.finish_save(Ok(()));
        assert!(state.is_idle());
    }

    #[test]
    fn test_invalid_input_is_explained_while_typing() {
        let mut state = CategoryListState::default();
        state.open_add().unwrap();
        // nothing typed yet
        assert_eq!(state.form().unwrap().message(), None);

        state.update_draft(|d| d.category_name = "T-Shirts".to_string());
        let form = state.form().unwrap();
        assert!(!form.draft.is_valid());
        assert_eq!(
            form.message().as_deref(),
            Some("Category name can contain only letters and spaces")
        );

        state.update_draft(|d| d.category_name = "T Shirts".to_string());
        assert_eq!(
            state.form().unwrap().message().as_deref(),
            Some("Description is required")
        );

        state.update_draft(|d| d.description = "Cotton".to_string());
        assert_eq!(state.form().unwrap().message(), None);
    }

    #[test]
    fn test_server_error_shown_until_next_edit() {
        let mut state = CategoryListState::default();
        state.open_edit(&category(5, "Shoes", true)).unwrap();
        state.begin_save().unwrap();
        state.finish_save(Err("Category name already exists".to_string()));
        assert_eq!(
            state.form().unwrap().message().as_deref(),
            Some("Category name already exists")
        );

        state.update_draft(|d| d.category_name = "Boots".to_string());
        assert_eq!(state.form().unwrap().message(), None);
    }

    #[test]
    fn test_failed_save_keeps_form_open() {
        let mut state = CategoryListState::default();
        state.open_edit(&category(5, "Shoes", true)).unwrap();
        state.begin_save().unwrap();

        state.finish_save(Err("Category name already exists".to_string()));
        let form = state.form().unwrap();
        assert!(!form.saving);
        assert_eq!(form.error.as_deref(), Some("Category name already exists"));
        assert_eq!(form.draft.category_name, "Shoes");

        assert!(state.close_form());
        assert!(state.is_idle());
    }

    #[test]
    fn test_toggle_confirm_flow() {
        let mut state = loaded_with_pages(1);
        let shoes = category(5, "Shoes", true);

        state.request_toggle(shoes.clone()).unwrap();
        assert_eq!(state.pending_toggle(), Some(&shoes));
        // form cannot open on top of the confirmation
        assert_eq!(state.open_add(), Err(PanelError::Busy));

        assert_eq!(state.confirm_toggle(), Some(shoes.clone()));
        assert!(state.is_toggling());
        assert_eq!(state.confirm_toggle(), None);

        assert!(state.finish_toggle());
        assert!(state.is_idle());
        assert!(!state.finish_toggle());
    }

    #[test]
    fn test_single_status_request_in_flight() {
        let mut state = loaded_with_pages(1);
        let shoes = category(5, "Shoes", true);

        state.request_toggle(shoes.clone()).unwrap();
        assert_eq!(state.confirm_toggle(), Some(shoes.clone()));

        // row still shows the old status until the refetch lands
        assert_eq!(state.request_toggle(shoes.clone()), Err(PanelError::Busy));
        assert_eq!(state.confirm_toggle(), None);
        assert_eq!(state.open_add(), Err(PanelError::Busy));
        assert_eq!(
            state.open_edit(&category(6, "Boots", true)),
            Err(PanelError::Busy)
        );
        assert!(!state.cancel_toggle());
        assert_eq!(state.pending_toggle(), Some(&shoes));

        state.finish_toggle();
        assert_eq!(state.request_toggle(shoes), Ok(()));
    }

    #[test]
    fn test_toggle_cancel_flow() {
        let mut state = CategoryListState::default();
        state.request_toggle(category(5, "Shoes", true)).unwrap();
        assert!(state.cancel_toggle());
        assert!(state.is_idle());
        assert!(!state.cancel_toggle());
    }

    #[test]
    fn test_toggle_blocked_while_form_open() {
        let mut state = CategoryListState::default();
        state.open_add().unwrap();
        assert_eq!(
            state.request_toggle(category(5, "Shoes", true)),
            Err(PanelError::Busy)
        );
        assert_eq!(state.confirm_toggle(), None);
        assert!(state.form().is_some());
    }
}
