//! Category Details UI Module
//!
//! Add/edit form in a modal, MVVM split:
//! - view_model.rs: commands (open for edit, save) over the list state
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
