//! a001 Category: admin list with add/edit form and status toggle

pub mod api;
pub mod ui;
