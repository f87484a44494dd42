pub mod details;
pub mod list;
pub mod status_toggle;
