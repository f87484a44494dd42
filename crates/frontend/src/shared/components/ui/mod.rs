pub mod badge;

pub use badge::StatusBadge;
