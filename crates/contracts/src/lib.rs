//! Types shared between the category admin frontend and the catalog backend.

pub mod domain;
pub mod shared;
