//! Field metadata shared by the admin forms and the backend DTOs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::ValidationRules;
//!
//! const TITLE: ValidationRules = ValidationRules::required().with_max_length(100);
//! TITLE.validate_string(&input, "Title")?;
//! ```

mod validation;

pub use validation::{CharClass, ValidationError, ValidationRules};
