//! Validation rules for form fields

use thiserror::Error;

/// Character set a text field is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII letters and the space character
    LettersAndSpaces,
}

impl CharClass {
    pub fn accepts(self, c: char) -> bool {
        match self {
            CharClass::LettersAndSpaces => c.is_ascii_alphabetic() || c == ' ',
        }
    }

    fn describe(self) -> &'static str {
        match self {
            CharClass::LettersAndSpaces => "only letters and spaces",
        }
    }
}

/// Why a field value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} can contain {allowed}")]
    InvalidCharacters {
        field: &'static str,
        allowed: &'static str,
    },
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub max_length: Option<usize>,
    pub allowed_chars: Option<CharClass>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            max_length: None,
            allowed_chars: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            max_length: None,
            allowed_chars: None,
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_allowed_chars(self, class: CharClass) -> Self {
        Self {
            allowed_chars: Some(class),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Length is measured in UTF-16 code units, the unit both the browser's
    /// `maxlength` attribute and the backend's size constraint count in.
    pub fn validate_string(&self, value: &str, field: &'static str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            if self.required {
                return Err(ValidationError::Required { field });
            }
            return Ok(());
        }

        if let Some(max) = self.max_length {
            if value.encode_utf16().count() > max {
                return Err(ValidationError::TooLong { field, max });
            }
        }

        if let Some(class) = self.allowed_chars {
            if !value.chars().all(|c| class.accepts(c)) {
                return Err(ValidationError::InvalidCharacters {
                    field,
                    allowed: class.describe(),
                });
            }
        }

        Ok(())
    }
}
