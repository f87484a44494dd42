use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::metadata::{CharClass, ValidationError, ValidationRules};

// ============================================================================
// Field constraints
// ============================================================================

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 300;

pub const NAME_LABEL: &str = "Category name";
pub const DESCRIPTION_LABEL: &str = "Description";

/// Mirrors the backend: required, at most 100 characters, letters and spaces only
pub const NAME_RULES: ValidationRules = ValidationRules::required()
    .with_max_length(NAME_MAX_LEN)
    .with_allowed_chars(CharClass::LettersAndSpaces);

pub const DESCRIPTION_RULES: ValidationRules =
    ValidationRules::required().with_max_length(DESCRIPTION_MAX_LEN);

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(CategoryId)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product category as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
    pub description: String,
    /// `true` = active
    pub status: bool,
}

impl Category {
    pub fn is_active(&self) -> bool {
        self.status
    }

    /// Inactive categories are read-only in the admin UI
    pub fn can_edit(&self) -> bool {
        self.status
    }

    pub fn status_label(&self) -> &'static str {
        if self.status {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Verb for the action a status toggle would perform
    pub fn toggle_verb(&self) -> &'static str {
        if self.status {
            "deactivate"
        } else {
            "activate"
        }
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.category_id
    }

    fn display_name(&self) -> &str {
        &self.category_name
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Working copy behind the add/edit form
///
/// `category_id` is `None` for a category that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub category_id: Option<CategoryId>,
    pub category_name: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn is_new(&self) -> bool {
        self.category_id.is_none()
    }

    /// Validate name first, then description
    pub fn validate(&self) -> Result<(), ValidationError> {
        NAME_RULES.validate_string(&self.category_name, NAME_LABEL)?;
        DESCRIPTION_RULES.validate_string(&self.description, DESCRIPTION_LABEL)?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Body for create/update; status and id are never sent
    pub fn to_request(&self) -> CategoryRequest {
        CategoryRequest {
            category_name: self.category_name.clone(),
            description: self.description.clone(),
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(c: &Category) -> Self {
        Self {
            category_id: Some(c.category_id),
            category_name: c.category_name.clone(),
            description: c.description.clone(),
        }
    }
}

/// Request body for POST and PUT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub category_name: String,
    pub description: String,
}
