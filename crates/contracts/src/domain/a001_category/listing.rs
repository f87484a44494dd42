//! List request and list response shapes for categories

use serde::{Deserialize, Serialize};

use super::aggregate::Category;

/// Fixed page size of the admin list
pub const PAGE_SIZE: u32 = 10;

// ============================================================================
// Request
// ============================================================================

/// Status filter offered above the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive];

    /// Value used in the `<select>` element
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }

    /// Unknown values fall back to `All`
    pub fn from_value(s: &str) -> Self {
        match s {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    /// `status` query parameter, absent for `All`
    pub fn status_param(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
        }
    }
}

/// Query string of `GET /api/v1/categories`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListQuery {
    pub page: u32,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl CategoryListQuery {
    pub fn new(filter: StatusFilter, page: u32) -> Self {
        Self {
            page,
            size: PAGE_SIZE,
            status: filter.status_param(),
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Page metadata block emitted by newer Spring Data serializers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_pages: Option<u32>,
    pub total_elements: Option<u64>,
}

/// Paginated `data` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub content: Vec<Category>,
    pub total_pages: Option<u32>,
    pub total_elements: Option<u64>,
    pub page: Option<PageMetadata>,
}

impl CategoryPage {
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
            .or_else(|| self.page.and_then(|p| p.total_pages))
    }

    pub fn total_elements(&self) -> Option<u64> {
        self.total_elements
            .or_else(|| self.page.and_then(|p| p.total_elements))
    }
}

/// `data` of a list response, decoded once at the API boundary
///
/// Variants are tried in order: an object with `content`, a bare array,
/// then anything else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryListPayload {
    Paginated(CategoryPage),
    Flat(Vec<Category>),
    Unrecognized(serde_json::Value),
}

/// Normalized result of a list request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryListing {
    pub items: Vec<Category>,
    /// `None` for flat (unpaginated) responses
    pub total_pages: Option<u32>,
    pub total_elements: Option<u64>,
}

impl CategoryListing {
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages.is_some_and(|n| n > 1)
    }
}

impl From<Option<CategoryListPayload>> for CategoryListing {
    fn from(payload: Option<CategoryListPayload>) -> Self {
        match payload {
            Some(CategoryListPayload::Paginated(page)) => Self {
                total_pages: page.total_pages(),
                total_elements: page.total_elements(),
                items: page.content,
            },
            Some(CategoryListPayload::Flat(items)) => Self {
                total_elements: Some(items.len() as u64),
                total_pages: None,
                items,
            },
            Some(CategoryListPayload::Unrecognized(_)) | None => Self::default(),
        }
    }
}
