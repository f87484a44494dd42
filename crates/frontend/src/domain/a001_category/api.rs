//! REST client for `/api/v1/categories`

use contracts::domain::a001_category::aggregate::{Category, CategoryId, CategoryRequest};
use contracts::domain::a001_category::listing::{
    CategoryListPayload, CategoryListQuery, CategoryListing,
};
use contracts::domain::common::{AggregateId, AggregateRoot};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_success, read_envelope, read_message, ApiError};

pub fn collection_path() -> String {
    format!("/api/v1/{}", Category::collection_name())
}

pub fn list_path(query: &CategoryListQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("{}?{}", collection_path(), qs))
}

pub fn item_path(id: CategoryId) -> String {
    format!("{}/{}", collection_path(), id.as_string())
}

pub fn status_path(id: CategoryId) -> String {
    format!("{}/status", item_path(id))
}

/// Fetch one page of categories
pub async fn fetch_categories(query: &CategoryListQuery) -> Result<CategoryListing, ApiError> {
    let url = api_url(&list_path(query)?);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    let response = ensure_success(response).await?;
    let envelope = read_envelope::<CategoryListPayload>(response).await?;

    if let Some(CategoryListPayload::Unrecognized(data)) = &envelope.data {
        log::warn!("Unexpected category list payload, showing empty list: {}", data);
    }
    Ok(envelope.data.into())
}

/// Fetch the authoritative record of one category
pub async fn fetch_category(id: CategoryId) -> Result<Category, ApiError> {
    let url = api_url(&item_path(id));
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    let response = ensure_success(response).await?;
    read_envelope::<Category>(response)
        .await?
        .data
        .ok_or_else(|| ApiError::Decode(format!("no category data for id {}", id)))
}

/// Create a category; returns the server's message, if any
pub async fn create_category(request: &CategoryRequest) -> Result<Option<String>, ApiError> {
    let url = api_url(&collection_path());
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    let response = ensure_success(response).await?;

    log::info!("Category {:?} created", request.category_name);
    Ok(read_message(response).await)
}

/// Update name and description of a category; returns the server's message, if any
pub async fn update_category(
    id: CategoryId,
    request: &CategoryRequest,
) -> Result<Option<String>, ApiError> {
    let url = api_url(&item_path(id));
    log::debug!("PUT {}", url);

    let response = Request::put(&url)
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    let response = ensure_success(response).await?;

    log::info!("Category {} updated", id);
    Ok(read_message(response).await)
}

/// Flip active/inactive. The request has no body; the server answers 204.
pub async fn toggle_category_status(id: CategoryId) -> Result<(), ApiError> {
    let url = api_url(&status_path(id));
    log::debug!("PATCH {}", url);

    let response = Request::patch(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    ensure_success(response).await?;

    log::info!("Category {} status toggled", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::listing::StatusFilter;

    #[test]
    fn test_list_path_for_active_filter() {
        let query = CategoryListQuery::new(StatusFilter::Active, 0);
        assert_eq!(
            list_path(&query).unwrap(),
            "/api/v1/categories?page=0&size=10&status=true"
        );
    }

    #[test]
    fn test_list_path_without_status() {
        let query = CategoryListQuery::new(StatusFilter::All, 2);
        assert_eq!(list_path(&query).unwrap(), "/api/v1/categories?page=2&size=10");

        let query = CategoryListQuery::new(StatusFilter::Inactive, 1);
        assert_eq!(
            list_path(&query).unwrap(),
            "/api/v1/categories?page=1&size=10&status=false"
        );
    }

    #[test]
    fn test_item_paths() {
        assert_eq!(item_path(CategoryId(5)), "/api/v1/categories/5");
        assert_eq!(status_path(CategoryId(5)), "/api/v1/categories/5/status");
    }
}
