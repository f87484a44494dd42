//! API utilities for frontend-backend communication
//!
//! Resolves the backend base URL and maps HTTP responses onto [`ApiError`].

use contracts::shared::api::{message_from_body, ApiEnvelope};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Port the catalog backend listens on when no base URL is configured
pub const DEFAULT_API_PORT: u16 = 8080;

/// Compile-time override of the backend location,
/// e.g. `CATEGORY_API_BASE=https://shop.example.com trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("CATEGORY_API_BASE");

/// Get the base URL for API requests
///
/// Uses `CATEGORY_API_BASE` when it was set at build time, otherwise the
/// current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname, DEFAULT_API_PORT)
}

fn base_from_location(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/v1/categories/5");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    #[error("Failed to send request: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text shown to the user: the server's message when it sent one,
    /// otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Pass a 2xx response through; turn anything else into [`ApiError::Status`]
/// carrying the envelope message when the body has one
pub async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: message_from_body(&body),
    })
}

/// Read and decode a JSON envelope; an empty body is an empty envelope
pub async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiEnvelope<T>, ApiError> {
    let body = response.text().await?;
    parse_envelope(&body)
}

/// Read the optional `message` of a successful mutation response.
///
/// Bodies that are empty (204) or not JSON yield `None` instead of an error.
pub async fn read_message(response: Response) -> Option<String> {
    let body = response.text().await.unwrap_or_default();
    message_from_body(&body)
}

/// Empty bodies and JSON that is not an object decode to an empty envelope
fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>, ApiError> {
    let empty = ApiEnvelope {
        message: None,
        data: None,
    };
    if body.trim().is_empty() {
        return Ok(empty);
    }
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !value.is_object() {
        log::warn!("Response body is not an envelope object: {}", value);
        return Ok(empty);
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        assert_eq!(
            base_from_location("https:", "shop.example.com", 8080),
            "https://shop.example.com:8080"
        );
    }

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:8080/", "/api/v1/categories"),
            "http://localhost:8080/api/v1/categories"
        );
        assert_eq!(
            join_url("http://localhost:8080", "api/v1/categories"),
            "http://localhost:8080/api/v1/categories"
        );
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let conflict = ApiError::Status {
            status: 409,
            message: Some("Category already exists".to_string()),
        };
        assert_eq!(
            conflict.user_message("Failed to save category"),
            "Category already exists"
        );
        assert_eq!(conflict.status(), Some(409));
        assert_eq!(conflict.to_string(), "HTTP 409: Category already exists");

        let bare = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.user_message("Failed to save category"), "Failed to save category");
        assert_eq!(bare.to_string(), "HTTP 500: no message");

        let offline = ApiError::Transport("NetworkError".to_string());
        assert_eq!(offline.user_message("Failed to fetch categories"), "Failed to fetch categories");
        assert_eq!(offline.status(), None);
    }

    #[test]
    fn test_parse_envelope() {
        let empty: ApiEnvelope<serde_json::Value> = parse_envelope("  ").unwrap();
        assert_eq!(empty.data, None);

        let parsed: ApiEnvelope<i64> = parse_envelope(r#"{"data":3}"#).unwrap();
        assert_eq!(parsed.data, Some(3));

        let broken = parse_envelope::<i64>("{not json");
        assert!(matches!(broken, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_parse_non_object_body_is_empty_envelope() {
        for body in ["[]", r#""ok""#, "null", "42"] {
            let parsed: ApiEnvelope<serde_json::Value> = parse_envelope(body).unwrap();
            assert_eq!(parsed.data, None, "body {}", body);
            assert_eq!(parsed.message, None, "body {}", body);
        }
    }
}
