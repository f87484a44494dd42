use serde::{Deserialize, Serialize};

/// Outer wrapper the backend puts around every JSON response
///
/// Both fields are optional on the wire: errors usually carry only
/// `message`, list and detail responses carry `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Non-blank server message, if any
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Extract the envelope `message` from a raw response body.
///
/// Returns `None` for empty bodies, non-JSON bodies and blank messages.
pub fn message_from_body(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_error_body() {
        let body = r#"{"message":"Category already exists","data":null}"#;
        assert_eq!(
            message_from_body(body).as_deref(),
            Some("Category already exists")
        );
    }

    #[test]
    fn test_message_from_body_without_message() {
        assert_eq!(message_from_body(""), None);
        assert_eq!(message_from_body("{}"), None);
        assert_eq!(message_from_body(r#"{"message":"  "}"#), None);
        assert_eq!(message_from_body("<html>Bad Gateway</html>"), None);
    }

    #[test]
    fn test_envelope_with_missing_fields() {
        let envelope: ApiEnvelope<i64> = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.data, None);

        let envelope: ApiEnvelope<i64> =
            serde_json::from_str(r#"{"message":"ok","data":7}"#).unwrap();
        assert_eq!(envelope.message(), Some("ok"));
        assert_eq!(envelope.data, Some(7));
    }
}
