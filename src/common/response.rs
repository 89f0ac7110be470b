// src/common/response.rs

use serde::{Deserialize, Serialize};

/// The uniform JSON envelope every API endpoint answers with.
///
/// Success responses carry `data` (and `count` for lists), failures carry
/// `message` and, for server-side faults, the underlying `error` text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            count: None,
        }
    }

    /// Success with a human-readable confirmation, used by create/update.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Success for list endpoints; `count` mirrors the number of items.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: None,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success with no payload, used by delete confirmations.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            count: None,
        }
    }

    pub fn error(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error,
            count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiResponse;

    #[test]
    fn list_envelope_counts_items() {
        let body = serde_json::to_value(ApiResponse::list(vec![1, 2, 3])).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 3);
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let body = serde_json::to_value(ApiResponse::ok("x")).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("success"));
        assert!(obj.contains_key("data"));
    }

    #[test]
    fn error_envelope_keeps_detail() {
        let body =
            serde_json::to_value(ApiResponse::error("Internal server error", Some("boom".into())))
                .unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "boom");
    }
}
