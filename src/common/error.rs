use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::common::response::ApiResponse;

/// Everything a handler can fail with, mapped onto the response envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("One or more fields are invalid")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Slug '{0}' is already in use")]
    DuplicateSlug(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Flattens validator output into one human-readable line, e.g.
    /// "image: Image is required; name: Name is required".
    fn validation_message(errors: &validator::ValidationErrors) -> String {
        let mut parts: Vec<String> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors {
                match &err.message {
                    Some(msg) => parts.push(format!("{field}: {msg}")),
                    None => parts.push(format!("{field}: invalid value")),
                }
            }
        }
        // field_errors() iterates a map, sort for a stable message
        parts.sort();
        parts.join("; ")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Self::validation_message(&errors),
                None,
            ),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, None),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string(), None),
            AppError::DuplicateSlug(slug) => (
                StatusCode::BAD_REQUEST,
                format!("Slug '{slug}' is already in use"),
                None,
            ),
            AppError::Database(err) => {
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(err.to_string()),
                )
            }
            AppError::Internal(err) => {
                tracing::error!("internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(err.to_string()),
                )
            }
        };

        (status, Json(ApiResponse::error(message, detail))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body, http::StatusCode, response::IntoResponse};
    use serde_json::Value;
    use validator::Validate;

    async fn body_json(response: Response) -> Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[tokio::test]
    async fn validation_errors_become_400_envelopes() {
        let errors = Probe { name: String::new() }.validate().unwrap_err();
        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "name: Name is required");
    }

    #[tokio::test]
    async fn not_found_keeps_its_message() {
        let response = AppError::NotFound("Banner not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Banner not found");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn internal_errors_expose_the_cause_in_error() {
        let response = AppError::Internal(anyhow::anyhow!("disk on fire")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["error"], "disk on fire");
    }
}
