// src/handlers/uploads.rs

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::common::response::ApiResponse;
use crate::config::AppState;

const ALLOWED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadedFile {
    /// Path the stored image is served from, e.g. `/uploads/image-....png`.
    pub url: String,
    pub filename: String,
}

fn image_extension(original: &str) -> Result<String, AppError> {
    let ext = Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(AppError::BadRequest(
            "Only image files are allowed (jpg, jpeg, png, gif, webp, svg)".to_string(),
        ))
    }
}

/// Stores the `image` field of a multipart form under the uploads directory
/// with a collision-proof name and answers with the public URL.
#[utoipa::path(
    post,
    path = "/api/upload",
    responses(
        (status = 201, description = "Image stored", body = UploadedFile),
        (status = 400, description = "Missing image field or unsupported file type")
    ),
    tag = "uploads"
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original = field.file_name().unwrap_or("upload").to_string();
        let ext = image_extension(&original)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if data.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let filename = format!(
            "image-{}-{}.{ext}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        );

        tokio::fs::create_dir_all(&state.uploads_dir)
            .await
            .map_err(anyhow::Error::from)?;
        tokio::fs::write(state.uploads_dir.join(&filename), &data)
            .await
            .map_err(anyhow::Error::from)?;

        let uploaded = UploadedFile {
            url: format!("/uploads/{filename}"),
            filename,
        };
        return Ok((
            StatusCode::CREATED,
            Json(ApiResponse::ok_with_message(uploaded, "File uploaded successfully")),
        ));
    }

    Err(AppError::BadRequest("No image field in request".to_string()))
}

#[cfg(test)]
mod tests {
    use super::image_extension;

    #[test]
    fn accepts_known_image_extensions() {
        assert_eq!(image_extension("photo.JPG").unwrap(), "jpg");
        assert_eq!(image_extension("banner.webp").unwrap(), "webp");
    }

    #[test]
    fn rejects_everything_else() {
        assert!(image_extension("script.sh").is_err());
        assert!(image_extension("noextension").is_err());
    }
}
