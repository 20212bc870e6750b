//! Image upload route.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
};
use hackathons_api_types::UploadResponse;
use hackathons_core::domain::{ImageUpload, MAX_IMAGE_BYTES};
use tracing::info;

use super::error::ApiError;
use super::state::AppState;

/// Room for multipart framing around a maximum-size image.
const BODY_LIMIT: usize = MAX_IMAGE_BYTES + 64 * 1024;

/// Builds the image upload route.
pub fn create_uploads_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/upload", post(upload_image))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}

/// Stores the multipart `file` field and returns its public URL.
async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        let upload = ImageUpload::new(file_name, content_type, bytes.to_vec())?;
        let size = upload.bytes.len();
        let url = state.blobs.put(upload).await?;

        info!(%url, size, "image uploaded");
        return Ok(Json(UploadResponse { url }));
    }

    Err(ApiError::validation("no file was provided"))
}
