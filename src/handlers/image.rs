//! Image endpoint stub.
//!
//! The Imagen API needs Google Cloud authentication rather than a plain
//! API key, so this endpoint returns a fixed placeholder instead of
//! calling out.

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::{ImageRequest, ImageStubResponse};

/// Placeholder image returned by the stub.
const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/800x600/a78bfa/ffffff?text=AI+Image+Demo";

/// Always answers 501, for any input including an empty body.
pub async fn generate_image(payload: Option<Json<ImageRequest>>) -> impl IntoResponse {
    let prompt_len = payload.map(|Json(req)| req.prompt.len()).unwrap_or(0);

    tracing::warn!(prompt_len, "Image generation is a demo stub; returning a placeholder");

    (
        StatusCode::NOT_IMPLEMENTED,
        Json(ImageStubResponse {
            error: "Image generation backend not fully implemented. Requires advanced setup."
                .to_string(),
            placeholder: PLACEHOLDER_IMAGE_URL.to_string(),
        }),
    )
}
