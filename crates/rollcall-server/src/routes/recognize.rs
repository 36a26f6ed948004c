//! Image recognition route

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use rollcall::normalize;
use tracing::{info, warn};

use crate::AppState;
use crate::models::{RecognizeImageRequest, RecognizeImageResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(recognize_image))
}

/// Extract person names from an uploaded image via the vision
/// collaborator, returning both the raw text and the normalized tokens.
async fn recognize_image(
    State(state): State<AppState>,
    Json(request): Json<RecognizeImageRequest>,
) -> impl IntoResponse {
    if request.image_base64.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(RecognizeImageResponse::err("missing image data".to_string())),
        );
    }

    match state.vision.extract_names(&request.image_base64).await {
        Ok(text) => {
            let names = normalize(&text);
            info!(count = names.len(), "recognized names from image");
            (StatusCode::OK, Json(RecognizeImageResponse::ok(text, names)))
        }
        Err(e) => {
            warn!(error = %e, "image recognition failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(RecognizeImageResponse::err(e.to_string())),
            )
        }
    }
}
