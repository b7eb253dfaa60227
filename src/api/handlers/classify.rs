//! Handler for single bookmark classification.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::classify::{ClassifyRequest, ClassifyResponse};
use crate::domain::entities::ClassificationInput;
use crate::error::AppError;
use crate::state::AppState;

/// Classifies a bookmark and suggests tags.
///
/// # Endpoint
///
/// `POST /classify`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://github.com/foo/bar",
///   "title": "Awesome Python Tutorial",
///   "description": null
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "category": "technology",
///   "confidence": 90.0,
///   "suggested_tags": ["github", "awesome", "python", "tutorial"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field exceeds its length limit.
/// Malformed URLs are not errors; they classify with an empty domain.
pub async fn classify_handler(
    State(state): State<AppState>,
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    payload.validate()?;

    let input = ClassificationInput::from(payload);
    tracing::info!("Classifying bookmark: {}", input.url);

    let output = state.classifier.classify(&input);
    tracing::info!(
        "Classification result: {} ({}%)",
        output.category,
        output.confidence
    );

    Ok(Json(output.into()))
}
