//! Handler for batch classification endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::batch::{
    BatchClassifyRequest, BatchClassifyResponse, BatchResultItem, BatchSummary,
};
use crate::api::dto::classify::{ClassifyRequest, ClassifyResponse};
use crate::domain::entities::ClassificationInput;
use crate::error::AppError;
use crate::state::AppState;

/// Classifies several bookmarks in one request.
///
/// # Endpoint
///
/// `POST /classify/batch`
///
/// # Batch Processing
///
/// Items are processed independently and returned in request order. An item
/// failing validation is reported in place; the others still classify.
///
/// # Request Body
///
/// ```json
/// {
///   "items": [
///     { "url": "https://github.com/foo/bar", "title": "Awesome Python Tutorial" },
///     { "url": "http://example.org/x", "title": "hi" }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "successful": 2, "failed": 0 },
///   "items": [
///     {
///       "url": "https://github.com/foo/bar",
///       "category": "technology",
///       "confidence": 90.0,
///       "suggested_tags": ["github", "awesome", "python", "tutorial"]
///     },
///     {
///       "url": "http://example.org/x",
///       "category": "uncategorized",
///       "confidence": 0.0,
///       "suggested_tags": ["example"]
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the batch is empty or larger than the
/// configured maximum.
pub async fn classify_batch_handler(
    State(state): State<AppState>,
    Json(payload): Json<BatchClassifyRequest>,
) -> Result<Json<BatchClassifyResponse>, AppError> {
    let total = payload.items.len();
    if total == 0 || total > state.max_batch_size {
        return Err(AppError::bad_request(
            "Batch size out of range",
            json!({ "min": 1, "max": state.max_batch_size, "actual": total }),
        ));
    }

    let mut results = Vec::with_capacity(total);
    let mut successful = 0;
    let mut failed = 0;

    for item in payload.items {
        let url = item.url.clone();

        match process_single_item(&state, item) {
            Ok(result) => {
                successful += 1;
                results.push(BatchResultItem::Success { url, result });
            }
            Err(err) => {
                failed += 1;
                results.push(BatchResultItem::Error {
                    url,
                    error: err.to_error_info(),
                });
            }
        }
    }

    tracing::info!(total, successful, failed, "Batch classified");

    Ok(Json(BatchClassifyResponse {
        summary: BatchSummary {
            total,
            successful,
            failed,
        },
        items: results,
    }))
}

/// Validates and classifies a single batch item.
fn process_single_item(
    state: &AppState,
    item: ClassifyRequest,
) -> Result<ClassifyResponse, AppError> {
    item.validate()?;
    let output = state.classifier.classify(&ClassificationInput::from(item));
    Ok(output.into())
}
