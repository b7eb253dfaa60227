//! DTOs for batch classification endpoint.

use serde::{Deserialize, Serialize};

use crate::api::dto::classify::{ClassifyRequest, ClassifyResponse};
use crate::error::ErrorInfo;

/// Request to classify several bookmarks at once.
#[derive(Debug, Deserialize)]
pub struct BatchClassifyRequest {
    pub items: Vec<ClassifyRequest>,
}

/// Response containing batch processing results, in request order.
#[derive(Debug, Serialize)]
pub struct BatchClassifyResponse {
    pub summary: BatchSummary,
    pub items: Vec<BatchResultItem>,
}

/// Individual result for a bookmark in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchResultItem {
    Success {
        url: String,
        #[serde(flatten)]
        result: ClassifyResponse,
    },
    Error {
        url: String,
        error: ErrorInfo,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}
