//! DTOs for the classification endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Category;
use crate::domain::entities::{ClassificationInput, ClassificationOutput};

/// Request to classify a single bookmark.
///
/// `url` and `title` must be present but may be empty strings.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClassifyRequest {
    /// The bookmark URL (not required to be well-formed).
    #[validate(length(max = 8192, message = "URL is too long"))]
    pub url: String,

    /// The bookmark title.
    #[validate(length(max = 1024, message = "Title is too long"))]
    pub title: String,

    /// Optional free-text description.
    #[serde(default)]
    #[validate(length(max = 8192, message = "Description is too long"))]
    pub description: Option<String>,
}

impl From<ClassifyRequest> for ClassificationInput {
    fn from(request: ClassifyRequest) -> Self {
        ClassificationInput::new(request.url, request.title, request.description)
    }
}

/// Classification result.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub category: Category,
    pub confidence: f64,
    pub suggested_tags: Vec<String>,
}

impl From<ClassificationOutput> for ClassifyResponse {
    fn from(output: ClassificationOutput) -> Self {
        Self {
            category: output.category,
            confidence: output.confidence,
            suggested_tags: output.suggested_tags,
        }
    }
}
