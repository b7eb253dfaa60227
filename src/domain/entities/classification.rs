//! Classification input and output records.

use crate::domain::category::Category;

/// A bookmark to classify.
///
/// `url` and `title` may be empty; an empty title simply contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationInput {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
}

impl ClassificationInput {
    /// Creates a new ClassificationInput instance.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description,
        }
    }
}

/// Result of classifying a bookmark.
///
/// `confidence` lies in `[0, 100]` and is `0.0` exactly when `category` is
/// [`Category::Uncategorized`]. `suggested_tags` holds at most five unique,
/// lowercase tags in discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOutput {
    pub category: Category,
    pub confidence: f64,
    pub suggested_tags: Vec<String>,
}

impl ClassificationOutput {
    /// Result with no category and no tags.
    pub fn uncategorized() -> Self {
        Self {
            category: Category::Uncategorized,
            confidence: 0.0,
            suggested_tags: Vec::new(),
        }
    }

    /// Returns true if no category reached the confidence floor.
    pub fn is_uncategorized(&self) -> bool {
        self.category == Category::Uncategorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_new() {
        let input = ClassificationInput::new("https://example.com", "Example", None);

        assert_eq!(input.url, "https://example.com");
        assert_eq!(input.title, "Example");
        assert!(input.description.is_none());
    }

    #[test]
    fn test_uncategorized_output() {
        let output = ClassificationOutput::uncategorized();

        assert!(output.is_uncategorized());
        assert_eq!(output.confidence, 0.0);
        assert!(output.suggested_tags.is_empty());
    }
}
