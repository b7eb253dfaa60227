//! Bookmark classification service.

use std::sync::Arc;

use crate::domain::CategoryTables;
use crate::domain::entities::{ClassificationInput, ClassificationOutput};
use crate::utils::extract_domain::extract_domain;
use crate::utils::scoring::{score, select};
use crate::utils::tag_generator::generate_tags;

/// Service assigning a category, confidence and tags to bookmarks.
///
/// Owns read-only [`CategoryTables`] shared through an `Arc`, so one instance
/// can serve any number of concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct ClassificationService {
    tables: Arc<CategoryTables>,
}

impl ClassificationService {
    /// Creates a new classification service.
    pub fn new(tables: Arc<CategoryTables>) -> Self {
        Self { tables }
    }

    /// Service backed by [`CategoryTables::builtin`].
    pub fn with_builtin_tables() -> Self {
        Self::new(Arc::new(CategoryTables::builtin()))
    }

    pub fn tables(&self) -> &CategoryTables {
        &self.tables
    }

    /// Classifies a bookmark.
    ///
    /// # Pipeline
    ///
    /// 1. Extract the domain from the URL (unparseable URLs give an empty domain)
    /// 2. Score every category from domain, URL, title and description
    /// 3. Select the best category, falling back to uncategorized below the floor
    /// 4. Generate tags from domain and title, independent of the category
    ///
    /// Never fails and has no side effects beyond logging and a metrics counter;
    /// identical input always yields identical output.
    pub fn classify(&self, input: &ClassificationInput) -> ClassificationOutput {
        let domain = extract_domain(&input.url);

        let board = score(
            &self.tables,
            &input.url,
            &input.title,
            input.description.as_deref(),
            &domain,
        );
        let (category, confidence) = select(&board);

        let suggested_tags = generate_tags(&input.title, &domain);

        tracing::debug!(
            domain = %domain,
            category = %category,
            confidence,
            tags = suggested_tags.len(),
            "Bookmark classified"
        );
        metrics::counter!("classifications_total", "category" => category.as_str()).increment(1);

        ClassificationOutput {
            category,
            confidence,
            suggested_tags,
        }
    }
}

impl Default for ClassificationService {
    fn default() -> Self {
        Self::with_builtin_tables()
    }
}
