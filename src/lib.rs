//! # Bookmark Classifier
//!
//! A deterministic, rule-based service that assigns a topical category and
//! suggested tags to a bookmark from its URL, title and optional description.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Categories, entities, lookup tables, score board
//! - **Application Layer** ([`application`]) - The classification service
//! - **Utilities** ([`utils`]) - Domain extraction, scoring, tag generation
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Classification
//!
//! - Domain match against curated host lists (`+60`)
//! - Keyword matches in URL (`+10` each, max `30`), title (`+10`, max `30`)
//!   and description (`+5`, max `20`)
//! - Highest score wins, ties go to the earlier category; confidence is capped
//!   at `100` and anything below `10` is `uncategorized`
//! - Up to five tags from the domain name and the title's meaningful words
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST localhost:8000/classify \
//!   -H 'content-type: application/json' \
//!   -d '{"url":"https://github.com/foo/bar","title":"Awesome Python Tutorial"}'
//!
//! # Or from the command line
//! cargo run --bin classify -- --url https://github.com/foo/bar --title "Awesome Python Tutorial"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod logging;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ClassificationService;
    pub use crate::domain::entities::{ClassificationInput, ClassificationOutput};
    pub use crate::domain::{Category, CategoryTables};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
