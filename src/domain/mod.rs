//! Domain layer containing the classification vocabulary.
//!
//! Defines the closed category set, the request/result entities, the lookup
//! tables and the per-call score accumulator. Nothing here performs I/O except
//! the optional JSON loader for [`tables::CategoryTables`].
//!
//! # Architecture
//!
//! - [`category`] - Closed enumeration of categories plus the uncategorized sentinel
//! - [`entities`] - Classification input and output records
//! - [`tables`] - Domain and keyword pattern tables
//! - [`score_board`] - Ephemeral per-category score accumulator
//!
//! # Classification Flow
//!
//! 1. URL is reduced to a bare host by [`crate::utils::extract_domain`]
//! 2. [`crate::utils::scoring::score`] fills a [`score_board::ScoreBoard`]
//! 3. [`crate::utils::scoring::select`] picks the category and confidence
//! 4. [`crate::utils::tag_generator::generate_tags`] derives tags from domain and title

pub mod category;
pub mod entities;
pub mod score_board;
pub mod tables;

pub use category::{Category, UnknownCategory};
pub use score_board::ScoreBoard;
pub use tables::{CategoryTables, TablesError};
