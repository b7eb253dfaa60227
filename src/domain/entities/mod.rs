//! Value types flowing through a classification call.
//!
//! Entities are plain immutable data. Nothing is persisted; a record is built
//! per request and dropped with the response.
//!
//! - [`ClassificationInput`] - URL, title and optional description
//! - [`ClassificationOutput`] - Category, confidence and suggested tags

pub mod classification;

pub use classification::{ClassificationInput, ClassificationOutput};
