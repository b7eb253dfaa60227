//! Classification building blocks.
//!
//! This module provides the pure functions composed by
//! [`crate::application::services::ClassificationService`]:
//!
//! - [`extract_domain`] - Host extraction from a URL string
//! - [`scoring`] - Per-category score accumulation and best-category selection
//! - [`tag_generator`] - Suggested tags from domain and title

pub mod extract_domain;
pub mod scoring;
pub mod tag_generator;
