//! Business logic services for the application layer.

pub mod classification_service;

pub use classification_service::ClassificationService;
