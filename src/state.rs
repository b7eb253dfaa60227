//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ClassificationService;

/// Default upper bound for `POST /classify/batch`.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<ClassificationService>,
    pub max_batch_size: usize,
}

impl AppState {
    pub fn new(classifier: Arc<ClassificationService>, max_batch_size: usize) -> Self {
        Self {
            classifier,
            max_batch_size,
        }
    }
}
