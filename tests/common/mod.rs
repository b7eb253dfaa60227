#![allow(dead_code)]

use axum::Router;
use bookmark_classifier::api::handlers::not_found_handler;
use bookmark_classifier::api::routes::{classify_routes, public_routes};
use bookmark_classifier::application::services::ClassificationService;
use bookmark_classifier::domain::CategoryTables;
use bookmark_classifier::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    create_state_with_tables(CategoryTables::builtin(), 100)
}

pub fn create_state_with_tables(tables: CategoryTables, max_batch_size: usize) -> AppState {
    let classifier = Arc::new(ClassificationService::new(Arc::new(tables)));
    AppState::new(classifier, max_batch_size)
}

/// Full route set without rate limiting, which needs a peer socket address.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(classify_routes())
        .fallback(not_found_handler)
        .with_state(state)
}
