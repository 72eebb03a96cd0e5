use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::interests::InterestStore;
use crate::recommendation::engine::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and shared read-only by every request.
    pub recommender: Arc<dyn Recommender>,
    pub catalog: Arc<dyn CareerCatalog>,
    pub interests: Arc<dyn InterestStore>,
}
