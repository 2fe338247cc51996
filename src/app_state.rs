//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::EstimateService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Estimate service for all business logic.
    pub estimate_service: Arc<EstimateService>,
}
