//! REST endpoint handlers organized by resource.

pub mod estimate;
pub mod system;
pub mod token;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(estimate::routes())
        .merge(token::routes())
}
