//! API route handlers.
//!
//! - `analyze`: POST /api/v1/analyze, which fetches a repo tree and writes a blog post
//! - `generation`: GET /api/v1/generation/check, a backend reachability probe

pub mod analyze;
pub mod generation;

use std::sync::Arc;

use axum::Router;

use crate::github::TreeWalker;
use crate::summary::SummaryGenerator;

/// Read-only state shared by all requests.
pub struct AppState {
    pub walker: TreeWalker,
    pub summarizer: SummaryGenerator,
}

pub type SharedState = Arc<AppState>;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .merge(analyze::routes(state.clone()))
        .merge(generation::routes(state))
}
