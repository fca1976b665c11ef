//! HTTP router configuration.
//!
//! This module builds the Axum router for the preview server. There is one
//! real route, `/health`; everything else falls through to the adapter, which
//! owns the asset-vs-route decision.

use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use edge_adapter_core::SsrApp;

use crate::handler::{handle_request, health_check};
use crate::state::AppState;

/// Build the preview router.
///
/// Routes:
/// - `GET /health` - Health check
/// - anything else - through the adapter (assets, application routes, 404)
pub fn build_router<A: SsrApp + 'static>(state: AppState<A>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .fallback(handle_request::<A>)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
