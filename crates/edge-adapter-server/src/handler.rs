//! Request handler feeding preview traffic into the adapter.
//!
//! Every request that reaches the preview server goes through the adapter
//! exactly as the platform would invoke it; this module only adds request-id
//! and latency logging around the call.

use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::response::IntoResponse;
use tracing::{error, info, instrument};
use uuid::Uuid;

use edge_adapter_core::SsrApp;

use crate::state::AppState;

/// Run one request through the adapter.
#[instrument(skip_all, fields(path = %request.uri().path()))]
pub async fn handle_request<A: SsrApp + 'static>(
    State(state): State<AppState<A>>,
    request: Request<Body>,
) -> Response<Body> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %request.method(),
        "Handling request"
    );

    let result = state
        .adapter()
        .handle(request, state.env(), state.context())
        .await;

    let duration = start.elapsed();

    match result {
        Ok(response) => {
            info!(
                request_id = %request_id,
                status = response.status().as_u16(),
                duration_ms = duration.as_millis(),
                "Request completed"
            );
            response
        }
        Err(e) => {
            error!(
                request_id = %request_id,
                error = %e,
                duration_ms = duration.as_millis(),
                "Request failed"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

/// Health check handler.
///
/// Returns 200 OK if the server is running.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
