//! Application runtime seam.
//!
//! The SSR runtime owns route matching, rendering, and the route-match
//! representation; the adapter treats all three as opaque through [`SsrApp`].

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};

use edge_adapter_common::AdapterError;

/// Options for route matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    /// Report the unmatched case as `None` instead of synthesizing an
    /// application-level not-found route. The adapter always sets this: it
    /// owns the final 404.
    pub match_not_found: bool,
}

/// The external server-side rendering runtime.
///
/// The adapter calls `match_route` once per non-asset request, and `render`
/// once per match. Render errors propagate unhandled to the platform's
/// top-level handler.
#[async_trait]
pub trait SsrApp: Send + Sync {
    /// Opaque route-match result; lives for a single request.
    type Route: Send + Sync;

    /// Match the request against the application's route table.
    fn match_route(&self, request: &Request<Body>, options: MatchOptions) -> Option<Self::Route>;

    /// Render the matched route.
    ///
    /// `ctx` carries the request-scoped metadata the pipeline reads: client
    /// address and runtime descriptor. It is built before this call and
    /// dropped after it.
    async fn render(
        &self,
        request: Request<Body>,
        route: &Self::Route,
        ctx: &crate::RequestContext,
    ) -> Result<Response<Body>, AdapterError>;

    /// `Set-Cookie` values computed during rendering.
    ///
    /// Runtimes whose response model cannot hold repeated `Set-Cookie`
    /// entries expose them here instead; the adapter appends each one to the
    /// outgoing headers. The default is a runtime with no such side channel.
    fn set_cookie_headers(&self, response: &Response<Body>) -> Vec<String> {
        let _ = response;
        Vec::new()
    }
}
