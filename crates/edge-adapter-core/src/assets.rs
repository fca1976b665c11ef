//! Asset-fetch facility seam.
//!
//! On the real platform this capability arrives inside the environment
//! bindings; the preview server substitutes a filesystem-backed store.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};

use edge_adapter_common::AdapterError;

/// The platform's asset-fetch facility.
///
/// The adapter passes the original request through unmodified and interprets
/// the response status itself (404 and non-200 handling, Content-Type
/// forcing). Implementations should not try to be clever about either.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Fetch the asset addressed by the request.
    ///
    /// A missing asset is a `404` response, not an error; errors are reserved
    /// for the facility failing to answer at all.
    async fn fetch(&self, request: Request<Body>) -> Result<Response<Body>, AdapterError>;
}
