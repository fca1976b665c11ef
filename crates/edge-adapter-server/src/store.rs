//! Filesystem-backed asset store for local preview.
//!
//! Stands in for the platform asset facility: serves files from the build
//! output directory, answering misses with a 404 the way the facility does.
//! Content types are left alone here; the adapter forces them from the path.

use std::path::PathBuf;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use tracing::debug;

use edge_adapter_common::AdapterError;
use edge_adapter_core::AssetStore;

/// Asset store reading from a local directory.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    /// Root directory of the build output.
    root: PathBuf,
}

impl DirAssetStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl AssetStore for DirAssetStore {
    async fn fetch(&self, request: Request<Body>) -> Result<Response<Body>, AdapterError> {
        let path = request.uri().path();
        let relative = path.trim_start_matches('/');

        // Paths come from the manifest, but refuse traversal anyway.
        if relative.split('/').any(|segment| segment == "..") {
            debug!(path, "Rejecting traversal path");
            return not_found();
        }

        let full_path = self.root.join(relative);
        match tokio::fs::read(&full_path).await {
            Ok(bytes) => Ok(Response::new(Body::from(bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path, "Asset file missing");
                not_found()
            }
            Err(e) => Err(AdapterError::asset_fetch(path, e.to_string())),
        }
    }
}

/// Facility-style 404, boilerplate body included.
fn not_found() -> Result<Response<Body>, AdapterError> {
    let mut response = Response::new(Body::from("not found"));
    *response.status_mut() = StatusCode::NOT_FOUND;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    async fn store_with_file(name: &str, content: &[u8]) -> DirAssetStore {
        let dir = std::env::temp_dir().join(format!("edge-adapter-test-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join(name), content).await.unwrap();
        DirAssetStore::new(dir)
    }

    #[tokio::test]
    async fn test_fetch_existing_file() {
        let store = store_with_file("app.js", b"console.log(1)").await;

        let response = store.fetch(request("/app.js")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"console.log(1)");
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_404() {
        let store = store_with_file("app.js", b"x").await;

        let response = store.fetch(request("/missing.css")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_traversal_is_404() {
        let store = store_with_file("app.js", b"x").await;

        let response = store.fetch(request("/../etc/passwd")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
