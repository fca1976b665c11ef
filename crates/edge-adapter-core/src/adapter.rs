//! The edge request adapter.
//!
//! One invocation per incoming request: decide between the static-asset
//! fallback and application routing, delegate, and normalize the result.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, SET_COOKIE};
use axum::http::{HeaderValue, Request, Response, StatusCode};
use tracing::{debug, instrument, warn};

use edge_adapter_common::{AdapterConfig, AdapterError};

use crate::app::{MatchOptions, SsrApp};
use crate::bindings::EnvBindings;
use crate::context::{ExecutionContext, RequestContext};
use crate::manifest::Manifest;
use crate::{mime, response};

/// Maps the platform entry point onto the application runtime.
///
/// Holds only immutable, deployment-scoped state (the application handle, the
/// manifest, and configuration); everything request-scoped is built inside
/// [`handle`](Self::handle) and dropped with it, so concurrent invocations
/// never share mutable state.
#[derive(Debug, Clone)]
pub struct EdgeAdapter<A> {
    /// The application runtime.
    app: Arc<A>,
    /// Known static-asset paths.
    manifest: Manifest,
    /// Platform constants.
    config: AdapterConfig,
}

impl<A: SsrApp> EdgeAdapter<A> {
    /// Create an adapter with default platform constants.
    pub fn new(app: Arc<A>, manifest: Manifest) -> Self {
        Self::with_config(app, manifest, AdapterConfig::default())
    }

    /// Create an adapter with explicit configuration.
    pub fn with_config(app: Arc<A>, manifest: Manifest, config: AdapterConfig) -> Self {
        Self {
            app,
            manifest,
            config,
        }
    }

    /// The asset manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The adapter configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Handle one platform invocation.
    ///
    /// This is the platform's `fetch(request, env, context)` shape:
    /// 1. A path in the manifest's asset set goes to the asset facility, with
    ///    the status branches and Content-Type forcing applied.
    /// 2. Otherwise the application matches the request; on a match the
    ///    request context (client address + runtime descriptor) is built and
    ///    `render` is invoked, then extracted `Set-Cookie` values are
    ///    appended.
    /// 3. Otherwise a bare 404 with status text "Not found".
    ///
    /// Render errors propagate via `Err`; the platform's top-level handler
    /// owns them.
    #[instrument(skip_all, fields(method = %request.method(), path = %request.uri().path()))]
    pub async fn handle(
        &self,
        request: Request<Body>,
        env: &EnvBindings,
        context: &ExecutionContext,
    ) -> Result<Response<Body>, AdapterError> {
        let path = request.uri().path().to_owned();

        // Static assets fallback, in case the platform's route exclusion
        // list did not already intercept the request.
        if self.manifest.contains_asset(&path) {
            return self.serve_asset(request, env, &path).await;
        }

        let options = MatchOptions {
            match_not_found: true,
        };
        if let Some(route) = self.app.match_route(&request, options) {
            let ctx = RequestContext::for_request(&request, env, context, &self.config);
            let mut response = self.app.render(request, &route, &ctx).await?;
            self.append_set_cookie_headers(&mut response);
            return Ok(response);
        }

        debug!("No asset or route matched");
        Ok(response::not_found())
    }

    /// Serve a known static asset through the platform facility.
    async fn serve_asset(
        &self,
        request: Request<Body>,
        env: &EnvBindings,
        path: &str,
    ) -> Result<Response<Body>, AdapterError> {
        let fetched = env.assets().fetch(request).await?;
        let status = fetched.status();

        if status == StatusCode::NOT_FOUND {
            // The facility's own 404 body and headers are platform
            // boilerplate, not application content.
            debug!(path, "Asset not found");
            return Ok(response::not_found());
        }
        if status != StatusCode::OK {
            debug!(path, status = status.as_u16(), "Asset fetch non-success");
            return Ok(response::bare(status, response::status_text(&fetched)));
        }

        let content_type =
            mime::from_path(path).unwrap_or(self.config.fallback_content_type.as_str());
        let header_value = HeaderValue::from_str(content_type).map_err(|e| {
            AdapterError::response_build(format!("invalid content type '{content_type}': {e}"))
        })?;

        // Body streams through untouched; only the Content-Type is rewritten.
        let (mut parts, body) = fetched.into_parts();
        parts.headers.insert(CONTENT_TYPE, header_value);
        Ok(Response::from_parts(parts, body))
    }

    /// Append cookie headers the runtime computed during rendering.
    ///
    /// Append, never overwrite: each value becomes its own `Set-Cookie`
    /// entry. A value that is not valid header material is skipped with a
    /// warning rather than failing an otherwise sound response.
    fn append_set_cookie_headers(&self, response: &mut Response<Body>) {
        let cookies = self.app.set_cookie_headers(response);
        for cookie in cookies {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().append(SET_COOKIE, value);
                }
                Err(_) => {
                    warn!("Dropping Set-Cookie value with invalid header characters");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::assets::AssetStore;

    /// App whose routes are a fixed path set; renders a marker body.
    struct PathSetApp {
        routes: Vec<String>,
        cookies: Vec<String>,
    }

    #[async_trait]
    impl SsrApp for PathSetApp {
        type Route = String;

        fn match_route(
            &self,
            request: &Request<Body>,
            _options: MatchOptions,
        ) -> Option<Self::Route> {
            let path = request.uri().path();
            self.routes.iter().find(|r| r.as_str() == path).cloned()
        }

        async fn render(
            &self,
            _request: Request<Body>,
            route: &Self::Route,
            _ctx: &RequestContext,
        ) -> Result<Response<Body>, AdapterError> {
            Ok(Response::new(Body::from(format!("rendered {route}"))))
        }

        fn set_cookie_headers(&self, _response: &Response<Body>) -> Vec<String> {
            self.cookies.clone()
        }
    }

    /// Asset store answering every fetch with a canned response.
    struct CannedStore {
        status: StatusCode,
        content_type: Option<&'static str>,
    }

    #[async_trait]
    impl AssetStore for CannedStore {
        async fn fetch(&self, _request: Request<Body>) -> Result<Response<Body>, AdapterError> {
            let mut builder = Response::builder().status(self.status);
            if let Some(ct) = self.content_type {
                builder = builder.header(CONTENT_TYPE, ct);
            }
            Ok(builder.body(Body::from("asset bytes")).unwrap())
        }
    }

    fn adapter(
        routes: &[&str],
        cookies: &[&str],
        assets: &[&str],
    ) -> (EdgeAdapter<PathSetApp>, ExecutionContext) {
        let app = PathSetApp {
            routes: routes.iter().map(ToString::to_string).collect(),
            cookies: cookies.iter().map(ToString::to_string).collect(),
        };
        let mut manifest = Manifest::new();
        for asset in assets {
            manifest = manifest.with_asset(*asset);
        }
        (
            EdgeAdapter::new(Arc::new(app), manifest),
            ExecutionContext::new(),
        )
    }

    fn env_with(store: CannedStore) -> EnvBindings {
        EnvBindings::new("test-site", Arc::new(store))
    }

    fn get(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_asset_200_forces_content_type() {
        let (adapter, ctx) = adapter(&[], &[], &["/logo.svg"]);
        let env = env_with(CannedStore {
            status: StatusCode::OK,
            content_type: Some("application/octet-stream"),
        });

        let response = adapter.handle(get("/logo.svg"), &env, &ctx).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
    }

    #[tokio::test]
    async fn test_asset_unknown_extension_falls_back_to_text_plain() {
        let (adapter, ctx) = adapter(&[], &[], &["/data.bin"]);
        let env = env_with(CannedStore {
            status: StatusCode::OK,
            content_type: None,
        });

        let response = adapter.handle(get("/data.bin"), &env, &ctx).await.unwrap();

        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
    }

    #[tokio::test]
    async fn test_render_appends_cookies_without_overwriting() {
        let (adapter, ctx) = adapter(&["/login"], &["a=1; Path=/", "b=2; Path=/"], &[]);
        let env = env_with(CannedStore {
            status: StatusCode::OK,
            content_type: None,
        });

        let response = adapter.handle(get("/login"), &env, &ctx).await.unwrap();

        let cookies: Vec<_> = response.headers().get_all(SET_COOKIE).iter().collect();
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies[0], "a=1; Path=/");
        assert_eq!(cookies[1], "b=2; Path=/");
    }

    #[tokio::test]
    async fn test_invalid_cookie_value_is_skipped() {
        let (adapter, ctx) = adapter(&["/login"], &["good=1", "bad\r\nvalue"], &[]);
        let env = env_with(CannedStore {
            status: StatusCode::OK,
            content_type: None,
        });

        let response = adapter.handle(get("/login"), &env, &ctx).await.unwrap();

        let cookies: Vec<_> = response.headers().get_all(SET_COOKIE).iter().collect();
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0], "good=1");
    }

    #[tokio::test]
    async fn test_no_asset_no_route_is_bare_not_found() {
        let (adapter, ctx) = adapter(&[], &[], &[]);
        let env = env_with(CannedStore {
            status: StatusCode::OK,
            content_type: None,
        });

        let response = adapter.handle(get("/missing"), &env, &ctx).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response::status_text(&response), "Not found");
    }
}
