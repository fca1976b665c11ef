//! Edge Adapter CLI entry point.
//!
//! Runs the local preview server: one deployment, served through the request
//! adapter exactly as the platform would invoke it.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, header};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edge_adapter_common::{AdapterError, ConfigFile};
use edge_adapter_core::{EdgeAdapter, EnvBindings, Manifest, MatchOptions, RequestContext, SsrApp};
use edge_adapter_server::{AppState, DirAssetStore, PreviewServer, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "edge-adapter",
    about = "Local preview server for an edge deployment"
)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "EDGE_ADAPTER_CONFIG")]
    config: Option<String>,

    /// Bind address override (host:port).
    #[arg(short, long, env = "BIND_ADDR")]
    bind: Option<String>,
}

/// Smoke-test application: one route at `/`, echoing what the render
/// pipeline receives through the request context.
struct DemoApp;

#[async_trait]
impl SsrApp for DemoApp {
    type Route = ();

    fn match_route(&self, request: &Request<Body>, _options: MatchOptions) -> Option<()> {
        (request.uri().path() == "/").then_some(())
    }

    async fn render(
        &self,
        _request: Request<Body>,
        _route: &(),
        ctx: &RequestContext,
    ) -> Result<Response<Body>, AdapterError> {
        let body = format!(
            "<h1>edge-adapter preview</h1>\n<p>client: {}</p>\n<pre>{}</pre>\n",
            ctx.client_address().unwrap_or("unknown"),
            ctx.runtime().to_value()
        );
        Response::builder()
            .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(body))
            .map_err(|e| AdapterError::response_build(e.to_string()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,edge_adapter=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Edge Adapter preview");

    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => ConfigFile::from_file(path)
            .with_context(|| format!("Failed to load config from '{path}'"))?,
        None => ConfigFile::default(),
    };

    let bind_addr: SocketAddr = args
        .bind
        .as_deref()
        .unwrap_or(config.server.bind_addr.as_str())
        .parse()
        .context("Invalid bind address. Expected format: 'host:port' (e.g., '0.0.0.0:8788')")?;

    let manifest = match &config.deployment.manifest_path {
        Some(path) => Manifest::from_file(path)
            .with_context(|| format!("Failed to load manifest from '{path}'"))?,
        None => Manifest::new(),
    };

    let asset_dir = config
        .deployment
        .asset_dir
        .clone()
        .unwrap_or_else(|| ".".to_string());
    let deployment_name = if config.deployment.name.is_empty() {
        "preview".to_string()
    } else {
        config.deployment.name.clone()
    };

    let env = EnvBindings::new(deployment_name, Arc::new(DirAssetStore::new(asset_dir)))
        .with_vars(config.deployment.vars.clone());
    let adapter = EdgeAdapter::with_config(Arc::new(DemoApp), manifest, config.adapter.clone());

    let server_config = ServerConfig::default()
        .with_bind_addr(bind_addr)
        .with_timeout(config.server.request_timeout_secs);

    info!(
        bind_addr = %bind_addr,
        deployment = env.name(),
        assets = adapter.manifest().len(),
        "Configuration loaded"
    );

    let state = AppState::new(Arc::new(adapter), Arc::new(env));
    let server = PreviewServer::new(state, server_config);

    info!("Server initialized. Available endpoints:");
    info!("  GET  /health   - Health check");
    info!("  ANY  /*        - Adapter (assets, application routes, 404)");

    server.run().await?;

    Ok(())
}
