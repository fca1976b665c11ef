//! Local preview HTTP server for edge-adapter.
//!
//! This crate runs a deployment outside the real platform: every incoming
//! request is fed through the [`EdgeAdapter`](edge_adapter_core::EdgeAdapter)
//! exactly as the platform would, with a filesystem-backed
//! [`DirAssetStore`] standing in for the platform asset facility. It handles:
//!
//! - HTTP serving and graceful shutdown
//! - Request/response plumbing into the adapter
//! - Request-id and latency logging
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use edge_adapter_core::{EdgeAdapter, EnvBindings, Manifest};
//! use edge_adapter_server::{AppState, DirAssetStore, PreviewServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let assets = Arc::new(DirAssetStore::new("./dist"));
//!     let env = EnvBindings::new("my-site", assets);
//!     let manifest = Manifest::from_file("./dist/manifest.json")?;
//!     let adapter = Arc::new(EdgeAdapter::new(Arc::new(my_app()), manifest));
//!
//!     let state = AppState::new(adapter, Arc::new(env));
//!     PreviewServer::new(state, ServerConfig::default()).run().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod store;

pub use server::{PreviewServer, ServerConfig};
pub use state::AppState;
pub use store::DirAssetStore;
