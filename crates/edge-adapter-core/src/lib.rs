//! Core request adapter for edge-adapter.
//!
//! This crate translates an edge platform's native entry point — one call of
//! `(request, environment bindings, execution context)` per incoming request —
//! into the `match`/`render` contract of a server-side rendering runtime:
//! - [`EdgeAdapter`]: The entry point; one invocation, one response
//! - [`SsrApp`]: Seam for the external application runtime
//! - [`AssetStore`]: Seam for the platform's asset-fetch facility
//! - [`Manifest`]: Known static-asset paths produced by the build step
//! - [`RequestContext`]: Per-request metadata handed to the render pipeline
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     EdgeAdapter                         │
//! │  (One invocation per request, no shared mutable state)  │
//! └─────────────────────────────────────────────────────────┘
//!        │ path in manifest                │ otherwise
//!        ▼                                 ▼
//! ┌──────────────────────┐   ┌─────────────────────────────┐
//! │      AssetStore      │   │           SsrApp            │
//! │  fetch, then force   │   │  match_route, then render    │
//! │  Content-Type        │   │  with RequestContext        │
//! └──────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! Environment bindings and execution context travel inside
//! [`RequestContext`]; nothing is published into process-wide state, so
//! concurrent invocations within one process never observe each other.

pub mod adapter;
pub mod app;
pub mod assets;
pub mod bindings;
pub mod context;
pub mod manifest;
pub mod mime;
pub mod response;

pub use adapter::EdgeAdapter;
pub use app::{MatchOptions, SsrApp};
pub use assets::AssetStore;
pub use bindings::EnvBindings;
pub use context::{ExecutionContext, RequestContext, RuntimeDescriptor};
pub use manifest::Manifest;
pub use response::StatusText;
