//! Common types, errors, and configuration for edge-adapter.
//!
//! This crate provides shared functionality used across the edge-adapter workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - Adapter configuration (platform constants, MIME fallback)
//! - Preview-server configuration file structures

pub mod config;
pub mod config_file;
pub mod error;

pub use config::AdapterConfig;
pub use config_file::{ConfigFile, DeploymentConfig, ServerConfigFile};
pub use error::{AdapterError, ConfigFileError};
