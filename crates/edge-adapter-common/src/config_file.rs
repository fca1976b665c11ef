//! Configuration file structures for the preview server.
//!
//! This module defines structures for TOML configuration files:
//! - [`ConfigFile`]: Top-level configuration file structure
//! - [`ServerConfigFile`]: HTTP server settings
//! - [`DeploymentConfig`]: Deployment identity, environment variables, and
//!   on-disk locations of the manifest and asset directory

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::AdapterConfig;
use crate::error::ConfigFileError;

/// Top-level configuration file structure.
///
/// This structure represents a complete TOML configuration file
/// that can be loaded at startup.
///
/// # Example
///
/// ```toml
/// [adapter]
/// platform_name = "cloudflare"
///
/// [server]
/// bind_addr = "0.0.0.0:8788"
/// request_timeout_secs = 30
///
/// [deployment]
/// name = "my-site"
/// manifest_path = "./dist/manifest.json"
/// asset_dir = "./dist"
///
/// [deployment.vars]
/// API_BASE = "https://api.example.com"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Adapter configuration (platform constants).
    #[serde(default)]
    pub adapter: AdapterConfig,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfigFile,

    /// Deployment configuration.
    #[serde(default)]
    pub deployment: DeploymentConfig,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigFileError::Io {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed as TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content).map_err(|e| ConfigFileError::Parse {
            message: e.to_string(),
        })
    }
}

/// HTTP server configuration from config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfigFile {
    /// Bind address (e.g., "0.0.0.0:8788").
    #[serde(default = "defaults::bind_addr")]
    pub bind_addr: String,

    /// Request timeout in seconds.
    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfigFile {
    fn default() -> Self {
        Self {
            bind_addr: defaults::bind_addr(),
            request_timeout_secs: defaults::request_timeout_secs(),
        }
    }
}

/// Deployment identity and on-disk layout.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeploymentConfig {
    /// Deployment name, surfaced to the application via the environment
    /// bindings.
    #[serde(default)]
    pub name: String,

    /// Environment variables exposed to the application.
    #[serde(default)]
    pub vars: HashMap<String, String>,

    /// Path to the build manifest (JSON) listing known static assets.
    #[serde(default)]
    pub manifest_path: Option<String>,

    /// Directory the preview asset store serves files from.
    #[serde(default)]
    pub asset_dir: Option<String>,
}

/// Default value functions for serde.
mod defaults {
    pub fn bind_addr() -> String {
        "0.0.0.0:8788".to_string()
    }

    pub const fn request_timeout_secs() -> u64 {
        30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = ConfigFile::from_toml("").unwrap();

        assert_eq!(config.server.bind_addr, "0.0.0.0:8788");
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.adapter.platform_name, "cloudflare");
        assert!(config.deployment.vars.is_empty());
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            [adapter]
            platform_name = "cloudflare-pages"

            [server]
            bind_addr = "127.0.0.1:9000"
            request_timeout_secs = 10

            [deployment]
            name = "my-site"
            manifest_path = "./dist/manifest.json"
            asset_dir = "./dist"

            [deployment.vars]
            API_BASE = "https://api.example.com"
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(config.adapter.platform_name, "cloudflare-pages");
        assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.server.request_timeout_secs, 10);
        assert_eq!(config.deployment.name, "my-site");
        assert_eq!(
            config.deployment.vars.get("API_BASE").map(String::as_str),
            Some("https://api.example.com")
        );
        assert_eq!(
            config.deployment.asset_dir.as_deref(),
            Some("./dist")
        );
    }

    #[test]
    fn test_invalid_toml() {
        let result = ConfigFile::from_toml("[server\nbind_addr = 42");
        assert!(matches!(result, Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigFile::from_file("/nonexistent/edge-adapter.toml");
        assert!(matches!(result, Err(ConfigFileError::Io { .. })));
    }
}
