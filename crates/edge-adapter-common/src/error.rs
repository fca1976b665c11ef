//! Error types for the edge-adapter.
//!
//! This module defines a hierarchy of error types using `thiserror`:
//! - [`AdapterError`]: Failures on the request-handling path
//! - [`ConfigFileError`]: Failures loading the preview-server configuration
//!
//! HTTP-shaped outcomes (a bare 404, a verbatim asset status) are responses,
//! not errors; only genuine failures of the collaborators surface here.

use std::io;

use thiserror::Error;

/// Failures on the adapter's request-handling path.
///
/// These errors represent faults in the adapter's collaborators. Status-code
/// branches (asset 404, asset non-200) are handled inline and never become
/// an `AdapterError`.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The asset facility failed to produce a response at all.
    #[error("Asset fetch failed for '{path}': {reason}")]
    AssetFetch {
        /// Request path that was being fetched.
        path: String,
        /// Description of the failure.
        reason: String,
    },

    /// The application runtime's render operation failed.
    ///
    /// Propagated unmodified to the platform's own top-level handler; the
    /// adapter does not translate render faults into responses.
    #[error("Render failed: {0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A response could not be assembled from otherwise valid parts.
    #[error("Response construction failed: {reason}")]
    ResponseBuild {
        /// Description of the construction failure.
        reason: String,
    },

    /// Invalid configuration was provided.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl AdapterError {
    /// Create a new `AssetFetch` error.
    pub fn asset_fetch(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AssetFetch {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new `Render` error from any error type.
    pub fn render(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Render(Box::new(source))
    }

    /// Create a new `ResponseBuild` error.
    pub fn response_build(reason: impl Into<String>) -> Self {
        Self::ResponseBuild {
            reason: reason.into(),
        }
    }

    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error originated in the asset facility.
    pub fn is_asset_fetch(&self) -> bool {
        matches!(self, Self::AssetFetch { .. })
    }

    /// Returns `true` if this error originated in the render pipeline.
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }
}

/// Errors loading the preview-server configuration file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    /// The configuration file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        /// Path to the file that failed to load.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file could not be parsed as TOML.
    #[error("Failed to parse config file: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdapterError::asset_fetch("/logo.svg", "connection reset");
        assert_eq!(
            err.to_string(),
            "Asset fetch failed for '/logo.svg': connection reset"
        );

        let err = AdapterError::invalid_config("missing deployment name");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: missing deployment name"
        );
    }

    #[test]
    fn test_render_error_wraps_source() {
        let source = io::Error::new(io::ErrorKind::Other, "template exploded");
        let err = AdapterError::render(source);

        assert!(err.is_render());
        assert!(err.to_string().contains("Render failed"));
    }

    #[test]
    fn test_is_asset_fetch() {
        assert!(AdapterError::asset_fetch("/a.css", "oops").is_asset_fetch());
        assert!(!AdapterError::invalid_config("x").is_asset_fetch());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: AdapterError = io_err.into();
        assert!(matches!(err, AdapterError::Io(_)));
    }
}
