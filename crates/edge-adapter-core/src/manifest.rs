//! Build manifest: the set of static-asset paths known at deploy time.
//!
//! The manifest is produced by the application's build step; the adapter only
//! consults its asset set to decide between the asset-fallback path and the
//! application routing path.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use edge_adapter_common::AdapterError;

/// Known static-asset paths for one deployment.
///
/// Paths are exact-match, as emitted by the build step (leading slash
/// included, e.g. `/assets/index.css`). No globbing or normalization happens
/// here; the adapter compares the raw request path against this set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// Exact request paths served as static assets.
    #[serde(default)]
    pub assets: HashSet<String>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset path (builder style).
    pub fn with_asset(mut self, path: impl Into<String>) -> Self {
        self.assets.insert(path.into());
        self
    }

    /// Returns `true` if the exact path is a known static asset.
    pub fn contains_asset(&self, path: &str) -> bool {
        self.assets.contains(path)
    }

    /// Number of known assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if no assets are known.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Parse a manifest from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid manifest document.
    pub fn from_json(content: &str) -> Result<Self, AdapterError> {
        serde_json::from_str(content)
            .map_err(|e| AdapterError::invalid_config(format!("invalid manifest: {e}")))
    }

    /// Load a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AdapterError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
