//! Configuration structures for the edge-adapter.
//!
//! This module defines [`AdapterConfig`], the knobs of the request adapter
//! itself. The defaults are interop constants: the application runtime reads
//! the platform tag and the forwarded-IP header under exactly these names, so
//! overriding them only makes sense when targeting a different platform edition.

use serde::{Deserialize, Serialize};

/// Adapter configuration.
///
/// Can be embedded in the preview-server config file or constructed directly.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdapterConfig {
    /// Platform identity tag placed into the runtime descriptor.
    ///
    /// Application code branches on this value to detect the deployment
    /// target.
    #[serde(default = "defaults::platform_name")]
    pub platform_name: String,

    /// Header carrying the client's network address at the edge.
    #[serde(default = "defaults::forwarded_ip_header")]
    pub forwarded_ip_header: String,

    /// Content type used when a static asset's extension is unrecognized.
    #[serde(default = "defaults::fallback_content_type")]
    pub fallback_content_type: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            platform_name: defaults::platform_name(),
            forwarded_ip_header: defaults::forwarded_ip_header(),
            fallback_content_type: defaults::fallback_content_type(),
        }
    }
}

/// Default value functions for serde.
mod defaults {
    pub fn platform_name() -> String {
        "cloudflare".to_string()
    }

    pub fn forwarded_ip_header() -> String {
        "cf-connecting-ip".to_string()
    }

    pub fn fallback_content_type() -> String {
        "text/plain".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdapterConfig::default();

        assert_eq!(config.platform_name, "cloudflare");
        assert_eq!(config.forwarded_ip_header, "cf-connecting-ip");
        assert_eq!(config.fallback_content_type, "text/plain");
    }

    #[test]
    fn test_config_serialization() {
        let config = AdapterConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AdapterConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.platform_name, deserialized.platform_name);
        assert_eq!(config.forwarded_ip_header, deserialized.forwarded_ip_header);
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"platform_name": "cloudflare-pages"}"#;
        let config: AdapterConfig = serde_json::from_str(json).unwrap();

        // Explicitly set value
        assert_eq!(config.platform_name, "cloudflare-pages");
        // Default values for unspecified fields
        assert_eq!(config.forwarded_ip_header, "cf-connecting-ip");
        assert_eq!(config.fallback_content_type, "text/plain");
    }
}
