//! Per-deployment environment bindings.
//!
//! The platform supplies these with every invocation: a deployment name, a
//! read-only variable map, and the asset-fetch capability. They are threaded
//! through [`crate::RequestContext`] into the render call — never published
//! into process-wide state, so bindings that differ per request stay isolated
//! per request.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::assets::AssetStore;

/// Environment bindings for one invocation.
#[derive(Clone)]
pub struct EnvBindings {
    /// Deployment name.
    name: String,

    /// Read-only environment variables.
    vars: HashMap<String, String>,

    /// Asset-fetch capability.
    assets: Arc<dyn AssetStore>,
}

impl EnvBindings {
    /// Create bindings for a named deployment with an asset capability.
    pub fn new(name: impl Into<String>, assets: Arc<dyn AssetStore>) -> Self {
        Self {
            name: name.into(),
            vars: HashMap::new(),
            assets,
        }
    }

    /// Add an environment variable (builder style).
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Replace the variable map wholesale.
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars = vars;
        self
    }

    /// Deployment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an environment variable.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// The asset-fetch capability.
    pub fn assets(&self) -> &dyn AssetStore {
        self.assets.as_ref()
    }

    /// JSON projection of the bindings for the runtime descriptor.
    ///
    /// Produces an object with the deployment `name` and every variable as a
    /// top-level member. The asset capability is a live handle and has no
    /// JSON representation.
    pub fn to_json(&self) -> Value {
        let mut env = Map::new();
        env.insert("name".to_string(), Value::String(self.name.clone()));
        for (key, value) in &self.vars {
            env.insert(key.clone(), Value::String(value.clone()));
        }
        Value::Object(env)
    }
}

impl std::fmt::Debug for EnvBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvBindings")
            .field("name", &self.name)
            .field("vars", &self.vars.len())
            .finish_non_exhaustive()
    }
}
