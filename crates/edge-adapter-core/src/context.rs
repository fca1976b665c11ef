//! Per-request context handed to the render pipeline.
//!
//! The application runtime historically retrieved the client address and the
//! runtime descriptor through out-of-band channels on the request object;
//! here both travel in an explicit [`RequestContext`] parameter of the render
//! call, built fresh for every matched route.

use axum::body::Body;
use axum::http::Request;
use serde_json::{Map, Value};

use edge_adapter_common::AdapterConfig;

use crate::bindings::EnvBindings;

/// Opaque platform execution context, passed through unmodified.
///
/// The platform hands this over as an open-ended object; its members are
/// spread into the runtime descriptor without interpretation.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    fields: Map<String, Value>,
}

impl ExecutionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON object.
    ///
    /// Non-object values yield an empty context; the platform contract only
    /// ever supplies objects.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Add a field (builder style).
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Iterate over the context's members.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Returns `true` if the context carries no members.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Runtime descriptor exposed to application code.
///
/// Shape is an interop constant: `{env, name, ...context}`, with the
/// execution context spread last so its members win on collision. Application
/// code branches on `name` to detect the deployment target.
#[derive(Debug, Clone)]
pub struct RuntimeDescriptor {
    env: Value,
    name: String,
    extra: Map<String, Value>,
}

impl RuntimeDescriptor {
    /// Build the descriptor for one invocation.
    pub fn new(env: &EnvBindings, platform_name: &str, context: &ExecutionContext) -> Self {
        Self {
            env: env.to_json(),
            name: platform_name.to_string(),
            extra: context.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    /// Platform identity tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// JSON projection of the environment bindings.
    pub fn env(&self) -> &Value {
        &self.env
    }

    /// Member carried over from the execution context.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Full descriptor as one JSON object: `{env, name, ...context}`.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("env".to_string(), self.env.clone());
        object.insert("name".to_string(), Value::String(self.name.clone()));
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

/// Request-scoped metadata the render pipeline reads.
#[derive(Debug, Clone)]
pub struct RequestContext {
    client_address: Option<String>,
    runtime: RuntimeDescriptor,
}

impl RequestContext {
    /// Build the context for a matched route.
    ///
    /// The client address comes from the platform's forwarded-IP header
    /// (absent when the platform did not set it, e.g. in local preview).
    pub fn for_request(
        request: &Request<Body>,
        env: &EnvBindings,
        context: &ExecutionContext,
        config: &AdapterConfig,
    ) -> Self {
        let client_address = request
            .headers()
            .get(config.forwarded_ip_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        Self {
            client_address,
            runtime: RuntimeDescriptor::new(env, &config.platform_name, context),
        }
    }

    /// Client network address as reported by the edge.
    pub fn client_address(&self) -> Option<&str> {
        self.client_address.as_deref()
    }

    /// The runtime descriptor.
    pub fn runtime(&self) -> &RuntimeDescriptor {
        &self.runtime
    }
}
