//! Shared application state.
//!
//! This module provides [`AppState`], which holds the deployment-scoped
//! values shared across all preview requests: the adapter, the environment
//! bindings, and the execution context the platform would supply.

use std::sync::Arc;

use edge_adapter_core::{EdgeAdapter, EnvBindings, ExecutionContext, SsrApp};

/// Shared state across all request handlers.
///
/// Cloned per request; everything inside is `Arc`-shared and immutable. In
/// production the bindings and context arrive with each invocation — the
/// preview serves one deployment, so one fixed set stands in for all of them.
pub struct AppState<A> {
    /// The request adapter for the deployment.
    adapter: Arc<EdgeAdapter<A>>,

    /// Environment bindings handed to every invocation.
    env: Arc<EnvBindings>,

    /// Execution context handed to every invocation.
    context: ExecutionContext,
}

impl<A: SsrApp> AppState<A> {
    /// Create state with an empty execution context.
    pub fn new(adapter: Arc<EdgeAdapter<A>>, env: Arc<EnvBindings>) -> Self {
        Self {
            adapter,
            env,
            context: ExecutionContext::new(),
        }
    }

    /// Replace the execution context (builder style).
    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }

    /// The request adapter.
    pub fn adapter(&self) -> &EdgeAdapter<A> {
        &self.adapter
    }

    /// The environment bindings.
    pub fn env(&self) -> &EnvBindings {
        &self.env
    }

    /// The execution context.
    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
            env: Arc::clone(&self.env),
            context: self.context.clone(),
        }
    }
}

impl<A> std::fmt::Debug for AppState<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("deployment", &self.env.name())
            .finish_non_exhaustive()
    }
}
