//! Lazy tool-id → [`ToolModule`] resolution with retry-on-failure semantics.

use std::{collections::HashMap, rc::Rc};

use futures::{
    future::{self, LocalBoxFuture},
    FutureExt,
};
use leptos::logging;
use thiserror::Error;

use crate::{ToolId, ToolModule};

/// Future returned by a registered tool loader.
pub type ToolLoadFuture = LocalBoxFuture<'static, Result<ToolModule, String>>;

type ToolLoader = Rc<dyn Fn() -> ToolLoadFuture>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How many times a failing loader is invoked before resolution gives up.
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Resolution failures surfaced to the window content boundary.
pub enum ToolResolveError {
    /// No loader is registered for the tool id.
    #[error("Tool `{tool_id}` was not found")]
    NotFound {
        /// Requested tool.
        tool_id: ToolId,
    },
    /// The loader kept failing until the retry budget ran out.
    #[error("Tool `{tool_id}` failed to load after {attempts} attempt(s): {reason}")]
    LoadFailed {
        /// Requested tool.
        tool_id: ToolId,
        /// Number of loader invocations made.
        attempts: u32,
        /// Last loader failure message.
        reason: String,
    },
}

#[derive(Clone, Default)]
/// Registry of lazily-resolved tool modules.
pub struct ComponentRegistry {
    loaders: HashMap<ToolId, ToolLoader>,
    policy: RetryPolicy,
}

impl ComponentRegistry {
    /// Creates an empty registry with the given retry policy.
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            loaders: HashMap::new(),
            policy,
        }
    }

    /// Registers an async loader for `tool_id`, replacing any previous one.
    pub fn register<F>(&mut self, tool_id: ToolId, loader: F)
    where
        F: Fn() -> ToolLoadFuture + 'static,
    {
        self.loaders.insert(tool_id, Rc::new(loader));
    }

    /// Registers a module that is available immediately.
    pub fn register_module(&mut self, tool_id: ToolId, module: ToolModule) {
        self.register(tool_id, move || future::ready(Ok(module)).boxed_local());
    }

    /// Whether a loader exists for `tool_id`.
    pub fn contains(&self, tool_id: &ToolId) -> bool {
        self.loaders.contains_key(tool_id)
    }

    /// Number of registered loaders.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Whether no loaders are registered.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Active retry policy.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Resolves `tool_id`, retrying a failing loader up to the policy's attempt budget.
    ///
    /// The returned future owns everything it needs, so it can outlive the borrow of `self`.
    pub fn resolve(
        &self,
        tool_id: &ToolId,
    ) -> LocalBoxFuture<'static, Result<ToolModule, ToolResolveError>> {
        let Some(loader) = self.loaders.get(tool_id).cloned() else {
            return future::ready(Err(ToolResolveError::NotFound {
                tool_id: tool_id.clone(),
            }))
            .boxed_local();
        };
        let tool_id = tool_id.clone();
        let max_attempts = self.policy.max_attempts.max(1);

        async move {
            let mut attempts = 0;
            loop {
                attempts += 1;
                match loader().await {
                    Ok(module) => return Ok(module),
                    Err(reason) if attempts >= max_attempts => {
                        logging::warn!("tool {tool_id} load failed permanently: {reason}");
                        return Err(ToolResolveError::LoadFailed {
                            tool_id,
                            attempts,
                            reason,
                        });
                    }
                    Err(reason) => {
                        logging::warn!(
                            "tool {tool_id} load attempt {attempts}/{max_attempts} failed: {reason}"
                        );
                    }
                }
            }
        }
        .boxed_local()
    }
}
