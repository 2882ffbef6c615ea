// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ClientError;
use crate::traits::CallerClient;

/// Signature of an in-process caller function.
pub type CallerFn =
    dyn Fn(Vec<Value>, Map<String, Value>) -> Result<Value, ClientError> + Send + Sync;

/// Registry of in-process functions addressable as `"module.function"`.
///
/// The caller backend calls functions directly by name with flat positional
/// and keyword arguments; this registry is where the embedder wires those
/// names to implementations.
///
/// # Example
/// ```
/// use event_reactor::backends::FunctionRegistry;
/// use serde_json::json;
///
/// let mut registry = FunctionRegistry::new();
/// registry.register("test.ping", |_args, _kwargs| Ok(json!(true)));
///
/// assert!(registry.contains("test.ping"));
/// ```
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<CallerFn>>,
}

impl FunctionRegistry {
    /// Create a new empty function registry
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function under a dotted name
    pub fn register<F>(&mut self, name: &str, function: F)
    where
        F: Fn(Vec<Value>, Map<String, Value>) -> Result<Value, ClientError>
            + Send
            + Sync
            + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    /// Check if a function is registered
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// List all registered function names
    pub fn list_registered_functions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        names
    }

    fn get(&self, name: &str) -> Option<Arc<CallerFn>> {
        self.functions.get(name).cloned()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("function_count", &self.functions.len())
            .field("functions", &self.list_registered_functions())
            .finish()
    }
}

/// Caller client executing registry functions in-process.
pub struct RegistryCaller {
    registry: Arc<FunctionRegistry>,
}

impl RegistryCaller {
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl CallerClient for RegistryCaller {
    async fn cmd(
        &self,
        fun: &str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let function = self
            .registry
            .get(fun)
            .ok_or_else(|| ClientError::UnknownFunction(fun.to_string()))?;
        function(args, kwargs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_cmd_runs_the_registered_function() {
        let mut registry = FunctionRegistry::new();
        registry.register("file.touch", |args, kwargs| {
            Ok(json!({"touched": args, "with": kwargs}))
        });
        let caller = RegistryCaller::new(Arc::new(registry));

        let mut kwargs = Map::new();
        kwargs.insert("mode".to_string(), json!("0644"));
        let result = caller
            .cmd("file.touch", vec![json!("/tmp/foo")], kwargs)
            .await
            .unwrap();

        assert_eq!(
            result,
            json!({"touched": ["/tmp/foo"], "with": {"mode": "0644"}})
        );
    }

    #[tokio::test]
    async fn test_cmd_unknown_function_fails() {
        let caller = RegistryCaller::new(Arc::new(FunctionRegistry::new()));

        let result = caller.cmd("no.such_fun", vec![], Map::new()).await;
        assert!(matches!(
            result,
            Err(ClientError::UnknownFunction(name)) if name == "no.such_fun"
        ));
    }

    #[tokio::test]
    async fn test_function_failure_is_surfaced() {
        let mut registry = FunctionRegistry::new();
        registry.register("always.fails", |_args, _kwargs| {
            Err(ClientError::Execution("boom".to_string()))
        });
        let caller = RegistryCaller::new(Arc::new(registry));

        let result = caller.cmd("always.fails", vec![], Map::new()).await;
        assert!(matches!(result, Err(ClientError::Execution(_))));
    }

    #[test]
    fn test_list_registered_functions_is_sorted() {
        let mut registry = FunctionRegistry::new();
        registry.register("test.ping", |_a, _k| Ok(Value::Null));
        registry.register("file.touch", |_a, _k| Ok(Value::Null));

        assert_eq!(
            registry.list_registered_functions(),
            ["file.touch", "test.ping"]
        );
    }
}
