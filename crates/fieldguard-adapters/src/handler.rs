//! Downstream handler seam
//!
//! Adapters sit between the transport and the operation's actual handler,
//! interceptor-style. The handler is whatever produces the operation's
//! business result (a query, a persistence call); it is invoked at most once
//! per request, and not at all when a write is rejected up front.

use async_trait::async_trait;
use fieldguard_core::Result;
use futures::future::BoxFuture;
use serde_json::Value;

/// The operation handler an adapter wraps
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// Produce the operation's raw result
    async fn handle(&self) -> Result<Value>;
}

/// Handler returning a fixed, precomputed value
#[derive(Debug, Clone)]
pub struct ValueHandler {
    value: Value,
}

impl ValueHandler {
    /// Wrap a precomputed result
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

#[async_trait]
impl ResourceHandler for ValueHandler {
    async fn handle(&self) -> Result<Value> {
        Ok(self.value.clone())
    }
}

/// Handler backed by a closure producing a boxed future
pub struct FnHandler<F>
where
    F: Fn() -> BoxFuture<'static, Result<Value>> + Send + Sync,
{
    func: F,
}

impl<F> FnHandler<F>
where
    F: Fn() -> BoxFuture<'static, Result<Value>> + Send + Sync,
{
    /// Wrap a future-producing closure
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F> ResourceHandler for FnHandler<F>
where
    F: Fn() -> BoxFuture<'static, Result<Value>> + Send + Sync,
{
    async fn handle(&self) -> Result<Value> {
        (self.func)().await
    }
}
