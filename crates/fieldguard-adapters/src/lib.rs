//! # Fieldguard Adapters - Transport Entry Points
//!
//! One adapter per transport protocol, each responsible for recognizing
//! public endpoints, pulling the role/action/resource/possession tuple and
//! the payload out of its [`RequestContext`], invoking the policy engine,
//! and re-injecting the (possibly filtered) result into the response path.
//!
//! The decision logic itself lives in `fieldguard-policy` and is shared by
//! all three adapters; nothing here inspects field allowlists directly.

#![forbid(unsafe_code)]

pub mod context;
pub mod graphql;
pub mod handler;
pub mod http;
pub mod rest;

pub use context::{
    GraphqlOperation, HttpMethod, OperationGrant, RequestContext, TransportMeta,
};
pub use handler::{FnHandler, ResourceHandler, ValueHandler};

use fieldguard_core::Result;
use fieldguard_policy::GrantRegistry;
use serde_json::Value;

/// Intercept a request on whichever transport its context names
///
/// Dispatches to the matching adapter; the context's transport metadata is
/// the single source of truth, so a mismatched adapter can never be picked.
pub async fn intercept(
    registry: &GrantRegistry,
    ctx: &RequestContext,
    handler: &dyn ResourceHandler,
) -> Result<Value> {
    match &ctx.transport {
        TransportMeta::Graphql { .. } => graphql::intercept(registry, ctx, handler).await,
        TransportMeta::Http { .. } => http::intercept(registry, ctx, handler).await,
        TransportMeta::Rest { .. } => rest::intercept(registry, ctx, handler).await,
    }
}
