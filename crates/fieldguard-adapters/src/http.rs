//! Generic HTTP entry adapter
//!
//! This transport carries no separately-parsed body, so the CRUD action comes
//! from the request method and write-side validation runs over the handler's
//! return value. Nesting is detected from a `/:id/` segment in the declared
//! route path.

use crate::context::{RequestContext, TransportMeta};
use crate::handler::ResourceHandler;
use fieldguard_core::{Action, FieldguardError, Result};
use fieldguard_policy::{authorize_write, filter_result, GrantRegistry};
use serde_json::Value;
use tracing::debug;

/// Intercept a generic HTTP request
pub async fn intercept(
    registry: &GrantRegistry,
    ctx: &RequestContext,
    handler: &dyn ResourceHandler,
) -> Result<Value> {
    if ctx.grant.is_public {
        debug!(request_id = %ctx.request_id, "public route, bypassing permissions");
        return handler.handle().await;
    }

    let TransportMeta::Http { method, .. } = &ctx.transport else {
        return Err(FieldguardError::invalid(
            "http adapter invoked with a non-http context",
        ));
    };

    let action = method.action();
    let permission = registry.resolve(
        &ctx.roles,
        action,
        ctx.grant.possession,
        &ctx.grant.resource,
    )?;

    let result = handler.handle().await?;

    if action == Action::Read {
        debug!(request_id = %ctx.request_id, "filtering read result");
        return Ok(filter_result(&permission, &result));
    }

    let relation = ctx.transport.relation_segment(&ctx.grant.resource);
    authorize_write(&permission, relation.as_deref(), &result)?;
    Ok(result)
}
