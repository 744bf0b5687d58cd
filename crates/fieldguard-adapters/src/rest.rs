//! Typed-body REST entry adapter
//!
//! The only adapter with a parsed request body: writes are validated against
//! the body before the handler runs, so a rejected mutation never reaches
//! persistence. Reads filter the handler result. Nesting is detected from a
//! `/:id/` segment in the declared route path.

use crate::context::{RequestContext, TransportMeta};
use crate::handler::ResourceHandler;
use fieldguard_core::{Action, FieldguardError, Result};
use fieldguard_policy::{authorize_write, filter_result, GrantRegistry};
use serde_json::Value;
use tracing::debug;

/// Intercept a REST request
pub async fn intercept(
    registry: &GrantRegistry,
    ctx: &RequestContext,
    handler: &dyn ResourceHandler,
) -> Result<Value> {
    if ctx.grant.is_public {
        debug!(request_id = %ctx.request_id, "public route, bypassing permissions");
        return handler.handle().await;
    }

    let TransportMeta::Rest { .. } = &ctx.transport else {
        return Err(FieldguardError::invalid(
            "rest adapter invoked with a non-rest context",
        ));
    };

    let permission = registry.resolve(
        &ctx.roles,
        ctx.grant.action,
        ctx.grant.possession,
        &ctx.grant.resource,
    )?;

    if ctx.grant.action == Action::Read {
        let result = handler.handle().await?;
        debug!(request_id = %ctx.request_id, "filtering read result");
        return Ok(filter_result(&permission, &result));
    }

    // Write-side: judge the request body before the handler persists anything.
    let relation = ctx.transport.relation_segment(&ctx.grant.resource);
    authorize_write(&permission, relation.as_deref(), &ctx.payload)?;
    handler.handle().await
}
