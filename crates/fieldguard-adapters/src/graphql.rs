//! GraphQL entry adapter
//!
//! Queries get read-side filtering of the resolved result; mutations get
//! write-side validation of the `data` argument before the resolver runs.
//! Nesting is detected by comparing the invoking resolver's logical resource
//! (from path metadata) against the target resource of the grant.

use crate::context::{GraphqlOperation, RequestContext, TransportMeta};
use crate::handler::ResourceHandler;
use fieldguard_core::{FieldguardError, Result};
use fieldguard_policy::{authorize_write, filter_result, GrantRegistry};
use serde_json::Value;
use tracing::debug;

/// Intercept a GraphQL operation
pub async fn intercept(
    registry: &GrantRegistry,
    ctx: &RequestContext,
    handler: &dyn ResourceHandler,
) -> Result<Value> {
    if ctx.grant.is_public {
        debug!(request_id = %ctx.request_id, "public resolver, bypassing permissions");
        return handler.handle().await;
    }

    let TransportMeta::Graphql { operation, .. } = &ctx.transport else {
        return Err(FieldguardError::invalid(
            "graphql adapter invoked with a non-graphql context",
        ));
    };

    let permission = registry.resolve(
        &ctx.roles,
        ctx.grant.action,
        ctx.grant.possession,
        &ctx.grant.resource,
    )?;

    match operation {
        GraphqlOperation::Query => {
            let result = handler.handle().await?;
            debug!(request_id = %ctx.request_id, "filtering query result");
            Ok(filter_result(&permission, &result))
        }
        GraphqlOperation::Mutation => {
            // Mutations carry their payload under the `data` argument.
            let data = ctx.payload.get("data").cloned().unwrap_or(Value::Null);
            let relation = ctx.transport.relation_segment(&ctx.grant.resource);
            authorize_write(&permission, relation.as_deref(), &data)?;
            handler.handle().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::OperationGrant;
    use crate::handler::ValueHandler;
    use assert_matches::assert_matches;
    use fieldguard_core::{Action, Possession, ResourceName, Role};
    use serde_json::json;

    fn registry() -> GrantRegistry {
        let mut registry = GrantRegistry::new();
        registry
            .allow("customer", "Order", Action::Read, Possession::Any, &["id", "totalPrice"])
            .allow("customer", "Order", Action::Update, Possession::Any, &["totalPrice"])
            .allow("customer", "Order", Action::Delete, Possession::Any, &["id"])
            .allow("customer", "Product", Action::Update, Possession::Any, &["name"]);
        registry
    }

    fn ctx(
        operation: GraphqlOperation,
        caller: &str,
        grant: OperationGrant,
        payload: Value,
    ) -> RequestContext {
        RequestContext::new(
            TransportMeta::Graphql {
                operation,
                caller: ResourceName::new(caller),
            },
            vec![Role::new("customer")],
            grant,
            payload,
        )
    }

    fn order_grant(action: Action) -> OperationGrant {
        OperationGrant {
            resource: ResourceName::new("Order"),
            action,
            possession: Possession::Any,
            is_public: false,
        }
    }

    #[tokio::test]
    async fn test_query_result_is_filtered() {
        let handler = ValueHandler::new(json!([
            {"id": 1, "discount": 5},
            {"id": 2, "totalPrice": 10}
        ]));
        let ctx = ctx(
            GraphqlOperation::Query,
            "Order",
            order_grant(Action::Read),
            Value::Null,
        );
        let result = intercept(&registry(), &ctx, &handler).await.unwrap();
        assert_eq!(result, json!([{"id": 1}, {"id": 2, "totalPrice": 10}]));
    }

    #[tokio::test]
    async fn test_mutation_validates_data_argument() {
        let handler = ValueHandler::new(json!({"id": 1}));
        let ctx = ctx(
            GraphqlOperation::Mutation,
            "Order",
            order_grant(Action::Update),
            json!({"data": {"discount": 10}}),
        );
        let err = intercept(&registry(), &ctx, &handler).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "providing the properties: \"discount\" on Order update is forbidden for roles: \"customer\""
        );
    }

    #[tokio::test]
    async fn test_mutation_from_other_resolver_is_relation_denial() {
        // Product resolver mutating Order: relation context.
        let handler = ValueHandler::new(json!({"id": 1}));
        let ctx = ctx(
            GraphqlOperation::Mutation,
            "Product",
            order_grant(Action::Update),
            json!({"data": {"discount": 10}}),
        );
        let err = intercept(&registry(), &ctx, &handler).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Updating the relationship: order of Order is forbidden for roles: \"customer\""
        );
    }

    #[tokio::test]
    async fn test_delete_mutation_passes_result_through() {
        let handler = ValueHandler::new(json!({"id": 1, "discount": 5}));
        let ctx = ctx(
            GraphqlOperation::Mutation,
            "Order",
            order_grant(Action::Delete),
            json!({"data": {"discount": 5}}),
        );
        let result = intercept(&registry(), &ctx, &handler).await.unwrap();
        assert_eq!(result, json!({"id": 1, "discount": 5}));
    }

    #[tokio::test]
    async fn test_public_resolver_skips_resolution_entirely() {
        // No grant exists for this resource; a non-public request would be a
        // configuration error, but public routes never resolve at all.
        let handler = ValueHandler::new(json!({"anything": true}));
        let mut grant = OperationGrant {
            resource: ResourceName::new("Unknown"),
            action: Action::Read,
            possession: Possession::Any,
            is_public: true,
        };
        let ctx = ctx(GraphqlOperation::Query, "Unknown", grant.clone(), Value::Null);
        let result = intercept(&registry(), &ctx, &handler).await.unwrap();
        assert_eq!(result, json!({"anything": true}));

        grant.is_public = false;
        let ctx = self::ctx(GraphqlOperation::Query, "Unknown", grant, Value::Null);
        let err = intercept(&registry(), &ctx, &handler).await.unwrap_err();
        assert_matches!(err, FieldguardError::Configuration { .. });
    }
}
