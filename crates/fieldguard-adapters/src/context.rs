//! Normalized request context handed to the entry adapters
//!
//! Transport frameworks are modeled at their data boundary only: each adapter
//! receives an explicit [`RequestContext`] built by the surrounding server
//! code instead of reaching into ambient framework state. The per-operation
//! authorization coordinates live in [`OperationGrant`], a static config
//! record registered alongside the route or resolver.

use fieldguard_core::{Action, Possession, ResourceName, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Per-operation authorization configuration
///
/// One of these is registered per route/resolver at startup. `is_public`
/// short-circuits the engine entirely: no permission is resolved and the
/// handler result passes through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationGrant {
    /// Target resource of the operation
    pub resource: ResourceName,
    /// CRUD action the operation performs
    pub action: Action,
    /// Possession scope to resolve the permission under
    pub possession: Possession,
    /// Unauthenticated endpoints bypass the engine entirely
    pub is_public: bool,
}

/// GraphQL top-level operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphqlOperation {
    /// Read-side resolver; results are filtered
    Query,
    /// Write-side resolver; arguments are validated
    Mutation,
}

/// HTTP request method, as far as the engine cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    /// Maps to read
    Get,
    /// Maps to create
    Post,
    /// Maps to update
    Put,
    /// Maps to update
    Patch,
    /// Maps to delete
    Delete,
}

impl HttpMethod {
    /// The CRUD action this method performs
    pub fn action(self) -> Action {
        match self {
            HttpMethod::Get => Action::Read,
            HttpMethod::Post => Action::Create,
            HttpMethod::Put | HttpMethod::Patch => Action::Update,
            HttpMethod::Delete => Action::Delete,
        }
    }
}

/// Transport-specific request identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMeta {
    /// GraphQL resolver invocation
    Graphql {
        /// Query or Mutation
        operation: GraphqlOperation,
        /// Logical resource of the invoking resolver, from path metadata;
        /// differs from the grant's resource on nested-relation invocations
        caller: ResourceName,
    },
    /// Generic HTTP route whose handler result carries the mutation data
    Http {
        /// Declared route path, e.g. `/order/:id/product`
        route_path: String,
        /// Request method; mapped to the CRUD action for this transport
        method: HttpMethod,
    },
    /// REST route with a typed request body
    Rest {
        /// Declared route path, e.g. `/order/:id`
        route_path: String,
    },
}

impl TransportMeta {
    /// Relation key for operations addressing a resource through another's
    /// relation; `None` for direct operations
    ///
    /// HTTP-shaped transports take the lower-cased route segment after
    /// `/:id/` (so `PATCH /order/:id/product` yields `product`); GraphQL
    /// uses the target resource's lower-cased name whenever the invoking
    /// resolver's resource differs from the target.
    pub fn relation_segment(&self, target: &ResourceName) -> Option<String> {
        match self {
            TransportMeta::Graphql { caller, .. } => {
                (caller != target).then(|| target.relation_key())
            }
            TransportMeta::Http { route_path, .. } | TransportMeta::Rest { route_path } => {
                route_path.split_once("/:id/").and_then(|(_, rest)| {
                    let segment = rest.split('/').next().unwrap_or("");
                    (!segment.is_empty()).then(|| segment.to_lowercase())
                })
            }
        }
    }
}

/// Everything the engine needs to know about one inbound request
///
/// Built fresh per request by the transport layer; read-only to the engine.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id carried through tracing output
    pub request_id: Uuid,
    /// Transport identity of the request
    pub transport: TransportMeta,
    /// Roles of the authenticated principal, in presentation order
    pub roles: Vec<Role>,
    /// Static authorization coordinates of the invoked operation
    pub grant: OperationGrant,
    /// Raw request payload: the parsed body for REST, the argument object
    /// for GraphQL mutations, null where the transport carries none
    pub payload: Value,
}

impl RequestContext {
    /// Build a context with a fresh request id
    pub fn new(transport: TransportMeta, roles: Vec<Role>, grant: OperationGrant, payload: Value) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            transport,
            roles,
            grant,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_to_action_mapping() {
        assert_eq!(HttpMethod::Get.action(), Action::Read);
        assert_eq!(HttpMethod::Post.action(), Action::Create);
        assert_eq!(HttpMethod::Put.action(), Action::Update);
        assert_eq!(HttpMethod::Patch.action(), Action::Update);
        assert_eq!(HttpMethod::Delete.action(), Action::Delete);
    }

    #[test]
    fn test_nested_route_yields_relation_segment() {
        let order = ResourceName::new("Order");
        let nested = TransportMeta::Rest {
            route_path: "/order/:id/product".to_string(),
        };
        let flat = TransportMeta::Rest {
            route_path: "/order/:id".to_string(),
        };
        assert_eq!(nested.relation_segment(&order).as_deref(), Some("product"));
        assert_eq!(flat.relation_segment(&order), None);
    }

    #[test]
    fn test_relation_segment_stops_at_next_slash() {
        let order = ResourceName::new("Order");
        let meta = TransportMeta::Http {
            route_path: "/order/:id/Product/extra".to_string(),
            method: HttpMethod::Put,
        };
        assert_eq!(meta.relation_segment(&order).as_deref(), Some("product"));
    }

    #[test]
    fn test_graphql_relation_compares_resources() {
        let target = ResourceName::new("Product");
        let from_order = TransportMeta::Graphql {
            operation: GraphqlOperation::Mutation,
            caller: ResourceName::new("Order"),
        };
        let direct = TransportMeta::Graphql {
            operation: GraphqlOperation::Mutation,
            caller: ResourceName::new("Product"),
        };
        assert_eq!(from_order.relation_segment(&target).as_deref(), Some("product"));
        assert_eq!(direct.relation_segment(&target), None);
    }
}
