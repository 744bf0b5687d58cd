//! Attribute validation over flat and relation-wrapped payloads
//!
//! A payload arrives in one of two shapes: a flat field→value object for a
//! direct mutation of the primary resource, or that same object conceptually
//! nested under a relation key when the mutation reaches a resource through
//! another resource's relation. Wrapping before validation makes the relation
//! key itself the violating field, which is what lets the authorizer report
//! "this relationship is forbidden" instead of enumerating inner fields the
//! caller never addressed directly.

use crate::permission::Permission;
use fieldguard_core::ResourceName;
use serde_json::{Map, Value};
use tracing::debug;

/// Fields of a flat payload the permission disallows, in payload order
pub fn invalid_attributes(permission: &Permission, payload: &Value) -> Vec<String> {
    permission.invalid_attributes(payload)
}

/// Validate a payload reached through a relation
///
/// The payload is wrapped as `{ relation_key: payload }` before checking, so
/// a violation surfaces as the relation key. The key is the relation's
/// lower-cased name: the `<relation>` route segment for HTTP-shaped
/// transports, the target resource's name for GraphQL.
pub fn invalid_relation_attributes(
    permission: &Permission,
    relation_key: &str,
    payload: &Value,
) -> Vec<String> {
    // An empty or absent payload touches nothing, not even the relation.
    if payload.is_null() || payload.as_object().is_some_and(Map::is_empty) {
        return Vec::new();
    }
    let mut wrapped = Map::new();
    wrapped.insert(relation_key.to_string(), payload.clone());
    permission.invalid_attributes(&Value::Object(wrapped))
}

/// Validate a payload, choosing the shape from the invoking resource
///
/// When the logical resource handling the request differs from the target
/// resource, the call is a relation mutation and the payload is wrapped
/// under the target's lower-cased name; otherwise it is validated flat.
pub fn invalid_attributes_for_caller(
    permission: &Permission,
    caller: &ResourceName,
    payload: &Value,
) -> Vec<String> {
    if caller != permission.resource() {
        debug!(caller = %caller, resource = %permission.resource(), "validating as relation payload");
        invalid_relation_attributes(permission, &permission.resource().relation_key(), payload)
    } else {
        invalid_attributes(permission, payload)
    }
}
