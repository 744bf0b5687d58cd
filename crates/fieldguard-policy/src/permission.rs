//! Resolved permissions and attribute allowlists
//!
//! A [`Permission`] is the immutable product of grant resolution: one per
//! request, bound to the request's roles, action, possession, and resource.
//! It exposes the two operations the rest of the engine is built from:
//! [`Permission::filter`] for read-side redaction and
//! [`Permission::invalid_attributes`] for write-side validation.

use fieldguard_core::{Action, Possession, ResourceName, Role};
use serde_json::Value;

/// Attribute allowlist for a single grant
///
/// Uses the conventional allowlist notation: a plain name permits that field,
/// `*` permits every field, and `!name` revokes a field from a wildcard or
/// listed allowance within the same grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    wildcard: bool,
    allowed: Vec<String>,
    denied: Vec<String>,
}

impl AttributeSet {
    /// Parse a notation list such as `["*", "!discount"]` or `["id", "name"]`
    pub fn from_notation<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut wildcard = false;
        let mut allowed = Vec::new();
        let mut denied = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            if entry == "*" {
                wildcard = true;
            } else if let Some(negated) = entry.strip_prefix('!') {
                denied.push(negated.to_string());
            } else {
                allowed.push(entry.to_string());
            }
        }
        Self {
            wildcard,
            allowed,
            denied,
        }
    }

    /// True if this set permits the named field
    pub fn allows(&self, field: &str) -> bool {
        if self.denied.iter().any(|d| d == field) {
            return false;
        }
        self.wildcard || self.allowed.iter().any(|a| a == field)
    }
}

/// A resolved policy object bound to {roles, action, possession, resource}
///
/// Immutable once resolved. Attribute checks take the union over the
/// attribute sets of every grant that matched during resolution: a field is
/// permitted when at least one matching grant permits it.
#[derive(Debug, Clone)]
pub struct Permission {
    roles: Vec<Role>,
    action: Action,
    possession: Possession,
    resource: ResourceName,
    attribute_sets: Vec<AttributeSet>,
}

impl Permission {
    /// Assemble a permission from resolved grant attribute sets
    ///
    /// Callers normally obtain permissions through
    /// [`GrantRegistry::resolve`](crate::grants::GrantRegistry::resolve)
    /// rather than constructing them directly.
    pub fn new(
        roles: Vec<Role>,
        action: Action,
        possession: Possession,
        resource: ResourceName,
        attribute_sets: Vec<AttributeSet>,
    ) -> Self {
        Self {
            roles,
            action,
            possession,
            resource,
            attribute_sets,
        }
    }

    /// Roles this permission was resolved for, in request order
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// The action this permission authorizes
    pub fn action(&self) -> Action {
        self.action
    }

    /// The possession scope this permission was resolved under
    pub fn possession(&self) -> Possession {
        self.possession
    }

    /// The resource this permission is bound to
    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// True if at least one matching grant permits the named field
    pub fn allows(&self, field: &str) -> bool {
        self.attribute_sets.iter().any(|set| set.allows(field))
    }

    /// Keep only the permitted fields of a record
    ///
    /// Non-object values pass through untouched; absent fields are simply
    /// absent from the output. Filtering never fails.
    pub fn filter(&self, record: &Value) -> Value {
        match record {
            Value::Object(fields) => Value::Object(
                fields
                    .iter()
                    .filter(|(key, _)| self.allows(key))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// Fields of a candidate payload this permission does not allow
    ///
    /// Returned in payload order. Non-object payloads (including null and an
    /// absent body modeled as null) produce no violations.
    pub fn invalid_attributes(&self, payload: &Value) -> Vec<String> {
        match payload {
            Value::Object(fields) => fields
                .keys()
                .filter(|key| !self.allows(key))
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }
}
