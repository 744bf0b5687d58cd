//! Role, action, possession, and resource vocabulary
//!
//! These are the four coordinates every permission is resolved against. All
//! of them are cheap, immutable value types; the policy engine never
//! interprets `Possession` beyond matching it against grants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque role identifier carried by an authenticated principal
///
/// A request carries a non-empty ordered set of roles. Insertion order is
/// irrelevant to the policy outcome but is preserved verbatim in rejection
/// messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Create a role from any string-like value
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The role name as a plain string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// CRUD action being authorized
///
/// Fixed enumeration; anything outside it is an upstream configuration error
/// and never reaches the policy engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Create a new record
    Create,
    /// Read one record or a list of records
    Read,
    /// Update an existing record
    Update,
    /// Delete a record or detach a relation
    Delete,
}

impl Action {
    /// Lowercase rendering used in grant lookups and rejection messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope qualifier distinguishing "own records" from "any record" grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Possession {
    /// Permission applies only to records owned by the requester
    Own,
    /// Permission applies to any record
    Any,
}

impl Possession {
    /// Lowercase rendering used in grant lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            Possession::Own => "own",
            Possession::Any => "any",
        }
    }
}

/// Name of the entity a request acts on (e.g. "Order", "Product")
///
/// Case matters only at the nesting boundary: when a resource is addressed
/// through another resource's relation, the lower-cased name becomes the
/// wrapping key of the relation payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceName(String);

impl ResourceName {
    /// Create a resource name from any string-like value
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The resource name as declared (e.g. "Order")
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used as the nesting key for relation payloads
    pub fn relation_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
