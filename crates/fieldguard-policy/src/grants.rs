//! Grant registry and role-permission resolution
//!
//! The registry is the statically-typed role → resource → action →
//! attribute-allowlist table the engine evaluates against. It is populated by
//! explicit registration at startup and shared read-only between requests;
//! resolution is a pure lookup with no interior mutability.

use crate::permission::{AttributeSet, Permission};
use fieldguard_core::{Action, FieldguardError, Possession, ResourceName, Result, Role};
use tracing::debug;

/// A single allowance: one role, one resource, one action, one allowlist
#[derive(Debug, Clone)]
struct Grant {
    role: Role,
    resource: ResourceName,
    action: Action,
    possession: Possession,
    attributes: AttributeSet,
}

impl Grant {
    /// True if this grant applies to the given request coordinates
    ///
    /// A grant scoped to any record also satisfies an own-record request;
    /// the reverse does not hold.
    fn matches(
        &self,
        role: &Role,
        action: Action,
        possession: Possession,
        resource: &ResourceName,
    ) -> bool {
        self.role == *role
            && self.action == action
            && self.resource == *resource
            && (self.possession == Possession::Any || self.possession == possession)
    }
}

/// Process-wide role-grant table
///
/// Requests resolve one [`Permission`] from this table and never touch it
/// again; concurrent resolution from many requests needs no locking.
#[derive(Debug, Clone, Default)]
pub struct GrantRegistry {
    grants: Vec<Grant>,
}

impl GrantRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an allowance for a role on a resource/action pair
    ///
    /// `attributes` uses allowlist notation: plain field names, `*` for all
    /// fields, `!name` to revoke a field within this grant.
    pub fn allow<S: AsRef<str>>(
        &mut self,
        role: impl Into<Role>,
        resource: impl Into<ResourceName>,
        action: Action,
        possession: Possession,
        attributes: &[S],
    ) -> &mut Self {
        self.grants.push(Grant {
            role: role.into(),
            resource: resource.into(),
            action,
            possession,
            attributes: AttributeSet::from_notation(attributes),
        });
        self
    }

    /// Resolve the composed permission for a role set
    ///
    /// Allowances compose as a union: a field is permitted when any of the
    /// supplied roles carries a grant permitting it. Fails with a
    /// configuration error when no supplied role holds any grant for the
    /// (resource, action) pair at all; that is a server-side fault in the
    /// grant table, not a client authorization outcome.
    pub fn resolve(
        &self,
        roles: &[Role],
        action: Action,
        possession: Possession,
        resource: &ResourceName,
    ) -> Result<Permission> {
        if roles.is_empty() {
            return Err(FieldguardError::configuration(
                "permission resolution requires at least one role",
            ));
        }

        let attribute_sets: Vec<AttributeSet> = self
            .grants
            .iter()
            .filter(|grant| {
                roles
                    .iter()
                    .any(|role| grant.matches(role, action, possession, resource))
            })
            .map(|grant| grant.attributes.clone())
            .collect();

        if attribute_sets.is_empty() {
            return Err(FieldguardError::configuration(format!(
                "no grant for roles {:?} on {} {}",
                roles.iter().map(Role::as_str).collect::<Vec<_>>(),
                resource,
                action,
            )));
        }

        debug!(
            resource = %resource,
            action = %action,
            grants = attribute_sets.len(),
            "resolved permission"
        );

        Ok(Permission::new(
            roles.to_vec(),
            action,
            possession,
            resource.clone(),
            attribute_sets,
        ))
    }
}
