//! Write-side authorization decision table
//!
//! The one branching policy in the engine, keyed by the action and whether
//! the mutation reaches the resource through a relation:
//!
//! ```text
//! create               flat validation, enumerate all offending fields
//! update / direct      flat validation, enumerate all offending fields
//! update / relation    relation validation, cite first offending field only
//! delete / direct      no field-level validation
//! delete / relation    relation validation, cite first offending field only
//! ```
//!
//! Whole-record deletion carries no field data to judge; it was already
//! allowed or denied at permission resolution. Relation deletion detaches a
//! link and is judged like a relation update.
//!
//! Authorization runs before the surrounding data layer commits anything;
//! a rejection here means no write happens at all.

use crate::permission::Permission;
use crate::rejection::{flat_rejection, relation_rejection};
use crate::validator::{invalid_attributes, invalid_relation_attributes};
use fieldguard_core::{Action, Result};
use serde_json::Value;
use tracing::warn;

/// Authorize a mutation payload against a resolved permission
///
/// `relation` is the lower-cased relation key for mutations that address the
/// resource through another resource's relation (the `<relation>` segment of
/// a `/:id/<relation>` route, or the target resource's name for a GraphQL
/// invocation whose logical resource differs from the target); `None` marks
/// a direct mutation. Returns `Ok(())` to proceed or a `Forbidden` error to
/// reject; the caller must not apply any part of a rejected write.
pub fn authorize_write(
    permission: &Permission,
    relation: Option<&str>,
    payload: &Value,
) -> Result<()> {
    match (permission.action(), relation) {
        (Action::Create, _) | (Action::Update, None) => {
            let violations = invalid_attributes(permission, payload);
            if violations.is_empty() {
                return Ok(());
            }
            warn!(
                resource = %permission.resource(),
                action = %permission.action(),
                fields = ?violations,
                "rejecting write with disallowed fields"
            );
            Err(flat_rejection(
                &violations,
                permission.roles(),
                permission.resource(),
                permission.action(),
            ))
        }
        (Action::Update, Some(relation)) | (Action::Delete, Some(relation)) => {
            let violations = invalid_relation_attributes(permission, relation, payload);
            if violations.is_empty() {
                return Ok(());
            }
            warn!(
                resource = %permission.resource(),
                relation = %violations[0],
                "rejecting relation mutation"
            );
            Err(relation_rejection(
                &violations,
                permission.roles(),
                permission.resource(),
            ))
        }
        // Whole-record deletion: the action-level decision was made at
        // resolution time; there are no fields left to judge.
        (Action::Delete, None) => Ok(()),
        // Reads never reach the write authorizer, but a read permission
        // passed here has nothing to reject either.
        (Action::Read, _) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::AttributeSet;
    use assert_matches::assert_matches;
    use fieldguard_core::{FieldguardError, Possession, ResourceName, Role};
    use serde_json::json;

    fn permission(action: Action, attributes: &[&str]) -> Permission {
        Permission::new(
            vec![Role::new("customer")],
            action,
            Possession::Own,
            ResourceName::new("Order"),
            vec![AttributeSet::from_notation(attributes)],
        )
    }

    #[test]
    fn test_create_with_allowed_fields_proceeds() {
        let perm = permission(Action::Create, &["totalPrice", "quantity"]);
        let payload = json!({"totalPrice": 500, "quantity": 2});
        assert!(authorize_write(&perm, None, &payload).is_ok());
    }

    #[test]
    fn test_create_enumerates_all_offending_fields() {
        let perm = permission(Action::Create, &["quantity"]);
        let payload = json!({"discount": 10, "totalPrice": 500, "quantity": 2});
        let err = authorize_write(&perm, None, &payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "providing the properties: \"discount\", \"totalPrice\" on Order create is forbidden for roles: \"customer\""
        );
    }

    #[test]
    fn test_direct_update_rejection_matches_contract() {
        let perm = permission(Action::Update, &["totalPrice"]);
        let payload = json!({"discount": 10, "totalPrice": 500});
        let err = authorize_write(&perm, None, &payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "providing the properties: \"discount\" on Order update is forbidden for roles: \"customer\""
        );
    }

    #[test]
    fn test_relation_update_cites_only_first_field() {
        // Two disallowed fields reach the resource through a relation; the
        // rejection names the relation key once, never an enumeration. An
        // alternative policy that enumerates every offending field on
        // relation updates was considered and rejected: a relation denial
        // covers the whole link.
        let perm = permission(Action::Update, &["totalPrice"]);
        let payload = json!({"discount": 10, "secret": true});
        let err = authorize_write(&perm, Some("product"), &payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Updating the relationship: product of Order is forbidden for roles: \"customer\""
        );
    }

    #[test]
    fn test_flat_delete_skips_field_validation() {
        // Even a payload full of disallowed fields is ignored on direct delete.
        let perm = permission(Action::Delete, &["quantity"]);
        let payload = json!({"discount": 10, "secret": true});
        assert!(authorize_write(&perm, None, &payload).is_ok());
    }

    #[test]
    fn test_relation_delete_is_judged_as_relation() {
        let perm = permission(Action::Delete, &["quantity"]);
        let payload = json!({"productId": 7});
        let err = authorize_write(&perm, Some("product"), &payload).unwrap_err();
        assert_matches!(err, FieldguardError::Forbidden { .. });
        assert!(err.to_string().starts_with("Updating the relationship: product"));
    }

    #[test]
    fn test_relation_delete_with_granted_relation_proceeds() {
        let perm = permission(Action::Delete, &["product"]);
        let payload = json!({"productId": 7});
        assert!(authorize_write(&perm, Some("product"), &payload).is_ok());
    }
}
