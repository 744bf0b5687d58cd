//! Rejection message construction
//!
//! Two message shapes, matching the two denial kinds. A direct field edit is
//! rejected with every offending field enumerated and JSON-quoted; a relation
//! edit is rejected by naming only the first offending field, unquoted,
//! because the denial covers the whole link rather than individual fields.
//! Role lists keep the request's role order in both shapes.

use fieldguard_core::{Action, FieldguardError, ResourceName, Role};

/// Quote and join offending fields: `"f1", "f2"`
fn quoted_fields(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("{field:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote and join roles: `"r1","r2"`
fn quoted_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|role| format!("{:?}", role.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Denial for a direct create/update touching disallowed fields
pub fn flat_rejection(
    fields: &[String],
    roles: &[Role],
    resource: &ResourceName,
    action: Action,
) -> FieldguardError {
    FieldguardError::forbidden(format!(
        "providing the properties: {} on {} {} is forbidden for roles: {}",
        quoted_fields(fields),
        resource,
        action,
        quoted_roles(roles),
    ))
}

/// Denial for a mutation reaching the resource through a relation
///
/// Cites only the first offending field; a relation violation denies the
/// whole link, not an enumeration of sub-fields.
pub fn relation_rejection(
    fields: &[String],
    roles: &[Role],
    resource: &ResourceName,
) -> FieldguardError {
    let first = fields.first().map(String::as_str).unwrap_or_default();
    FieldguardError::forbidden(format!(
        "Updating the relationship: {} of {} is forbidden for roles: {}",
        first,
        resource,
        quoted_roles(roles),
    ))
}
