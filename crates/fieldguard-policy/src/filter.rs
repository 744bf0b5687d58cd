//! Read-side result filtering
//!
//! Filtering is always silent: a field the caller may not read is omitted
//! from the output, never reported as an error. Lists keep their length and
//! element order; only fields within each element are stripped.

use crate::permission::Permission;
use serde_json::Value;
use tracing::debug;

/// Strip disallowed fields from a handler result
///
/// Sequences are filtered per element; a single record is returned as a new
/// filtered record; scalars and null pass through untouched. Already-filtered
/// input is a fixed point: filtering twice removes nothing further.
pub fn filter_result(permission: &Permission, result: &Value) -> Value {
    match result {
        Value::Array(records) => {
            debug!(len = records.len(), "filtering find-many result");
            Value::Array(records.iter().map(|record| permission.filter(record)).collect())
        }
        record => permission.filter(record),
    }
}
