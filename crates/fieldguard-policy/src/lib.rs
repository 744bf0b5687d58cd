//! # Fieldguard Policy - Field-Level Decision Engine
//!
//! The transport-agnostic core of Fieldguard: given a resolved [`Permission`]
//! and the data flowing through a request, decide which output fields to
//! redact and whether a write touches fields the caller's roles are not
//! entitled to.
//!
//! # Decision Flow
//!
//! ```text
//! GrantRegistry::resolve → Permission
//!                            ├─ read path:  filter_result (silent redaction)
//!                            └─ write path: invalid_attributes → authorize_write
//!                                           └─ rejection (flat | relation)
//! ```
//!
//! Every request resolves exactly one `Permission` and runs all of its
//! filter/validate calls against that instance. Evaluation is synchronous,
//! allocation-local, and safe to run concurrently against a shared registry.

#![forbid(unsafe_code)]

pub mod authorizer;
pub mod filter;
pub mod grants;
pub mod permission;
pub mod rejection;
pub mod validator;

pub use authorizer::authorize_write;
pub use filter::filter_result;
pub use grants::GrantRegistry;
pub use permission::{AttributeSet, Permission};
pub use rejection::{flat_rejection, relation_rejection};
pub use validator::{
    invalid_attributes, invalid_attributes_for_caller, invalid_relation_attributes,
};
