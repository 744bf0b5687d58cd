//! # Fieldguard Core - Shared Vocabulary
//!
//! Foundational types for the Fieldguard field-level access control engine:
//! the role/action/possession/resource vocabulary every policy decision is
//! phrased in, plus the unified error type shared across crates.
//!
//! This crate contains no policy logic. The decision engine lives in
//! `fieldguard-policy`; transport adapters live in `fieldguard-adapters`.

#![forbid(unsafe_code)]

pub mod errors;
pub mod types;

pub use errors::{FieldguardError, Result};
pub use types::{Action, Possession, ResourceName, Role};
