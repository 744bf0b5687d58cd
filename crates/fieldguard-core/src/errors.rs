//! Unified error system for Fieldguard
//!
//! A single error type shared by every crate in the workspace. Authorization
//! denials and configuration faults are deliberately separate variants: a
//! denial is a client-facing 403-equivalent, while a configuration fault is a
//! server-side defect in the grant table and must never be presented as an
//! authorization outcome.

use serde::{Deserialize, Serialize};

/// Unified error type for all Fieldguard operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FieldguardError {
    /// Authorization denied; the message enumerates roles and offending fields
    #[error("{message}")]
    Forbidden {
        /// Human-readable denial, built by the rejection builder
        message: String,
    },

    /// The grant table has no entry for the resolved role/action/resource
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the missing or malformed grant
        message: String,
    },

    /// Invalid input from the transport layer
    #[error("Invalid: {message}")]
    Invalid {
        /// Description of the malformed input
        message: String,
    },
}

impl FieldguardError {
    /// Create an authorization denial
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// True if this error is a client-facing authorization denial
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}

/// Standard Result type for Fieldguard operations
pub type Result<T> = std::result::Result<T, FieldguardError>;
