//! Error types for dispatch and configuration.
//!
//! Dispatch errors are programming errors: they mean an operand's tags do
//! not agree with each other or with its payload. They abort the current
//! generation step and are not meant to be retried.

use lagen_foundation::{ElementType, Family};
use thiserror::Error;

/// Dispatch result type alias.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Failures of the tag-driven dispatch core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The family-level router was handed a family that holds no payload.
    #[error("unsupported element family: {0}")]
    UnsupportedFamily(Family),

    /// A per-family router was handed an element type outside its legal set.
    #[error("element type {element_type} cannot be routed through the {router} router")]
    UnsupportedElementType {
        /// Name of the router that rejected the element.
        router: &'static str,
        /// The rejected element type.
        element_type: ElementType,
    },

    /// The declared element type is legal but the payload is of another type.
    #[error("element declared as {declared} carries a {actual} payload")]
    PayloadMismatch {
        /// Element type supplied by the caller.
        declared: ElementType,
        /// Element type of the payload actually held.
        actual: ElementType,
    },
}

impl DispatchError {
    pub(crate) fn unsupported(router: &'static str, element_type: ElementType) -> Self {
        Self::UnsupportedElementType {
            router,
            element_type,
        }
    }
}

/// Configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configuration value failed validation.
    #[error("Invalid stream config: {0}")]
    InvalidConfig(String),
}
