//! # Core Error Types
//!
//! Parsing and configuration errors for the foundational types. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Error parsing an [`crate::Address`] from hex.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Input was not 40 hex characters.
    #[error("address must be 40 hex chars, got {0}")]
    InvalidLength(usize),

    /// Input contained a non-hex byte pair at the given offset.
    #[error("invalid hex in address at byte {0}")]
    InvalidHex(usize),
}

/// Error parsing a [`crate::Digest32`] from hex.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Input was not 64 hex characters.
    #[error("digest must be 64 hex chars, got {0}")]
    InvalidLength(usize),

    /// Input contained a non-hex byte pair at the given offset.
    #[error("invalid hex in digest at byte {0}")]
    InvalidHex(usize),
}

/// Error validating an [`crate::IssuanceConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The supply ceiling must be positive.
    #[error("max supply must be positive")]
    ZeroMaxSupply,

    /// The administrative allocation cannot exceed the supply ceiling.
    #[error("reserved allocation {reserved} exceeds max supply {max_supply}")]
    ReservedExceedsSupply {
        /// Configured administrative allocation.
        reserved: u64,
        /// Configured supply ceiling.
        max_supply: u64,
    },

    /// The administrative batch unit must be positive.
    #[error("admin batch size must be positive")]
    ZeroBatchSize,
}
