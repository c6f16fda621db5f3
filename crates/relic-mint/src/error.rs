//! # Mint Error Types
//!
//! Every failure in the mint pipeline is a value-level rejection carried by
//! one of these enums. Per-collaborator errors stay with their collaborator;
//! [`MintError`] aggregates them for the controller's caller-facing surface.
//!
//! Failures are terminal for the call and caller-correctable; there is no
//! retryable/fatal distinction because no failure here is transient.

use thiserror::Error;

use relic_core::Wei;

/// Failure from the supply ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupplyError {
    /// Reservation would push the total past the supply ceiling.
    #[error("max supply reached: {requested} requested with {remaining} remaining")]
    SupplyExceeded {
        /// Quantity the caller asked for.
        requested: u64,
        /// Tokens still available under the ceiling.
        remaining: u64,
    },

    /// Administrative reservation would exhaust the reserved allocation.
    #[error("administrative allocation exceeded: {requested} requested with {remaining} remaining")]
    AdminAllocationExceeded {
        /// Quantity the caller asked for.
        requested: u64,
        /// Tokens still available in the administrative allocation.
        remaining: u64,
    },
}

/// Failure from the sale phase gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhaseError {
    /// The public channel is switched off.
    #[error("public mint not active")]
    PublicSaleInactive,

    /// The supplied key does not match the configured key, or no key is set.
    #[error("invalid public sale key")]
    InvalidPublicKey,

    /// The allowlist channel is switched off.
    #[error("allowlist mint not active")]
    AllowlistSaleInactive,
}

/// Failure from the quota tracker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuotaError {
    /// The address has no room left in this channel.
    #[error("allowed mint amount exceeded: {requested} requested, {minted} of {limit} already minted")]
    QuotaExceeded {
        /// Quantity the caller asked for.
        requested: u64,
        /// Quantity this address already minted through the channel.
        minted: u64,
        /// Lifetime per-address ceiling for the channel.
        limit: u64,
    },
}

/// Failure from the payment validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Payment does not equal `unit_price × quantity` exactly.
    /// Overpayment is rejected the same as underpayment.
    #[error("exact payment required: sent {paid}")]
    WrongPayment {
        /// Amount the caller attached.
        paid: Wei,
    },
}

/// Caller-facing failure surface of the minting controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MintError {
    /// The caller is not the issuance owner.
    #[error("caller is not the owner")]
    NotOwner,

    /// Mint quantity must be positive.
    #[error("mint quantity must be positive")]
    InvalidQuantity,

    /// Administrative mints must be a positive multiple of the batch unit.
    #[error("can only mint a multiple of the admin batch size ({batch_size}), got {quantity}")]
    InvalidBatchSize {
        /// Quantity the caller asked for.
        quantity: u64,
        /// Configured administrative batch unit.
        batch_size: u64,
    },

    /// The caller's proof does not place it in the committed allowlist.
    #[error("unauthorized address")]
    UnauthorizedAddress,

    /// No token with this id has been issued.
    #[error("token {0} does not exist")]
    TokenNotFound(u64),

    /// Supply ledger rejection.
    #[error(transparent)]
    Supply(#[from] SupplyError),

    /// Sale phase rejection.
    #[error(transparent)]
    Phase(#[from] PhaseError),

    /// Quota rejection.
    #[error(transparent)]
    Quota(#[from] QuotaError),

    /// Payment rejection.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}
