//! # relic-mint — The Minting Controller and Its Collaborators
//!
//! Implements the issuance pipeline for a fixed-supply collectible run:
//! a single owning authority, two competing public-facing sale channels
//! (open "public" and pre-committed "allowlist"), and a reserved
//! administrative allocation.
//!
//! ## Architecture
//!
//! Five independent checkers composed by one orchestrator: explicit
//! composition, no shared base abstractions.
//!
//! - [`SupplyLedger`] — global ceiling and administrative allocation.
//! - [`SalePhaseController`] — channel flags and the public access key.
//! - [`AllowlistVerifier`] — published commitment root and proof checks.
//! - [`QuotaTracker`] — independent per-address, per-channel counters.
//! - [`PaymentValidator`] — strict exact-payment rule.
//!
//! plus the [`Treasury`] (accumulated payments), [`TokenMetadata`] (URI
//! storage), and the [`MintingController`] that owns all of them and is
//! the sole writer of shared state.
//!
//! ## Atomicity
//!
//! Every mint operation is all-or-nothing. The pipeline runs pure checks
//! first; the supply reservation is the final failable stage, and the
//! commits after it (quota record, treasury deposit) cannot fail. A
//! rejected call leaves every counter untouched.

pub mod controller;
pub mod error;
pub mod metadata;
pub mod payment;
pub mod phase;
pub mod quota;
pub mod supply;
pub mod treasury;
pub mod verifier;

// Re-export the caller-facing surface.
pub use controller::{MintReceipt, MintingController};
pub use error::{MintError, PaymentError, PhaseError, QuotaError, SupplyError};
pub use metadata::TokenMetadata;
pub use payment::PaymentValidator;
pub use phase::{SalePhaseController, UNSET_PUBLIC_KEY};
pub use quota::QuotaTracker;
pub use supply::SupplyLedger;
pub use treasury::Treasury;
pub use verifier::AllowlistVerifier;
