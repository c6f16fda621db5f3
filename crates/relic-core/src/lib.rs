//! # relic-core — Foundational Types for the Relic Issuance Stack
//!
//! This crate is the bedrock of the issuance workspace. It defines the
//! type-system primitives every other crate builds on, and it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address`, `Wei`,
//!    `Digest32`. No bare byte arrays or integers cross a crate boundary;
//!    you cannot pass a digest where an address is expected.
//!
//! 2. **Checked arithmetic for money.** `Wei` exposes only checked
//!    operations; an overflowing total is a rejected payment, never a
//!    wrapped one.
//!
//! 3. **Validated configuration.** `IssuanceConfig::validate()` runs before
//!    a controller is constructed. A ledger with `reserved_for_admin`
//!    exceeding `max_supply` is unrepresentable downstream.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `relic-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod address;
pub mod amount;
pub mod config;
pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use address::Address;
pub use amount::Wei;
pub use config::{IssuanceConfig, DEFAULT_ADMIN_BATCH_SIZE};
pub use digest::Digest32;
pub use error::{AddressError, ConfigError, DigestError};
