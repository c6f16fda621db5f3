//! # Sale Phase Gate
//!
//! Holds the two independent channel activation flags and the public
//! channel's access key. Every public or allowlist mint call passes through
//! here first; the gate knows nothing about quotas, payment, or supply.
//!
//! The key value `0` is the "unset" sentinel. While the key is unset the
//! public channel rejects unconditionally, active or not: there is no
//! "no key required" window between activating the sale and publishing
//! the key.

use serde::{Deserialize, Serialize};

use crate::error::PhaseError;

/// The public-key value meaning "no key has been published".
pub const UNSET_PUBLIC_KEY: u64 = 0;

/// Activation flags and public access key for the two sale channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalePhaseController {
    public_sale_active: bool,
    allowlist_sale_active: bool,
    public_sale_key: u64,
}

impl SalePhaseController {
    /// Both channels start inactive with no key published.
    pub fn new() -> Self {
        Self {
            public_sale_active: false,
            allowlist_sale_active: false,
            public_sale_key: UNSET_PUBLIC_KEY,
        }
    }

    /// Whether the public channel is active.
    pub fn public_active(&self) -> bool {
        self.public_sale_active
    }

    /// Whether the allowlist channel is active.
    pub fn allowlist_active(&self) -> bool {
        self.allowlist_sale_active
    }

    /// Gate a public mint attempt. Phase is checked before the key, so an
    /// inactive sale reports `PublicSaleInactive` even for a correct key.
    pub fn check_public(&self, supplied_key: u64) -> Result<(), PhaseError> {
        if !self.public_sale_active {
            return Err(PhaseError::PublicSaleInactive);
        }
        if self.public_sale_key == UNSET_PUBLIC_KEY || supplied_key != self.public_sale_key {
            return Err(PhaseError::InvalidPublicKey);
        }
        Ok(())
    }

    /// Gate an allowlist mint attempt.
    pub fn check_allowlist(&self) -> Result<(), PhaseError> {
        if !self.allowlist_sale_active {
            return Err(PhaseError::AllowlistSaleInactive);
        }
        Ok(())
    }

    /// Set the public channel flag; takes effect for the next call.
    pub fn set_public_active(&mut self, active: bool) {
        self.public_sale_active = active;
    }

    /// Set the allowlist channel flag; takes effect for the next call.
    pub fn set_allowlist_active(&mut self, active: bool) {
        self.allowlist_sale_active = active;
    }

    /// Replace the public access key; takes effect for the next call.
    pub fn set_public_key(&mut self, key: u64) {
        self.public_sale_key = key;
    }
}

impl Default for SalePhaseController {
    fn default() -> Self {
        Self::new()
    }
}
