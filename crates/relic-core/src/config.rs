//! # Issuance Configuration
//!
//! The immutable parameters a deployment is constructed with: the supply
//! ceiling, the administrative allocation and batch unit, per-channel quota
//! ceilings, and per-channel unit prices. Mutable sale state (phase flags,
//! key, commitment root, counters) lives in the mint crate; nothing here
//! changes after validation.
//!
//! ## Validation
//!
//! `validate()` runs before a controller accepts the configuration:
//!
//! - `max_supply > 0` — an empty collection cannot issue anything.
//! - `reserved_for_admin <= max_supply` — the administrative carve-out is a
//!   portion of total supply, not an addition to it.
//! - `admin_batch_size > 0` — the batch rule divides by this value.

use serde::{Deserialize, Serialize};

use crate::amount::Wei;
use crate::error::ConfigError;

/// Administrative batch unit used by the stock deployment profile.
///
/// Administrative mints must be a positive multiple of the configured batch
/// size; this default divides the customary 200-token administrative
/// allocation evenly.
pub const DEFAULT_ADMIN_BATCH_SIZE: u64 = 5;

/// Immutable deployment parameters for an issuance run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuanceConfig {
    /// Hard ceiling on the number of tokens that can ever exist.
    pub max_supply: u64,
    /// Portion of total supply reserved for administrative minting.
    pub reserved_for_admin: u64,
    /// Administrative mints must be a positive multiple of this unit.
    pub admin_batch_size: u64,
    /// Lifetime per-address ceiling for the public channel.
    pub max_public_mint: u64,
    /// Lifetime per-address ceiling for the allowlist channel.
    pub max_allowlist_mint: u64,
    /// Unit price on the public channel.
    pub public_price: Wei,
    /// Unit price on the allowlist channel.
    pub allowlist_price: Wei,
}

impl IssuanceConfig {
    /// Check the cross-field invariants. Controllers refuse unvalidated
    /// configurations, so downstream code never sees an inconsistent set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_supply == 0 {
            return Err(ConfigError::ZeroMaxSupply);
        }
        if self.reserved_for_admin > self.max_supply {
            return Err(ConfigError::ReservedExceedsSupply {
                reserved: self.reserved_for_admin,
                max_supply: self.max_supply,
            });
        }
        if self.admin_batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> IssuanceConfig {
        IssuanceConfig {
            max_supply: 1_000,
            reserved_for_admin: 200,
            admin_batch_size: DEFAULT_ADMIN_BATCH_SIZE,
            max_public_mint: 3,
            max_allowlist_mint: 3,
            public_price: Wei::new(1_000_000_000_000_000),
            allowlist_price: Wei::new(1_000_000_000_000_000),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_zero_supply_rejected() {
        let mut cfg = base();
        cfg.max_supply = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroMaxSupply));
    }

    #[test]
    fn test_reserved_over_supply_rejected() {
        let mut cfg = base();
        cfg.reserved_for_admin = cfg.max_supply + 1;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ReservedExceedsSupply { .. })
        ));
    }

    #[test]
    fn test_zero_batch_rejected() {
        let mut cfg = base();
        cfg.admin_batch_size = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroBatchSize));
    }

    #[test]
    fn test_reserved_may_equal_supply() {
        let mut cfg = base();
        cfg.reserved_for_admin = cfg.max_supply;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_default_batch_divides_customary_allocation() {
        assert_eq!(200 % DEFAULT_ADMIN_BATCH_SIZE, 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let cfg = base();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: IssuanceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_supply, cfg.max_supply);
        assert_eq!(back.public_price, cfg.public_price);
    }
}
