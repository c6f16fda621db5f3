//! # Per-Address Quota Tracker
//!
//! Lifetime per-address mint counters, one independent mapping per channel.
//! Exhausting the public quota says nothing about allowlist eligibility and
//! vice versa; the two maps never mix.
//!
//! The tracker exposes a check/record split rather than a single mutating
//! reserve: later pipeline stages (payment, supply) may still reject the
//! call, and a rejected call must leave every counter exactly as it was.
//! The controller records only after the whole pipeline has passed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use relic_core::Address;

use crate::error::QuotaError;

/// Independent per-address counters for the two sale channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaTracker {
    public_minted: BTreeMap<Address, u64>,
    allowlist_minted: BTreeMap<Address, u64>,
    max_public_mint: u64,
    max_allowlist_mint: u64,
}

impl QuotaTracker {
    /// Create an empty tracker with the given per-channel ceilings.
    pub fn new(max_public_mint: u64, max_allowlist_mint: u64) -> Self {
        Self {
            public_minted: BTreeMap::new(),
            allowlist_minted: BTreeMap::new(),
            max_public_mint,
            max_allowlist_mint,
        }
    }

    /// Quantity `address` has minted through the public channel.
    pub fn public_minted(&self, address: &Address) -> u64 {
        self.public_minted.get(address).copied().unwrap_or(0)
    }

    /// Quantity `address` has minted through the allowlist channel.
    pub fn allowlist_minted(&self, address: &Address) -> u64 {
        self.allowlist_minted.get(address).copied().unwrap_or(0)
    }

    /// Check that `quantity` more public mints fit under the ceiling. Pure.
    pub fn check_public(&self, address: &Address, quantity: u64) -> Result<(), QuotaError> {
        Self::check(self.public_minted(address), quantity, self.max_public_mint)
    }

    /// Check that `quantity` more allowlist mints fit under the ceiling. Pure.
    pub fn check_allowlist(&self, address: &Address, quantity: u64) -> Result<(), QuotaError> {
        Self::check(
            self.allowlist_minted(address),
            quantity,
            self.max_allowlist_mint,
        )
    }

    /// Commit a public-channel increment. Call only after the full
    /// pipeline has passed its checks.
    pub fn record_public(&mut self, address: Address, quantity: u64) {
        *self.public_minted.entry(address).or_insert(0) += quantity;
    }

    /// Commit an allowlist-channel increment. Call only after the full
    /// pipeline has passed its checks.
    pub fn record_allowlist(&mut self, address: Address, quantity: u64) {
        *self.allowlist_minted.entry(address).or_insert(0) += quantity;
    }

    fn check(minted: u64, quantity: u64, limit: u64) -> Result<(), QuotaError> {
        let exceeds = minted
            .checked_add(quantity)
            .map_or(true, |total| total > limit);
        if exceeds {
            return Err(QuotaError::QuotaExceeded {
                requested: quantity,
                minted,
                limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::new([n; 20])
    }

    #[test]
    fn test_quota_enforced_exactly() {
        let mut quota = QuotaTracker::new(3, 3);
        assert!(quota.check_public(&addr(1), 3).is_ok());
        quota.record_public(addr(1), 3);

        let err = quota.check_public(&addr(1), 1).unwrap_err();
        assert_eq!(
            err,
            QuotaError::QuotaExceeded {
                requested: 1,
                minted: 3,
                limit: 3
            }
        );
    }

    #[test]
    fn test_channels_are_independent() {
        let mut quota = QuotaTracker::new(3, 3);
        quota.record_public(addr(1), 3);

        // Public exhausted, allowlist untouched.
        assert!(quota.check_public(&addr(1), 1).is_err());
        assert!(quota.check_allowlist(&addr(1), 3).is_ok());

        quota.record_allowlist(addr(1), 3);
        assert!(quota.check_allowlist(&addr(1), 1).is_err());
        assert_eq!(quota.public_minted(&addr(1)), 3);
        assert_eq!(quota.allowlist_minted(&addr(1)), 3);
    }

    #[test]
    fn test_addresses_are_independent() {
        let mut quota = QuotaTracker::new(2, 2);
        quota.record_public(addr(1), 2);
        assert!(quota.check_public(&addr(1), 1).is_err());
        assert!(quota.check_public(&addr(2), 2).is_ok());
    }

    #[test]
    fn test_check_does_not_mutate() {
        let quota = QuotaTracker::new(3, 3);
        assert!(quota.check_public(&addr(1), 2).is_ok());
        assert_eq!(quota.public_minted(&addr(1)), 0);
    }

    #[test]
    fn test_incremental_consumption() {
        let mut quota = QuotaTracker::new(3, 3);
        for _ in 0..3 {
            assert!(quota.check_allowlist(&addr(5), 1).is_ok());
            quota.record_allowlist(addr(5), 1);
        }
        assert!(quota.check_allowlist(&addr(5), 1).is_err());
    }

    #[test]
    fn test_oversized_request_overflow_safe() {
        let quota = QuotaTracker::new(3, 3);
        assert!(quota.check_public(&addr(1), u64::MAX).is_err());
    }
}
