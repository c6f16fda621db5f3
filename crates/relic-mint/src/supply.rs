//! # Supply Ledger
//!
//! Tracks total issuance against the immutable supply ceiling and the
//! administrative sub-allocation. Reservation is the final failable stage
//! of every mint pipeline: by the time the ledger runs, authorization,
//! quota, and payment have already passed, so the only possible failure
//! here is exhaustion and no rollback path is needed.
//!
//! Token ids are sequential from 1: a successful reservation returns the
//! previous total, and the new tokens occupy `previous + 1 ..= previous +
//! quantity`.

use serde::{Deserialize, Serialize};

use crate::error::SupplyError;

/// Global and administrative issuance counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyLedger {
    total_minted: u64,
    admin_minted: u64,
    max_supply: u64,
    reserved_for_admin: u64,
}

impl SupplyLedger {
    /// Create an empty ledger. The caller (the controller) has already
    /// validated `reserved_for_admin <= max_supply`.
    pub fn new(max_supply: u64, reserved_for_admin: u64) -> Self {
        Self {
            total_minted: 0,
            admin_minted: 0,
            max_supply,
            reserved_for_admin,
        }
    }

    /// Tokens issued so far across all channels.
    pub fn total_minted(&self) -> u64 {
        self.total_minted
    }

    /// Tokens issued so far through the administrative path.
    pub fn admin_minted(&self) -> u64 {
        self.admin_minted
    }

    /// The immutable supply ceiling.
    pub fn max_supply(&self) -> u64 {
        self.max_supply
    }

    /// Tokens still available under the ceiling.
    pub fn remaining(&self) -> u64 {
        self.max_supply - self.total_minted
    }

    /// Tokens still available in the administrative allocation.
    pub fn admin_remaining(&self) -> u64 {
        self.reserved_for_admin - self.admin_minted
    }

    /// Reserve `quantity` tokens against the global ceiling.
    ///
    /// On success the total is incremented and the previous total is
    /// returned, the zero-based start of the newly issued id range.
    pub fn reserve(&mut self, quantity: u64) -> Result<u64, SupplyError> {
        if quantity > self.remaining() {
            return Err(SupplyError::SupplyExceeded {
                requested: quantity,
                remaining: self.remaining(),
            });
        }
        let start = self.total_minted;
        self.total_minted += quantity;
        Ok(start)
    }

    /// Reserve `quantity` tokens through the administrative allocation.
    ///
    /// The allocation is checked before the global ceiling so an exhausted
    /// allocation reports `AdminAllocationExceeded` even when total
    /// headroom also happens to be short. Both counters move together.
    pub fn reserve_admin(&mut self, quantity: u64) -> Result<u64, SupplyError> {
        if quantity > self.admin_remaining() {
            return Err(SupplyError::AdminAllocationExceeded {
                requested: quantity,
                remaining: self.admin_remaining(),
            });
        }
        let start = self.reserve(quantity)?;
        self.admin_minted += quantity;
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_returns_sequential_starts() {
        let mut ledger = SupplyLedger::new(10, 0);
        assert_eq!(ledger.reserve(3).unwrap(), 0);
        assert_eq!(ledger.reserve(4).unwrap(), 3);
        assert_eq!(ledger.total_minted(), 7);
    }

    #[test]
    fn test_ceiling_enforced_exactly() {
        let mut ledger = SupplyLedger::new(5, 0);
        assert_eq!(ledger.reserve(5).unwrap(), 0);
        let err = ledger.reserve(1).unwrap_err();
        assert_eq!(
            err,
            SupplyError::SupplyExceeded {
                requested: 1,
                remaining: 0
            }
        );
        assert_eq!(ledger.total_minted(), 5);
    }

    #[test]
    fn test_failed_reserve_leaves_total_unchanged() {
        let mut ledger = SupplyLedger::new(10, 0);
        ledger.reserve(8).unwrap();
        assert!(ledger.reserve(3).is_err());
        assert_eq!(ledger.total_minted(), 8);
    }

    #[test]
    fn test_admin_allocation_boundary() {
        let mut ledger = SupplyLedger::new(300, 200);
        // Exactly the allocation succeeds once.
        assert_eq!(ledger.reserve_admin(200).unwrap(), 0);
        assert_eq!(ledger.admin_minted(), 200);
        // Any further administrative mint fails, however small.
        let err = ledger.reserve_admin(1).unwrap_err();
        assert!(matches!(err, SupplyError::AdminAllocationExceeded { .. }));
        assert_eq!(ledger.total_minted(), 200);
    }

    #[test]
    fn test_admin_over_allocation_single_call_fails_without_partial_mint() {
        let mut ledger = SupplyLedger::new(300, 200);
        assert!(ledger.reserve_admin(201).is_err());
        assert_eq!(ledger.total_minted(), 0);
        assert_eq!(ledger.admin_minted(), 0);
    }

    #[test]
    fn test_admin_allocation_error_distinct_from_supply() {
        let mut ledger = SupplyLedger::new(300, 200);
        assert!(matches!(
            ledger.reserve_admin(201).unwrap_err(),
            SupplyError::AdminAllocationExceeded { .. }
        ));
        assert!(matches!(
            ledger.reserve(301).unwrap_err(),
            SupplyError::SupplyExceeded { .. }
        ));
    }

    #[test]
    fn test_admin_mint_bounded_by_global_ceiling_too() {
        // Public minting consumed the headroom; the allocation alone does
        // not entitle the administrative path to exceed the ceiling.
        let mut ledger = SupplyLedger::new(100, 50);
        ledger.reserve(80).unwrap();
        let err = ledger.reserve_admin(30).unwrap_err();
        assert!(matches!(err, SupplyError::SupplyExceeded { .. }));
        assert_eq!(ledger.admin_minted(), 0);
        assert_eq!(ledger.total_minted(), 80);
    }

    #[test]
    fn test_admin_and_public_share_the_total() {
        let mut ledger = SupplyLedger::new(100, 20);
        ledger.reserve_admin(20).unwrap();
        assert_eq!(ledger.reserve(10).unwrap(), 20);
        assert_eq!(ledger.total_minted(), 30);
        assert_eq!(ledger.remaining(), 70);
    }
}
