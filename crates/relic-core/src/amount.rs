//! # Payment Amounts
//!
//! `Wei` is the smallest-currency-unit amount used for prices, payments,
//! and the treasury balance. All arithmetic is checked: a total that does
//! not fit in `u128` is a failed operation, never a silent wrap.

use serde::{Deserialize, Serialize};

/// An amount in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Wei(pub u128);

impl Wei {
    /// The zero amount.
    pub const ZERO: Wei = Wei(0);

    /// Construct from a raw smallest-unit value.
    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// The raw smallest-unit value.
    pub fn raw(&self) -> u128 {
        self.0
    }

    /// Whether this is the zero amount.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply a unit price by a quantity, `None` on overflow.
    pub fn checked_mul(self, quantity: u64) -> Option<Wei> {
        self.0.checked_mul(u128::from(quantity)).map(Wei)
    }

    /// Add two amounts, `None` on overflow.
    pub fn checked_add(self, other: Wei) -> Option<Wei> {
        self.0.checked_add(other.0).map(Wei)
    }
}

impl std::fmt::Display for Wei {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
