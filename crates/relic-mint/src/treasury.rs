//! # Treasury
//!
//! Accumulates the exact payments accepted by the mint pipelines and hands
//! the whole balance to the owner on withdrawal. Deposits happen only after
//! a mint has fully committed, so the balance is always the sum of payments
//! for tokens that actually exist.

use serde::{Deserialize, Serialize};

use relic_core::Wei;

/// Accumulated payment balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Treasury {
    balance: Wei,
}

impl Treasury {
    /// Start with an empty balance.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current accumulated balance.
    pub fn balance(&self) -> Wei {
        self.balance
    }

    /// Credit an accepted payment. Saturates at `u128::MAX`, which no sum
    /// of `price × quantity` payments bounded by a `u64` supply can reach.
    pub fn deposit(&mut self, amount: Wei) {
        self.balance = Wei(self.balance.0.saturating_add(amount.0));
    }

    /// Drain the full balance to the caller (the controller has already
    /// checked ownership). Returns the withdrawn amount.
    pub fn withdraw_all(&mut self) -> Wei {
        std::mem::take(&mut self.balance)
    }
}
