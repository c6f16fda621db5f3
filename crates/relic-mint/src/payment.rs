//! # Payment Validator
//!
//! Stateless exact-payment check: a call must attach precisely
//! `unit_price × quantity`. Overpayment is rejected like underpayment;
//! no refund path exists anywhere in the system, so an accepted excess
//! would simply be lost to the caller.

use serde::{Deserialize, Serialize};

use relic_core::Wei;

use crate::error::PaymentError;

/// Immutable per-channel unit prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentValidator {
    public_price: Wei,
    allowlist_price: Wei,
}

impl PaymentValidator {
    /// Create a validator with the two channel prices.
    pub fn new(public_price: Wei, allowlist_price: Wei) -> Self {
        Self {
            public_price,
            allowlist_price,
        }
    }

    /// Unit price on the public channel.
    pub fn public_price(&self) -> Wei {
        self.public_price
    }

    /// Unit price on the allowlist channel.
    pub fn allowlist_price(&self) -> Wei {
        self.allowlist_price
    }

    /// Check an attached payment against the public price.
    pub fn check_public(&self, paid: Wei, quantity: u64) -> Result<(), PaymentError> {
        Self::check_exact(paid, quantity, self.public_price)
    }

    /// Check an attached payment against the allowlist price.
    pub fn check_allowlist(&self, paid: Wei, quantity: u64) -> Result<(), PaymentError> {
        Self::check_exact(paid, quantity, self.allowlist_price)
    }

    /// Check that `paid` equals `unit_price × quantity` exactly.
    ///
    /// A total that overflows `u128` cannot be matched by any payment,
    /// so it is rejected through the same error.
    pub fn check_exact(paid: Wei, quantity: u64, unit_price: Wei) -> Result<(), PaymentError> {
        match unit_price.checked_mul(quantity) {
            Some(required) if paid == required => Ok(()),
            _ => Err(PaymentError::WrongPayment { paid }),
        }
    }
}
