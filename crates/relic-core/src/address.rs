//! # Account Addresses
//!
//! `Address` is the 20-byte account identifier used everywhere a caller,
//! owner, or mint recipient appears. The newtype prevents accidental
//! confusion with other 20-plus-byte values and pins the hex rendering
//! to one canonical form.
//!
//! ## Security Invariant
//!
//! Addresses are compared byte-for-byte. Parsing accepts only exactly
//! 40 hex characters (with or without the `0x` prefix); truncated or
//! padded inputs are rejected rather than coerced.

use serde::{Deserialize, Serialize};

use crate::error::AddressError;

/// Number of bytes in an account address.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address. Used in tests and as an obvious non-participant.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Construct from raw bytes.
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    ///
    /// The input must be exactly 40 hex characters after the prefix is
    /// stripped; anything else is an `AddressError`.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let hex = s.trim().strip_prefix("0x").unwrap_or(s.trim());
        if hex.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::InvalidLength(hex.len()));
        }
        let mut out = [0u8; ADDRESS_LEN];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let s = std::str::from_utf8(chunk)
                .map_err(|_| AddressError::InvalidHex(i))?;
            out[i] = u8::from_str_radix(s, 16).map_err(|_| AddressError::InvalidHex(i))?;
        }
        Ok(Self(out))
    }

    /// Render as lowercase hex without a prefix.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Hex rendering and parsing are exact inverses for any address.
        #[test]
        fn hex_roundtrip(bytes in prop::array::uniform20(any::<u8>())) {
            let addr = Address::new(bytes);
            prop_assert_eq!(Address::from_hex(&addr.to_hex()).unwrap(), addr);
        }

        /// Parsing never panics on arbitrary input strings.
        #[test]
        fn parse_never_panics(s in ".{0,64}") {
            let _ = Address::from_hex(&s);
        }
    }
}
