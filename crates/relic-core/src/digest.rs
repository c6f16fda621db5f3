//! # 32-Byte Digests
//!
//! `Digest32` wraps the 32-byte SHA-256 output used for allowlist
//! commitments and proof elements. The zero digest is a reserved sentinel:
//! a commitment that authorizes no one.
//!
//! ## Security Invariant
//!
//! Digests order byte-lexicographically (`Ord`). Sorted-pair Merkle
//! combination depends on this ordering being total and canonical, so the
//! derive is part of the hashing contract, not a convenience.

use serde::{Deserialize, Serialize};

use crate::error::DigestError;

/// Number of bytes in a digest.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte digest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest32(pub [u8; DIGEST_LEN]);

impl Digest32 {
    /// The all-zero digest: the "no commitment published" sentinel.
    pub const ZERO: Digest32 = Digest32([0u8; DIGEST_LEN]);

    /// Construct from raw bytes.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Whether this is the zero sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; DIGEST_LEN]
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        let hex = s.trim();
        if hex.len() != DIGEST_LEN * 2 {
            return Err(DigestError::InvalidLength(hex.len()));
        }
        let mut out = [0u8; DIGEST_LEN];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let s = std::str::from_utf8(chunk)
                .map_err(|_| DigestError::InvalidHex(i))?;
            out[i] = u8::from_str_radix(s, 16).map_err(|_| DigestError::InvalidHex(i))?;
        }
        Ok(Self(out))
    }

    /// Render as lowercase hex.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl std::fmt::Display for Digest32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
