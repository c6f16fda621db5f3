//! # Allowlist Verifier
//!
//! Holds the published commitment root and answers one question: does this
//! caller's proof place it in the committed set? Replacing the root swaps
//! the entire authorized set at once; there is no merging of trees.

use serde::{Deserialize, Serialize};

use relic_allowlist::{verify_proof, MerkleProof};
use relic_core::{Address, Digest32};

/// The stored allowlist commitment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowlistVerifier {
    merkle_root: Digest32,
}

impl AllowlistVerifier {
    /// Start with the zero root: no address is authorized until an owner
    /// publishes a commitment.
    pub fn new() -> Self {
        Self {
            merkle_root: Digest32::ZERO,
        }
    }

    /// The currently published root.
    pub fn root(&self) -> Digest32 {
        self.merkle_root
    }

    /// Replace the commitment wholesale.
    pub fn set_root(&mut self, root: Digest32) {
        self.merkle_root = root;
    }

    /// Whether `address` is committed under the published root.
    pub fn verify(&self, address: &Address, proof: &MerkleProof) -> bool {
        verify_proof(address, proof, &self.merkle_root)
    }
}

impl Default for AllowlistVerifier {
    fn default() -> Self {
        Self::new()
    }
}
