//! Inclusion proofs and their verification.

use serde::{Deserialize, Serialize};

use relic_core::{Address, Digest32};

use crate::hash::{leaf_hash, node_hash};

/// An inclusion proof: the ordered sequence of sibling digests from the
/// leaf's level up to just below the root.
///
/// Sorted-pair hashing makes the proof position-free: each step combines
/// the running digest with the next sibling in canonical order, so no
/// left/right flags travel with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Sibling digests, leaf level first.
    pub siblings: Vec<Digest32>,
}

impl MerkleProof {
    /// An empty proof, valid only for a single-leaf tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of proof elements.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the proof carries no elements.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }
}

/// Verify that `address` is committed under `root` by `proof`.
///
/// Returns `false` (never an error) for anything that does not reconstruct
/// the root exactly: a foreign or tampered proof, a non-member address, a
/// truncated or padded path, or the zero root sentinel, which authorizes
/// no address at all.
pub fn verify_proof(address: &Address, proof: &MerkleProof, root: &Digest32) -> bool {
    if root.is_zero() {
        return false;
    }
    let mut current = leaf_hash(address);
    for sibling in &proof.siblings {
        current = node_hash(&current, sibling);
    }
    current == *root
}
