//! Allowlist Merkle tree construction.
//!
//! The operator-side counterpart of [`crate::verify_proof`]: builds the
//! full tree over an address list, exposes the root for publication, and
//! hands out one inclusion proof per address. The issuance system itself
//! only ever sees the root and individual proofs.
//!
//! Layer construction pairs nodes left to right and promotes an unpaired
//! trailing node to the next layer unhashed; each pair hashes in sorted
//! order. Duplicate addresses collapse to their first occurrence, so an
//! operator list with repeats commits to the same set as the unique list.

use thiserror::Error;

use relic_core::{Address, Digest32};

use crate::hash::{leaf_hash, node_hash};
use crate::proof::MerkleProof;

/// Error constructing or querying an [`AllowlistTree`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllowlistError {
    /// An empty address list has no root to publish.
    #[error("allowlist must contain at least one address")]
    EmptyAllowlist,

    /// The queried address is not part of this tree.
    #[error("address {0} is not in the allowlist")]
    NotInTree(Address),
}

/// A fully materialized allowlist commitment tree.
#[derive(Debug, Clone)]
pub struct AllowlistTree {
    /// Committed addresses, first occurrence order.
    addresses: Vec<Address>,
    /// Hash layers, leaves first; the last layer is the single root.
    layers: Vec<Vec<Digest32>>,
}

impl AllowlistTree {
    /// Build the tree over `addresses`, collapsing duplicates.
    pub fn build(addresses: &[Address]) -> Result<Self, AllowlistError> {
        let mut unique: Vec<Address> = Vec::with_capacity(addresses.len());
        for addr in addresses {
            if !unique.contains(addr) {
                unique.push(*addr);
            }
        }
        if unique.is_empty() {
            return Err(AllowlistError::EmptyAllowlist);
        }

        let leaves: Vec<Digest32> = unique.iter().map(leaf_hash).collect();
        let mut layers = vec![leaves];
        while layers[layers.len() - 1].len() > 1 {
            let current = &layers[layers.len() - 1];
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                match pair {
                    [left, right] => next.push(node_hash(left, right)),
                    // Unpaired trailing node is promoted unhashed.
                    [single] => next.push(*single),
                    _ => unreachable!("chunks(2) yields one- or two-element slices"),
                }
            }
            layers.push(next);
        }

        Ok(Self {
            addresses: unique,
            layers,
        })
    }

    /// The root digest to publish as the allowlist commitment.
    pub fn root(&self) -> Digest32 {
        self.layers[self.layers.len() - 1][0]
    }

    /// Number of committed addresses.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether the tree commits to no addresses (never true post-build).
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// The committed addresses in leaf order.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// The inclusion proof for `address`.
    pub fn proof_for(&self, address: &Address) -> Result<MerkleProof, AllowlistError> {
        let mut index = self
            .addresses
            .iter()
            .position(|a| a == address)
            .ok_or(AllowlistError::NotInTree(*address))?;

        let mut siblings = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling_index = index ^ 1;
            if sibling_index < layer.len() {
                siblings.push(layer[sibling_index]);
            }
            index /= 2;
        }
        Ok(MerkleProof { siblings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::verify_proof;

    fn addr(n: u8) -> Address {
        Address::new([n; 20])
    }

    fn addrs(ns: &[u8]) -> Vec<Address> {
        ns.iter().map(|n| addr(*n)).collect()
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(
            AllowlistTree::build(&[]).unwrap_err(),
            AllowlistError::EmptyAllowlist
        );
    }

    #[test]
    fn test_single_address_tree() {
        let tree = AllowlistTree::build(&addrs(&[1])).unwrap();
        assert_eq!(tree.root(), leaf_hash(&addr(1)));
        let proof = tree.proof_for(&addr(1)).unwrap();
        assert!(proof.is_empty());
        assert!(verify_proof(&addr(1), &proof, &tree.root()));
    }

    #[test]
    fn test_every_member_verifies_for_various_sizes() {
        for size in 1..=9u8 {
            let list = addrs(&(1..=size).collect::<Vec<_>>());
            let tree = AllowlistTree::build(&list).unwrap();
            for a in &list {
                let proof = tree.proof_for(a).unwrap();
                assert!(
                    verify_proof(a, &proof, &tree.root()),
                    "member failed at size={size}, addr={a}"
                );
            }
        }
    }

    #[test]
    fn test_non_member_rejected() {
        let tree = AllowlistTree::build(&addrs(&[1, 2, 3])).unwrap();
        let member_proof = tree.proof_for(&addr(2)).unwrap();
        assert!(!verify_proof(&addr(9), &member_proof, &tree.root()));
        assert_eq!(
            tree.proof_for(&addr(9)),
            Err(AllowlistError::NotInTree(addr(9)))
        );
    }

    #[test]
    fn test_cross_tree_proof_rejected() {
        // Same address committed in two different trees: a proof generated
        // from one tree must not verify against the other's root.
        let tree_a = AllowlistTree::build(&addrs(&[1, 2])).unwrap();
        let tree_b = AllowlistTree::build(&addrs(&[1, 3, 4])).unwrap();

        let proof_a = tree_a.proof_for(&addr(1)).unwrap();
        assert!(verify_proof(&addr(1), &proof_a, &tree_a.root()));
        assert!(!verify_proof(&addr(1), &proof_a, &tree_b.root()));
    }

    #[test]
    fn test_tampered_proof_rejected() {
        let tree = AllowlistTree::build(&addrs(&[1, 2, 3, 4])).unwrap();
        let mut proof = tree.proof_for(&addr(3)).unwrap();
        assert!(verify_proof(&addr(3), &proof, &tree.root()));

        proof.siblings[0] = leaf_hash(&addr(9));
        assert!(!verify_proof(&addr(3), &proof, &tree.root()));
    }

    #[test]
    fn test_duplicates_collapse() {
        let deduped = AllowlistTree::build(&addrs(&[1, 2, 3])).unwrap();
        let repeated = AllowlistTree::build(&addrs(&[1, 2, 1, 3, 2])).unwrap();
        assert_eq!(deduped.root(), repeated.root());
        assert_eq!(repeated.len(), 3);
    }

    #[test]
    fn test_proof_serialization_roundtrip() {
        let tree = AllowlistTree::build(&addrs(&[1, 2, 3, 4, 5])).unwrap();
        let proof = tree.proof_for(&addr(4)).unwrap();
        let json = serde_json::to_string(&proof).unwrap();
        let back: MerkleProof = serde_json::from_str(&json).unwrap();
        assert_eq!(back, proof);
        assert!(verify_proof(&addr(4), &back, &tree.root()));
    }
}
