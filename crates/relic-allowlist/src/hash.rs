//! Domain-separated SHA-256 for allowlist commitments.
//!
//! Leaves and interior nodes hash under distinct prefixes so a proof
//! element can never be replayed as a leaf (or vice versa). Interior
//! nodes sort their children before hashing, which is what lets
//! verification walk a proof without left/right direction flags.

use sha2::{Digest, Sha256};

use relic_core::{Address, Digest32};

/// Leaf domain prefix.
const LEAF_PREFIX: u8 = 0x00;

/// Interior node domain prefix.
const NODE_PREFIX: u8 = 0x01;

fn sha256_raw(input: &[u8]) -> Digest32 {
    let hash = Sha256::digest(input);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    Digest32::new(out)
}

/// Compute the leaf digest for an address: `SHA256(0x00 || address)`.
pub fn leaf_hash(address: &Address) -> Digest32 {
    let mut input = Vec::with_capacity(1 + address.as_bytes().len());
    input.push(LEAF_PREFIX);
    input.extend_from_slice(address.as_bytes());
    sha256_raw(&input)
}

/// Compute an interior node digest: `SHA256(0x01 || lo || hi)`.
///
/// The pair is sorted byte-lexicographically before concatenation, so
/// `node_hash(a, b) == node_hash(b, a)`.
pub fn node_hash(a: &Digest32, b: &Digest32) -> Digest32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut input = Vec::with_capacity(1 + 64);
    input.push(NODE_PREFIX);
    input.extend_from_slice(lo.as_bytes());
    input.extend_from_slice(hi.as_bytes());
    sha256_raw(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::new([n; 20])
    }

    #[test]
    fn test_leaf_hash_deterministic() {
        assert_eq!(leaf_hash(&addr(1)), leaf_hash(&addr(1)));
        assert_ne!(leaf_hash(&addr(1)), leaf_hash(&addr(2)));
    }

    #[test]
    fn test_node_hash_order_insensitive() {
        let a = leaf_hash(&addr(1));
        let b = leaf_hash(&addr(2));
        assert_eq!(node_hash(&a, &b), node_hash(&b, &a));
    }

    #[test]
    fn test_domain_separation() {
        // A node over identical children must differ from the leaf that
        // produced them; the prefixes keep the domains apart.
        let l = leaf_hash(&addr(7));
        assert_ne!(node_hash(&l, &l), l);
    }

    #[test]
    fn test_node_hash_depends_on_both_children() {
        let a = leaf_hash(&addr(1));
        let b = leaf_hash(&addr(2));
        let c = leaf_hash(&addr(3));
        assert_ne!(node_hash(&a, &b), node_hash(&a, &c));
    }
}
