//! # relic-allowlist — Allowlist Commitments
//!
//! Builds and verifies the Merkle commitment that stands in for the
//! allowlist: the issuance system never stores the authorized address set,
//! only its 32-byte root. Operators build the tree off to the side, publish
//! the root, and hand each authorized address its inclusion proof.
//!
//! ## Hashing
//!
//! Domain-separated SHA-256:
//! - Leaf: `SHA256(0x00 || address_bytes)` over the 20 raw address bytes.
//! - Node: `SHA256(0x01 || lo || hi)` where `(lo, hi)` is the pair sorted
//!   byte-lexicographically.
//!
//! Sorting the pair before hashing makes verification insensitive to
//! left/right position, so a proof is just the ordered list of sibling
//! digests with no direction flags.
//!
//! ## Security Invariant
//!
//! Verification never errors: any proof that does not reconstruct the
//! stored root (wrong address, wrong tree, truncated or padded path,
//! zero root) is simply `false`.

pub mod hash;
pub mod proof;
pub mod tree;

pub use hash::{leaf_hash, node_hash};
pub use proof::{verify_proof, MerkleProof};
pub use tree::{AllowlistError, AllowlistTree};
