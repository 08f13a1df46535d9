//! Hashing for merkletree

use tiny_keccak::{Hasher, Keccak};

/// Allows the use of a custom hashing algorithm
pub trait MerkleHasher: Clone {
    /// type produced by hasher
    type MerkleHash: PartialEq + Eq + Clone + Copy + AsRef<[u8]> + std::fmt::Debug;

    /// data -> hash
    fn hash<T: AsRef<[u8]>>(data: T) -> Self::MerkleHash;

    /// Hash two sibling nodes into their parent.
    ///
    /// With `sort_pairs` the children are ordered by ascending byte value first,
    /// so the parent does not depend on which side each child sits on.
    fn hash_pair(left: &Self::MerkleHash, right: &Self::MerkleHash, sort_pairs: bool) -> Self::MerkleHash {
        let (first, second) = if sort_pairs && left.as_ref() > right.as_ref() {
            (right, left)
        } else {
            (left, right)
        };
        Self::hash([first.as_ref(), second.as_ref()].concat())
    }
}

/// Keccak-256 digest
pub type Hash = [u8; 32];

/// Default hasher for merkletree: keccak-256, as used by EVM verifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultMerkleHasher;

impl MerkleHasher for DefaultMerkleHasher {
    type MerkleHash = Hash;

    fn hash<T: AsRef<[u8]>>(data: T) -> Self::MerkleHash {
        let mut output = [0u8; 32];
        let mut hasher = Keccak::v256();
        hasher.update(data.as_ref());
        hasher.finalize(&mut output);
        output
    }
}

/// Render a digest as `0x`-prefixed lowercase hex.
pub fn to_hex<T: AsRef<[u8]>>(hash: T) -> String {
    format!("0x{}", hex::encode(hash.as_ref()))
}
