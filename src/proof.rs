//! Data types for merkle proofs

use crate::hashing::MerkleHasher;

/// Chain of siblings up to the root, leaf level first
pub type MerkleProof<H> = Vec<ProofNode<H>>;

/// element hash and side of node
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ProofNode<H: MerkleHasher> {
    /// The nodes hash
    pub hash: H::MerkleHash,
    /// Left of Right child of parent node
    pub side: Side,
}

/// Left or Right child of a parent
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    /// Left sibling
    Left,
    /// Right sibling
    Right,
}

/// Drop the side information, leaving the bare sibling hashes a sorted-pair
/// verifier consumes.
pub fn sibling_hashes<H: MerkleHasher>(proof: &MerkleProof<H>) -> Vec<H::MerkleHash> {
    proof.iter().map(|node| node.hash).collect()
}

/// Fold a leaf hash with its siblings up to a root.
///
/// `sort_pairs` must match the option the tree was built with. When it is set
/// the recorded side is ignored.
pub fn fold_proof<H: MerkleHasher>(
    proof: &MerkleProof<H>,
    leaf: H::MerkleHash,
    sort_pairs: bool,
) -> H::MerkleHash {
    proof.iter().fold(leaf, |running, node| match node.side {
        Side::Left => H::hash_pair(&node.hash, &running, sort_pairs),
        Side::Right => H::hash_pair(&running, &node.hash, sort_pairs),
    })
}
