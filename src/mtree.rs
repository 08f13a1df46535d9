//! A Merkle Tree is a hashed datastructure that allows the contruction of proofs.
//! a proof allows proving membership in the tree to a party that only knows the root hash.
//!
//! The tree is built once from an ordered list of leaf hashes and never changes
//! afterwards.

#![allow(type_alias_bounds)]

use log::trace;
use serde::{Deserialize, Serialize};

use crate::hashing::{DefaultMerkleHasher, MerkleHasher};
use crate::proof::{fold_proof, MerkleProof, ProofNode, Side};

const LOG_TARGET: &str = "wmerkletree::mtree";

/// How pairs and leaves are ordered while the tree is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeOptions {
    /// Order the two children of every node by ascending byte value before hashing
    pub sort_pairs: bool,
    /// Sort the leaf hashes by ascending byte value before building
    pub sort_leaves: bool,
}

/// Build merkle trees, get proofs, and verify proofs from leaf hashes
///
/// # Examples
///
/// ```
/// use wmerkletree::MerkleTree;
///
/// let data = vec!["foo", "bar", "baz"];
/// let tree = MerkleTree::new(&data);
/// let root = tree.root().unwrap();
/// let leaf = tree.leaves()[0];
/// let proof = tree.proof(leaf).unwrap();
/// assert!(tree.verify(&proof, leaf, root));
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MerkleTree<H: MerkleHasher = DefaultMerkleHasher> {
    layers: Vec<Layer<H>>,
    options: TreeOptions,
}

/// Layer in tree
type Layer<H: MerkleHasher> = Vec<H::MerkleHash>;

impl MerkleTree {
    /// Construct a MerkleTree by hashing a sequence of elements into leaves
    pub fn new<T: AsRef<[u8]>>(elements: &[T]) -> Self {
        let leaves = elements.iter().map(DefaultMerkleHasher::hash).collect();
        MerkleTree::from_leaves(leaves, TreeOptions::default())
    }
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Build a tree over already hashed leaves
    pub fn from_leaves(mut leaves: Layer<H>, options: TreeOptions) -> Self {
        if options.sort_leaves {
            leaves.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
        }
        let layers = Self::build_layers(leaves, options.sort_pairs);
        MerkleTree { layers, options }
    }

    /// return the root hash, None if the tree has no leaves
    pub fn root(&self) -> Option<H::MerkleHash> {
        self.layers.last()?.first().copied()
    }

    /// Leaf hashes in tree order
    pub fn leaves(&self) -> &[H::MerkleHash] {
        self.layers.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Options the tree was built with
    pub fn options(&self) -> TreeOptions {
        self.options
    }

    /// Return true if the leaf hash is in the tree
    pub fn contains(&self, hash: &H::MerkleHash) -> bool {
        self.index_of(hash).is_some()
    }

    /// Position of the first leaf equal to `hash`
    pub fn index_of(&self, hash: &H::MerkleHash) -> Option<usize> {
        self.leaves().iter().position(|leaf| leaf == hash)
    }

    /// Depth is the distance of the furthest node from the root
    /// ```text
    ///          0
    ///        /   \
    ///       1     1
    ///      / \   / \
    ///     2   2 2   2
    /// ```
    ///
    /// Returns None if tree is empty
    pub fn depth(&self) -> Option<usize> {
        match self.leaves().len() {
            0 => None,
            _ => Some(self.layers.len() - 1),
        }
    }

    /// Generate a proof for the first leaf equal to `hash`.
    /// Returns None if the hash is not a leaf of the tree
    pub fn proof(&self, hash: H::MerkleHash) -> Option<MerkleProof<H>> {
        self.proof_at(self.index_of(&hash)?)
    }

    /// Generate a proof for the leaf at `index` (tree order)
    pub fn proof_at(&self, index: usize) -> Option<MerkleProof<H>> {
        if index >= self.leaves().len() {
            return None;
        }
        let mut idx = index;
        let mut proof = Vec::with_capacity(self.layers.len() - 1);
        for layer in &self.layers[..self.layers.len() - 1] {
            // the last node of an odd layer was paired with itself
            let node = match idx % 2 == 0 {
                true => ProofNode {
                    hash: *layer.get(idx + 1).unwrap_or(&layer[idx]),
                    side: Side::Right,
                },
                false => ProofNode {
                    hash: layer[idx - 1],
                    side: Side::Left,
                },
            };
            proof.push(node);
            // integer halving gives the parent's index
            idx /= 2;
        }
        Some(proof)
    }

    /// Verify that `leaf` folds with `proof` into `root`, and that `root` is this tree's root
    pub fn verify(&self, proof: &MerkleProof<H>, leaf: H::MerkleHash, root: H::MerkleHash) -> bool {
        if self.root() != Some(root) {
            return false;
        }
        fold_proof::<H>(proof, leaf, self.options.sort_pairs) == root
    }

    /// Generate every layer from the leaves up to the root
    fn build_layers(leaves: Layer<H>, sort_pairs: bool) -> Vec<Layer<H>> {
        let mut layers = vec![leaves];
        loop {
            let current = &layers[layers.len() - 1];
            if current.len() <= 1 {
                break;
            }
            // an odd node out is paired with a copy of itself
            let layer: Layer<H> = current
                .chunks(2)
                .map(|pair| {
                    let left = &pair[0];
                    let right = pair.get(1).unwrap_or(left);
                    H::hash_pair(left, right, sort_pairs)
                })
                .collect();
            trace!(
                target: LOG_TARGET,
                "Built layer {} with {} node(s)",
                layers.len(),
                layer.len()
            );
            layers.push(layer);
        }
        layers
    }
}
