//! Merkle trees over whitelists of typed records.
//!
//! Each record is encoded like Solidity's `abi.encodePacked` and hashed with
//! keccak-256, so a contract holding only the root can check a membership proof
//! with `keccak256(abi.encodePacked(...))` and a sorted-pair fold.
//!
//! A parent node's hash is the concatenation of its children, by default in *ascending order.*
//! ```text
//! parent hash = hash(lower_child, higher_child)
//! ```
//!
//! An odd number of whitelist entries is padded with a leaf of zero values, and
//! an odd node at any higher level is paired with itself.
//!
//! # Examples
//!
//! ```
//! use wmerkletree::{Record, Signature, WhitelistTree};
//!
//! let signature = Signature::from_named(&[("account", "address"), ("amount", "uint256")]).unwrap();
//!
//! let mut record = Record::new();
//! record.insert("account".into(), "0x68AC5eE798Ac6F6B0A42F9b34753C9FD26dbdeA3".into());
//! record.insert("amount".into(), 1u64.into());
//!
//! // one record is padded to two leaves
//! let tree = WhitelistTree::new(vec![record], signature).unwrap();
//! assert_eq!(tree.leaf_count(), 2);
//!
//! let proof = tree.hex_proof(0usize).unwrap();
//! assert_eq!(proof, vec![tree.hex_leaf(1usize).unwrap()]);
//! println!("root {}", tree.hex_root());
//! ```
//!
//! The hash tree underneath can be used on its own, with a custom hasher:
//!
//! ```
//! use wmerkletree::{MerkleHasher, MerkleTree, TreeOptions};
//!
//! let tree = MerkleTree::<MyHasher>::from_leaves(vec![[1; 32], [2; 32]], TreeOptions::default());
//! assert_eq!(tree.root(), Some([0; 32]));
//!
//! #[derive(Clone)]
//! struct MyHasher;
//!
//! impl MerkleHasher for MyHasher {
//!     type MerkleHash = [u8; 32];
//!
//!     fn hash<T: AsRef<[u8]>>(_data: T) -> Self::MerkleHash {
//!         // do hashing and return result
//!         [0; 32]
//!     }
//! }
//! ```

#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod codec;
pub use codec::{
    default_leaf, default_value_for_type, encode_packed, hash_leaf, project_leaf, Leaf, LeafValue, ParamType,
    Parameter, Record, Signature,
};
pub mod error;
pub use error::{Result, WhitelistError};
pub mod hashing;
pub use hashing::{to_hex, DefaultMerkleHasher, Hash, MerkleHasher};
pub mod mtree;
pub use mtree::{MerkleTree, TreeOptions};
pub mod proof;
pub use proof::{MerkleProof, ProofNode, Side};
pub mod whitelist;
pub use whitelist::{LeafQuery, LeafSource, WhitelistOptions, WhitelistTree};
