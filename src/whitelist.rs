//! Whitelist Merkle tree: typed records in, root and membership proofs out.
//!
//! ```
//! use wmerkletree::{Leaf, Signature, WhitelistOptions, WhitelistTree};
//!
//! let signature = Signature::from_types(&["address", "uint256"]).unwrap();
//! let leaves: Vec<Leaf> = vec![
//!     vec!["0x68AC5eE798Ac6F6B0A42F9b34753C9FD26dbdeA3".into(), 1u64.into()],
//!     vec!["0xCf43D97Ed9EC1d458cA69551C021Bb157314E0d7".into(), 3u64.into()],
//! ];
//! let tree = WhitelistTree::build(leaves, signature, WhitelistOptions::default()).unwrap();
//! let proof = tree.hex_proof(0usize).unwrap();
//! assert_eq!(proof.len(), 1);
//! assert_eq!(tree.hex_root().len(), 66);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::codec::{default_leaf, hash_leaf, project_leaf, Leaf, LeafValue, Record, Signature};
use crate::error::{Result, WhitelistError};
use crate::hashing::{to_hex, DefaultMerkleHasher, Hash};
use crate::mtree::{MerkleTree, TreeOptions};
use crate::proof::{sibling_hashes, MerkleProof};

const LOG_TARGET: &str = "wmerkletree::whitelist";

/// Where the leaves of a tree come from. A tree is built from one kind only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafSource {
    /// Named-field records, projected through the signature's parameter names
    FromRecords(Vec<Record>),
    /// Value sequences already in signature order
    FromValues(Vec<Leaf>),
}

impl LeafSource {
    /// Number of source entries
    pub fn len(&self) -> usize {
        match self {
            LeafSource::FromRecords(records) => records.len(),
            LeafSource::FromValues(leaves) => leaves.len(),
        }
    }

    /// True when there are no source entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a JSON array of objects (records) or of arrays (value sequences).
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        let items = value
            .as_array()
            .ok_or_else(|| WhitelistError::InvalidSource("expected a JSON array".to_string()))?;
        match items.first() {
            None => Ok(LeafSource::FromValues(Vec::new())),
            Some(Value::Object(_)) => items
                .iter()
                .map(|item| match item {
                    Value::Object(fields) => fields
                        .iter()
                        .map(|(name, v)| LeafValue::try_from(v).map(|value| (name.clone(), value)))
                        .collect::<Result<Record>>(),
                    _ => Err(mixed_source()),
                })
                .collect::<Result<_>>()
                .map(LeafSource::FromRecords),
            Some(Value::Array(_)) => items
                .iter()
                .map(|item| match item {
                    Value::Array(values) => values.iter().map(LeafValue::try_from).collect::<Result<Leaf>>(),
                    _ => Err(mixed_source()),
                })
                .collect::<Result<_>>()
                .map(LeafSource::FromValues),
            Some(other) => Err(WhitelistError::InvalidSource(format!(
                "entries must be objects or arrays, got {}",
                other
            ))),
        }
    }

    fn into_leaves(self, signature: &Signature) -> Result<(Vec<Leaf>, Option<Vec<Record>>)> {
        match self {
            LeafSource::FromValues(leaves) => Ok((leaves, None)),
            LeafSource::FromRecords(records) => {
                let leaves = records
                    .iter()
                    .map(|record| project_leaf(record, signature))
                    .collect::<Result<_>>()?;
                Ok((leaves, Some(records)))
            },
        }
    }
}

fn mixed_source() -> WhitelistError {
    WhitelistError::InvalidSource("entries mix objects and arrays".to_string())
}

impl From<Vec<Record>> for LeafSource {
    fn from(records: Vec<Record>) -> Self {
        LeafSource::FromRecords(records)
    }
}

impl From<Vec<Leaf>> for LeafSource {
    fn from(leaves: Vec<Leaf>) -> Self {
        LeafSource::FromValues(leaves)
    }
}

/// Construction options. Deserializes from `{ "sortPairs": .., "sortLeaves": .., "throwOnUneven": .. }`
/// with any field omitted taking its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhitelistOptions {
    /// Hash every pair of siblings in ascending byte order, so proofs carry no sides
    pub sort_pairs: bool,
    /// Sort leaf hashes before building; positions in the tree then differ from input order
    pub sort_leaves: bool,
    /// Fail on an odd number of entries instead of appending a default leaf
    pub throw_on_uneven: bool,
}

impl Default for WhitelistOptions {
    fn default() -> Self {
        Self {
            sort_pairs: true,
            sort_leaves: false,
            throw_on_uneven: false,
        }
    }
}

impl From<WhitelistOptions> for TreeOptions {
    fn from(options: WhitelistOptions) -> Self {
        TreeOptions {
            sort_pairs: options.sort_pairs,
            sort_leaves: options.sort_leaves,
        }
    }
}

/// A leaf named either by its position in the input or by its values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafQuery<'a> {
    /// Position in input order, including the padding leaf
    Index(usize),
    /// Leaf values, hashed under the tree's signature
    Values(&'a [LeafValue]),
}

impl From<usize> for LeafQuery<'_> {
    fn from(index: usize) -> Self {
        LeafQuery::Index(index)
    }
}

impl<'a> From<&'a [LeafValue]> for LeafQuery<'a> {
    fn from(values: &'a [LeafValue]) -> Self {
        LeafQuery::Values(values)
    }
}

impl<'a> From<&'a Leaf> for LeafQuery<'a> {
    fn from(values: &'a Leaf) -> Self {
        LeafQuery::Values(values)
    }
}

/// Immutable Merkle tree over a whitelist.
#[derive(Debug, Clone)]
pub struct WhitelistTree {
    tree: MerkleTree,
    root: Hash,
    leaves: Vec<Leaf>,
    leaf_hashes: Vec<Hash>,
    source_records: Option<Vec<Record>>,
    signature: Signature,
    options: WhitelistOptions,
}

impl WhitelistTree {
    /// Build with default options
    pub fn new(source: impl Into<LeafSource>, signature: Signature) -> Result<Self> {
        Self::build(source, signature, WhitelistOptions::default())
    }

    /// Build a tree. Nothing is kept if any entry fails to encode.
    pub fn build(source: impl Into<LeafSource>, signature: Signature, options: WhitelistOptions) -> Result<Self> {
        let source = source.into();
        if source.is_empty() {
            return Err(WhitelistError::EmptyInput);
        }
        if signature.is_empty() {
            return Err(WhitelistError::EmptySignature);
        }

        let (mut leaves, source_records) = source.into_leaves(&signature)?;
        if leaves.len() % 2 != 0 {
            if options.throw_on_uneven {
                return Err(WhitelistError::UnevenWhitelist { count: leaves.len() });
            }
            debug!(
                target: LOG_TARGET,
                "Padding {} whitelist entries with a default leaf",
                leaves.len()
            );
            leaves.push(default_leaf(&signature));
        }

        let leaf_hashes = leaves
            .iter()
            .map(|leaf| hash_leaf(leaf, &signature))
            .collect::<Result<Vec<_>>>()?;
        let tree = MerkleTree::from_leaves(leaf_hashes.clone(), options.into());
        let root = tree.root().ok_or(WhitelistError::EmptyInput)?;
        debug!(
            target: LOG_TARGET,
            "Built whitelist tree of {} leaves, depth {:?}, root {}",
            leaf_hashes.len(),
            tree.depth(),
            to_hex(root)
        );

        Ok(Self {
            tree,
            root,
            leaves,
            leaf_hashes,
            source_records,
            signature,
            options,
        })
    }

    /// Root hash
    pub fn root(&self) -> Hash {
        self.root
    }

    /// Root hash as `0x` hex
    pub fn hex_root(&self) -> String {
        to_hex(self.root)
    }

    /// Hash of a leaf. Values need not be in the tree.
    pub fn hash_of_leaf<'a>(&self, leaf: impl Into<LeafQuery<'a>>) -> Result<Hash> {
        match leaf.into() {
            LeafQuery::Index(index) => {
                self.leaf_hashes
                    .get(index)
                    .copied()
                    .ok_or(WhitelistError::IndexOutOfRange {
                        index,
                        len: self.leaf_hashes.len(),
                    })
            },
            LeafQuery::Values(values) => hash_leaf(values, &self.signature),
        }
    }

    /// Leaf hash as `0x` hex
    pub fn hex_leaf<'a>(&self, leaf: impl Into<LeafQuery<'a>>) -> Result<String> {
        self.hash_of_leaf(leaf).map(to_hex)
    }

    /// Sibling hashes from the leaf level up to, not including, the root.
    ///
    /// Enough for a sorted-pair verifier; with `sort_pairs` disabled use
    /// [`WhitelistTree::positioned_proof`].
    pub fn proof<'a>(&self, leaf: impl Into<LeafQuery<'a>>) -> Result<Vec<Hash>> {
        self.positioned_proof(leaf).map(|proof| sibling_hashes(&proof))
    }

    /// Proof as `0x` hex strings
    pub fn hex_proof<'a>(&self, leaf: impl Into<LeafQuery<'a>>) -> Result<Vec<String>> {
        Ok(self.proof(leaf)?.into_iter().map(to_hex).collect())
    }

    /// Proof that also records on which side each sibling sits.
    ///
    /// An index names that exact leaf unless the leaves were sorted, in which
    /// case the first leaf with the same hash is used.
    pub fn positioned_proof<'a>(&self, leaf: impl Into<LeafQuery<'a>>) -> Result<MerkleProof<DefaultMerkleHasher>> {
        let query = leaf.into();
        let hash = self.hash_of_leaf(query)?;
        let proof = match query {
            LeafQuery::Index(index) if !self.options.sort_leaves => self.tree.proof_at(index),
            _ => self.tree.proof(hash),
        };
        proof.ok_or(WhitelistError::LeafNotFound)
    }

    /// Leaf value sequences in input order, padding leaf included
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Number of leaves, padding leaf included
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The records the tree was built from, if it was built from records
    pub fn source_records(&self) -> Option<&[Record]> {
        self.source_records.as_deref()
    }

    /// Signature every leaf is encoded with
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Options the tree was built with
    pub fn options(&self) -> WhitelistOptions {
        self.options
    }

    /// The underlying hash tree
    pub fn merkle_tree(&self) -> &MerkleTree {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::codec::default_value_for_type;
    use crate::hashing::MerkleHasher;
    use crate::proof::{fold_proof, Side};

    const ADDR1: &str = "0x68AC5eE798Ac6F6B0A42F9b34753C9FD26dbdeA3";
    const ADDR2: &str = "0xCf43D97Ed9EC1d458cA69551C021Bb157314E0d7";
    const ADDR3: &str = "0x8C6Dce95936c532f6d7e3f150b82D359b3938733";

    fn signature(types: &[&str]) -> Signature {
        Signature::from_types(types).unwrap()
    }

    fn reference_leaves() -> Vec<Leaf> {
        vec![
            vec![ADDR1.into(), 1u64.into()],
            vec![ADDR2.into(), 3u64.into()],
            vec![ADDR3.into(), 2u64.into()],
        ]
    }

    fn fold_sorted(leaf: Hash, proof: &[Hash]) -> Hash {
        proof
            .iter()
            .fold(leaf, |running, sibling| DefaultMerkleHasher::hash_pair(&running, sibling, true))
    }

    #[test]
    fn hashes_reference_leaf() {
        let tree = WhitelistTree::new(reference_leaves(), signature(&["address", "uint256"])).unwrap();
        let expected = "0x434b738482ef935ed552adc1472dbff44b1671673d7061b96c946880f3de9c15";
        assert_eq!(tree.hex_leaf(1usize).unwrap(), expected);
        assert_eq!(tree.hex_leaf(&reference_leaves()[1]).unwrap(), expected);
    }

    #[test]
    fn reference_root() {
        let tree = WhitelistTree::new(reference_leaves(), signature(&["address", "uint256"])).unwrap();
        assert_eq!(
            tree.hex_root(),
            "0xdac35965baae61d02d4dc70bb203aff54694a337ced3d486e3f3ff5ed7d0acc3"
        );
    }

    #[test]
    fn reference_proof() {
        let leaves: Vec<Leaf> = vec![
            vec![ADDR1.into(), 1u64.into(), true.into()],
            vec![ADDR2.into(), 3u64.into(), true.into()],
            vec![ADDR3.into(), 2u64.into(), false.into()],
        ];
        let tree = WhitelistTree::new(leaves.clone(), signature(&["address", "uint256", "bool"])).unwrap();
        assert_eq!(
            tree.hex_proof(&leaves[1]).unwrap(),
            vec![
                "0x3fe7670925e8ad8766b6e2e8c398d69c341c18f6e224cd59313b1cd56f9d8bb7",
                "0x52dc182ef0157bfbd62f3ece237ca9bd52d942018b00284d30c4afdd91c94623",
            ]
        );
        assert_eq!(tree.hex_proof(1usize).unwrap(), tree.hex_proof(&leaves[1]).unwrap());
    }

    #[test]
    fn sort_leaves_keeps_reference_pairs() {
        // sorting the padded reference leaves keeps the same two pairs together
        let sig = signature(&["address", "uint256"]);
        let plain = WhitelistTree::new(reference_leaves(), sig.clone()).unwrap();
        let sorted = WhitelistTree::build(reference_leaves(), sig, WhitelistOptions {
            sort_leaves: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(plain.root(), sorted.root());
        assert_ne!(plain.merkle_tree().leaves(), sorted.merkle_tree().leaves());

        // lookups by index still follow input order
        for i in 0..plain.leaf_count() {
            assert_eq!(plain.hash_of_leaf(i).unwrap(), sorted.hash_of_leaf(i).unwrap());
            assert_eq!(fold_sorted(sorted.hash_of_leaf(i).unwrap(), &sorted.proof(i).unwrap()), sorted.root());
        }
    }

    #[test]
    fn sort_leaves_changes_root_of_unsorted_pairs() {
        let sig = signature(&["address", "uint256"]);
        let unsorted_pairs = WhitelistOptions {
            sort_pairs: false,
            ..Default::default()
        };
        let plain = WhitelistTree::build(reference_leaves(), sig.clone(), unsorted_pairs).unwrap();
        let sorted = WhitelistTree::build(reference_leaves(), sig, WhitelistOptions {
            sort_leaves: true,
            ..unsorted_pairs
        })
        .unwrap();
        assert_ne!(plain.root(), sorted.root());

        for i in 0..plain.leaf_count() {
            let leaf = sorted.hash_of_leaf(i).unwrap();
            assert_eq!(plain.hash_of_leaf(i).unwrap(), leaf);
            let proof = sorted.positioned_proof(i).unwrap();
            assert_eq!(fold_proof::<DefaultMerkleHasher>(&proof, leaf, false), sorted.root());
        }
    }

    #[test]
    fn index_proof_of_duplicate_leaf_has_its_own_sides() {
        let leaves: Vec<Leaf> = vec![
            vec![ADDR1.into(), 1u64.into()],
            vec![ADDR1.into(), 1u64.into()],
            vec![ADDR2.into(), 3u64.into()],
            vec![ADDR3.into(), 2u64.into()],
        ];
        let options = WhitelistOptions {
            sort_pairs: false,
            ..Default::default()
        };
        let tree = WhitelistTree::build(leaves, signature(&["address", "uint256"]), options).unwrap();
        let first = tree.positioned_proof(0usize).unwrap();
        let second = tree.positioned_proof(1usize).unwrap();
        assert_eq!(first[0].side, Side::Right);
        assert_eq!(second[0].side, Side::Left);
        let leaf = tree.hash_of_leaf(1usize).unwrap();
        assert_eq!(fold_proof::<DefaultMerkleHasher>(&second, leaf, false), tree.root());
    }

    #[test]
    fn pads_uneven_whitelist_with_default_leaf() {
        let sig = signature(&["address", "uint256"]);
        let tree = WhitelistTree::new(reference_leaves(), sig.clone()).unwrap();
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.leaves()[3], default_leaf(&sig));
        assert_eq!(
            tree.leaves()[3],
            vec![default_value_for_type("address").unwrap(), default_value_for_type("uint256").unwrap()]
        );

        // the padding leaf is a real leaf
        let padding = tree.hash_of_leaf(3usize).unwrap();
        assert_eq!(padding, hash_leaf(&default_leaf(&sig), &sig).unwrap());
        assert_eq!(fold_sorted(padding, &tree.proof(3usize).unwrap()), tree.root());
    }

    #[test]
    fn even_whitelist_is_not_padded() {
        let mut leaves = reference_leaves();
        leaves.truncate(2);
        let tree = WhitelistTree::new(leaves, signature(&["address", "uint256"])).unwrap();
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn throw_on_uneven() {
        let result = WhitelistTree::build(reference_leaves(), signature(&["address", "uint256"]), WhitelistOptions {
            throw_on_uneven: true,
            ..Default::default()
        });
        assert_eq!(result.unwrap_err(), WhitelistError::UnevenWhitelist { count: 3 });
    }

    #[test]
    fn rejects_empty_input() {
        let empty: Vec<Leaf> = vec![];
        assert_eq!(
            WhitelistTree::new(empty, signature(&["address"])).unwrap_err(),
            WhitelistError::EmptyInput
        );
        assert_eq!(
            WhitelistTree::new(reference_leaves(), Signature::default()).unwrap_err(),
            WhitelistError::EmptySignature
        );
    }

    #[test]
    fn rejects_leaves_shorter_than_signature() {
        let leaves: Vec<Leaf> = vec![
            vec![ADDR1.into(), true.into()],
            vec![ADDR2.into(), true.into()],
            vec![ADDR3.into(), false.into()],
        ];
        assert_eq!(
            WhitelistTree::new(leaves, signature(&["address", "uint256", "bool"])).unwrap_err(),
            WhitelistError::LengthMismatch { expected: 3, found: 2 }
        );
    }

    #[test]
    fn proof_of_unknown_leaf() {
        let tree = WhitelistTree::new(reference_leaves(), signature(&["address", "uint256"])).unwrap();
        let stranger: Leaf = vec![ADDR1.into(), 2u64.into()];
        assert!(tree.hash_of_leaf(&stranger).is_ok());
        assert_eq!(tree.proof(&stranger).unwrap_err(), WhitelistError::LeafNotFound);
        assert_eq!(
            tree.proof(4usize).unwrap_err(),
            WhitelistError::IndexOutOfRange { index: 4, len: 4 }
        );
    }

    #[test]
    fn builds_from_records() {
        let sig = Signature::from_named(&[("account", "address"), ("amount", "uint256")]).unwrap();
        let records: Vec<Record> = reference_leaves()
            .into_iter()
            .map(|leaf| {
                let mut record = Record::new();
                record.insert("account".to_string(), leaf[0].clone());
                record.insert("amount".to_string(), leaf[1].clone());
                record.insert("tier".to_string(), "gold".into());
                record
            })
            .collect();
        let from_records = WhitelistTree::new(records.clone(), sig.clone()).unwrap();
        let from_values = WhitelistTree::new(reference_leaves(), sig).unwrap();
        assert_eq!(from_records.root(), from_values.root());
        assert_eq!(from_records.source_records(), Some(records.as_slice()));
        assert_eq!(from_values.source_records(), None);
    }

    #[test]
    fn records_missing_a_field_abort_construction() {
        let sig = Signature::from_named(&[("account", "address"), ("amount", "uint256")]).unwrap();
        let mut record = Record::new();
        record.insert("account".to_string(), ADDR1.into());
        record.insert("amt".to_string(), 1u64.into());
        assert_eq!(
            WhitelistTree::new(vec![record], sig).unwrap_err(),
            WhitelistError::MissingField {
                position: 1,
                name: "amount".to_string()
            }
        );
    }

    #[test]
    fn source_from_json() {
        let sig: Signature =
            serde_json::from_str(r#"[{"name":"a","type":"address"},{"name":"b","type":"uint256"}]"#).unwrap();
        let records = serde_json::json!([{ "a": ADDR1, "b": 1 }, { "a": ADDR2, "b": 3 }]);
        let source = LeafSource::from_json(&records).unwrap();
        match &source {
            LeafSource::FromRecords(records) => {
                assert_eq!(
                    project_leaf(&records[0], &sig).unwrap(),
                    vec![LeafValue::from(ADDR1), LeafValue::from(1u64)]
                );
            },
            other => panic!("unexpected source {:?}", other),
        }

        let arrays = serde_json::json!([[ADDR1, 1], [ADDR2, 3]]);
        let from_arrays = WhitelistTree::new(LeafSource::from_json(&arrays).unwrap(), sig.clone()).unwrap();
        let from_records = WhitelistTree::new(source, sig).unwrap();
        assert_eq!(from_arrays.root(), from_records.root());

        let mixed = serde_json::json!([[ADDR1, 1], { "a": ADDR2, "b": 3 }]);
        assert!(matches!(
            LeafSource::from_json(&mixed),
            Err(WhitelistError::InvalidSource(_))
        ));
        assert!(matches!(
            LeafSource::from_json(&serde_json::json!({ "a": ADDR1 })),
            Err(WhitelistError::InvalidSource(_))
        ));
    }

    #[test]
    fn options_from_json() {
        let options: WhitelistOptions = serde_json::from_str(r#"{"sortLeaves":true}"#).unwrap();
        assert_eq!(options, WhitelistOptions {
            sort_pairs: true,
            sort_leaves: true,
            throw_on_uneven: false,
        });
        let options: WhitelistOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, WhitelistOptions::default());
    }

    #[test]
    fn unsorted_pairs_need_positions() {
        let sig = signature(&["address", "uint256"]);
        let options = WhitelistOptions {
            sort_pairs: false,
            ..Default::default()
        };
        let tree = WhitelistTree::build(reference_leaves(), sig, options).unwrap();
        for i in 0..tree.leaf_count() {
            let proof = tree.positioned_proof(i).unwrap();
            let leaf = tree.hash_of_leaf(i).unwrap();
            assert_eq!(fold_proof::<DefaultMerkleHasher>(&proof, leaf, false), tree.root());
        }
    }

    #[test]
    fn shared_across_threads() {
        let tree = WhitelistTree::new(reference_leaves(), signature(&["address", "uint256"])).unwrap();
        let expected: Vec<_> = (0..tree.leaf_count()).map(|i| tree.proof(i).unwrap()).collect();
        std::thread::scope(|s| {
            for (i, proof) in expected.iter().enumerate() {
                let tree = &tree;
                s.spawn(move || assert_eq!(&tree.proof(i).unwrap(), proof));
            }
        });
    }

    fn arb_leaves() -> impl Strategy<Value = Vec<Leaf>> {
        prop::collection::vec((any::<[u8; 20]>(), any::<u64>(), any::<bool>()), 1..40).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(account, amount, flag)| vec![account.to_vec().into(), amount.into(), flag.into()])
                .collect()
        })
    }

    proptest! {
        #[test]
        fn every_proof_folds_to_root(leaves in arb_leaves(), sort_leaves in any::<bool>()) {
            let sig = signature(&["address", "uint64", "bool"]);
            let options = WhitelistOptions { sort_leaves, ..Default::default() };
            let tree = WhitelistTree::build(leaves.clone(), sig.clone(), options).unwrap();
            prop_assert_eq!(tree.leaf_count(), leaves.len() + leaves.len() % 2);
            for i in 0..tree.leaf_count() {
                let proof = tree.proof(i).unwrap();
                prop_assert_eq!(fold_sorted(tree.hash_of_leaf(i).unwrap(), &proof), tree.root());
            }

            let again = WhitelistTree::build(leaves, sig, options).unwrap();
            prop_assert_eq!(again.root(), tree.root());
            for i in 0..tree.leaf_count() {
                prop_assert_eq!(again.proof(i).unwrap(), tree.proof(i).unwrap());
            }
        }
    }
}
