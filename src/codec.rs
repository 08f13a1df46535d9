//! Leaf codec: typed signatures, leaf values and the packed encoding they hash to.
//!
//! A leaf is an ordered list of [`LeafValue`]s, one per [`Parameter`] of a
//! [`Signature`]. Its hash is the keccak-256 digest of the values' packed ABI
//! encoding, byte for byte what `keccak256(abi.encodePacked(...))` produces
//! on-chain:
//!
//! | type        | encoding                                   |
//! |-------------|--------------------------------------------|
//! | `string`    | raw UTF-8 bytes                            |
//! | `bytes`     | raw bytes                                  |
//! | `bytesN`    | N bytes, left-justified, zero padded       |
//! | `uintN`     | N/8 bytes, big-endian                      |
//! | `address`   | 20 bytes                                   |
//! | `bool`      | one byte, 0 or 1                           |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use primitive_types::{H160, U256};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WhitelistError};
use crate::hashing::{DefaultMerkleHasher, Hash, MerkleHasher};

/// Named-field source record, keyed by parameter name
pub type Record = BTreeMap<String, LeafValue>;

/// A leaf value sequence, ordered like its signature
pub type Leaf = Vec<LeafValue>;

/// Solidity type of a leaf parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ParamType {
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `address`
    Address,
    /// `uintN`, holding the bit width
    Uint(usize),
    /// `bytesN`, holding the byte width
    FixedBytes(usize),
    /// `bytes`
    Bytes,
}

impl ParamType {
    /// Canonical zero value of the type, used to pad uneven whitelists
    pub fn default_value(&self) -> LeafValue {
        match self {
            ParamType::String => LeafValue::String(String::new()),
            ParamType::Bool => LeafValue::Bool(false),
            ParamType::Address => LeafValue::Address(H160::zero()),
            ParamType::Uint(_) => LeafValue::Uint(U256::zero()),
            ParamType::FixedBytes(size) => LeafValue::Bytes(vec![0; *size]),
            ParamType::Bytes => LeafValue::Bytes(vec![0; 32]),
        }
    }

    /// Append the packed encoding of `value` to `out`
    fn encode(&self, position: usize, value: &LeafValue, out: &mut Vec<u8>) -> Result<()> {
        match (self, value) {
            (ParamType::String, LeafValue::String(s)) => out.extend_from_slice(s.as_bytes()),
            (ParamType::Bool, LeafValue::Bool(b)) => out.push(u8::from(*b)),
            (ParamType::Address, LeafValue::Address(a)) => out.extend_from_slice(a.as_bytes()),
            (ParamType::Address, LeafValue::String(_) | LeafValue::Bytes(_)) => {
                let bytes = value.to_bytes(position)?;
                if bytes.len() != H160::len_bytes() {
                    return Err(WhitelistError::InvalidValue {
                        position,
                        reason: format!("address must be 20 bytes, got {}", bytes.len()),
                    });
                }
                out.extend_from_slice(&bytes);
            },
            (ParamType::Uint(bits), LeafValue::Uint(_) | LeafValue::String(_)) => {
                let n = value.to_uint(position)?;
                if n.bits() > *bits {
                    return Err(WhitelistError::InvalidValue {
                        position,
                        reason: format!("{} does not fit in uint{}", n, bits),
                    });
                }
                let mut word = [0u8; 32];
                n.to_big_endian(&mut word);
                out.extend_from_slice(&word[32 - bits / 8..]);
            },
            (ParamType::FixedBytes(size), LeafValue::Bytes(_) | LeafValue::String(_)) => {
                let bytes = value.to_bytes(position)?;
                let mut fixed = vec![0u8; *size];
                let len = bytes.len().min(*size);
                fixed[..len].copy_from_slice(&bytes[..len]);
                out.extend_from_slice(&fixed);
            },
            (ParamType::Bytes, LeafValue::Bytes(_) | LeafValue::String(_)) => {
                out.extend_from_slice(&value.to_bytes(position)?);
            },
            _ => {
                return Err(WhitelistError::TypeMismatch {
                    position,
                    expected: self.to_string(),
                    found: value.kind(),
                })
            },
        }
        Ok(())
    }
}

impl FromStr for ParamType {
    type Err = WhitelistError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || WhitelistError::UnknownType(s.to_string());
        let lower = s.trim().to_ascii_lowercase();
        let ty = match lower.as_str() {
            "string" => ParamType::String,
            "bool" => ParamType::Bool,
            "address" => ParamType::Address,
            "bytes" => ParamType::Bytes,
            "byte" => ParamType::FixedBytes(1),
            "uint" => ParamType::Uint(256),
            other => {
                if let Some(width) = other.strip_prefix("uint") {
                    let bits = parse_width(width).ok_or_else(unknown)?;
                    if bits == 0 || bits > 256 || bits % 8 != 0 {
                        return Err(unknown());
                    }
                    ParamType::Uint(bits)
                } else if let Some(width) = other.strip_prefix("bytes") {
                    let size = parse_width(width).ok_or_else(unknown)?;
                    if size == 0 || size > 32 {
                        return Err(unknown());
                    }
                    ParamType::FixedBytes(size)
                } else {
                    return Err(unknown());
                }
            },
        };
        Ok(ty)
    }
}

/// Decimal width as written in canonical type names: digits only, no leading zero
fn parse_width(width: &str) -> Option<usize> {
    if width.starts_with('0') || !width.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    width.parse().ok()
}

impl TryFrom<String> for ParamType {
    type Error = WhitelistError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ParamType> for String {
    fn from(ty: ParamType) -> Self {
        ty.to_string()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::String => write!(f, "string"),
            ParamType::Bool => write!(f, "bool"),
            ParamType::Address => write!(f, "address"),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::Bytes => write!(f, "bytes"),
        }
    }
}

/// One entry of a signature, in the usual ABI JSON shape `{ "name": .., "type": .. }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Field name, needed only when leaves are projected from records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Solidity type
    #[serde(rename = "type")]
    pub ty: ParamType,
}

impl Parameter {
    /// Unnamed parameter of the given type
    pub fn new(ty: &str) -> Result<Self> {
        Ok(Self { name: None, ty: ty.parse()? })
    }

    /// Named parameter of the given type
    pub fn named(name: impl Into<String>, ty: &str) -> Result<Self> {
        Ok(Self {
            name: Some(name.into()),
            ty: ty.parse()?,
        })
    }
}

/// Ordered parameters shared by every leaf of a tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(Vec<Parameter>);

impl Signature {
    /// Wrap already built parameters
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self(parameters)
    }

    /// Signature of unnamed parameters, e.g. `["address", "uint256"]`
    pub fn from_types(types: &[&str]) -> Result<Self> {
        types.iter().map(|ty| Parameter::new(ty)).collect::<Result<_>>().map(Self)
    }

    /// Signature of named parameters, e.g. `[("account", "address")]`
    pub fn from_named(fields: &[(&str, &str)]) -> Result<Self> {
        fields
            .iter()
            .map(|(name, ty)| Parameter::named(*name, ty))
            .collect::<Result<_>>()
            .map(Self)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a signature without parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameters in order
    pub fn parameters(&self) -> &[Parameter] {
        &self.0
    }

    /// Parameter types in order
    pub fn types(&self) -> impl Iterator<Item = ParamType> + '_ {
        self.0.iter().map(|p| p.ty)
    }
}

/// A raw leaf value.
///
/// Values are kept in the loose form the caller supplied them in; an address or
/// an integer may still be a string. They are checked against the parameter
/// type only when encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafValue {
    /// Text, or a hex/decimal rendering of another type
    String(String),
    /// Boolean
    Bool(bool),
    /// Unsigned integer of any width up to 256 bits
    Uint(U256),
    /// 20-byte account address
    Address(H160),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl LeafValue {
    fn kind(&self) -> &'static str {
        match self {
            LeafValue::String(_) => "string",
            LeafValue::Bool(_) => "bool",
            LeafValue::Uint(_) => "integer",
            LeafValue::Address(_) => "address",
            LeafValue::Bytes(_) => "byte array",
        }
    }

    fn to_bytes(&self, position: usize) -> Result<Vec<u8>> {
        match self {
            LeafValue::Bytes(bytes) => Ok(bytes.clone()),
            LeafValue::Address(address) => Ok(address.as_bytes().to_vec()),
            LeafValue::String(s) => {
                let digits = strip_hex_prefix(s).ok_or_else(|| WhitelistError::InvalidValue {
                    position,
                    reason: format!("`{}` is not 0x-prefixed hex", s),
                })?;
                hex::decode(digits).map_err(|e| WhitelistError::InvalidValue {
                    position,
                    reason: format!("`{}`: {}", s, e),
                })
            },
            _ => Err(WhitelistError::TypeMismatch {
                position,
                expected: "bytes".to_string(),
                found: self.kind(),
            }),
        }
    }

    fn to_uint(&self, position: usize) -> Result<U256> {
        let invalid = |s: &str| WhitelistError::InvalidValue {
            position,
            reason: format!("`{}` is not an unsigned integer", s),
        };
        match self {
            LeafValue::Uint(n) => Ok(*n),
            LeafValue::String(s) => match strip_hex_prefix(s) {
                Some("") => Err(invalid(s)),
                Some(digits) => U256::from_str_radix(digits, 16).map_err(|_| invalid(s)),
                None if s.is_empty() => Err(invalid(s)),
                None => U256::from_dec_str(s).map_err(|_| invalid(s)),
            },
            _ => Err(WhitelistError::TypeMismatch {
                position,
                expected: "uint".to_string(),
                found: self.kind(),
            }),
        }
    }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

impl fmt::Display for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafValue::String(s) => write!(f, "{}", s),
            LeafValue::Bool(b) => write!(f, "{}", b),
            LeafValue::Uint(n) => write!(f, "{}", n),
            LeafValue::Address(a) => write!(f, "0x{}", hex::encode(a.as_bytes())),
            LeafValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
        }
    }
}

impl From<&str> for LeafValue {
    fn from(s: &str) -> Self {
        LeafValue::String(s.to_string())
    }
}

impl From<String> for LeafValue {
    fn from(s: String) -> Self {
        LeafValue::String(s)
    }
}

impl From<bool> for LeafValue {
    fn from(b: bool) -> Self {
        LeafValue::Bool(b)
    }
}

impl From<U256> for LeafValue {
    fn from(n: U256) -> Self {
        LeafValue::Uint(n)
    }
}

impl From<H160> for LeafValue {
    fn from(a: H160) -> Self {
        LeafValue::Address(a)
    }
}

impl From<Vec<u8>> for LeafValue {
    fn from(b: Vec<u8>) -> Self {
        LeafValue::Bytes(b)
    }
}

impl From<&[u8]> for LeafValue {
    fn from(b: &[u8]) -> Self {
        LeafValue::Bytes(b.to_vec())
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LeafValue {
                fn from(n: $t) -> Self {
                    LeafValue::Uint(U256::from(n))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl TryFrom<&serde_json::Value> for LeafValue {
    type Error = WhitelistError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match value {
            Value::String(s) => Ok(LeafValue::String(s.clone())),
            Value::Bool(b) => Ok(LeafValue::Bool(*b)),
            Value::Number(n) => n
                .as_u64()
                .map(LeafValue::from)
                .ok_or_else(|| WhitelistError::InvalidSource(format!("{} is not an unsigned integer", n))),
            other => Err(WhitelistError::InvalidSource(format!("unsupported leaf value {}", other))),
        }
    }
}

/// Canonical zero value for a type name, matched case-insensitively
pub fn default_value_for_type(ty: &str) -> Result<LeafValue> {
    Ok(ty.parse::<ParamType>()?.default_value())
}

/// Leaf made of every parameter's zero value
pub fn default_leaf(signature: &Signature) -> Leaf {
    signature.types().map(|ty| ty.default_value()).collect()
}

/// Pick the values of `record` out in signature order
pub fn project_leaf(record: &Record, signature: &Signature) -> Result<Leaf> {
    if record.len() < signature.len() {
        return Err(WhitelistError::InsufficientFields {
            expected: signature.len(),
            found: record.len(),
        });
    }
    signature
        .parameters()
        .iter()
        .enumerate()
        .map(|(position, parameter)| {
            let name = parameter.name.as_deref().unwrap_or_default();
            record
                .get(name)
                .cloned()
                .ok_or_else(|| WhitelistError::MissingField {
                    position,
                    name: name.to_string(),
                })
        })
        .collect()
}

/// Packed ABI encoding of `values` under `signature`
pub fn encode_packed(values: &[LeafValue], signature: &Signature) -> Result<Vec<u8>> {
    if values.len() != signature.len() {
        return Err(WhitelistError::LengthMismatch {
            expected: signature.len(),
            found: values.len(),
        });
    }
    let mut out = Vec::new();
    for (position, (value, ty)) in values.iter().zip(signature.types()).enumerate() {
        ty.encode(position, value, &mut out)?;
    }
    Ok(out)
}

/// keccak-256 of the packed encoding of `values`
pub fn hash_leaf(values: &[LeafValue], signature: &Signature) -> Result<Hash> {
    Ok(DefaultMerkleHasher::hash(encode_packed(values, signature)?))
}
