//! The storage layout as emitted by `solc` with `storageLayout` output selection.

use std::collections::BTreeMap;

use ethers::types::U256;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A description of how the persistent state variables of a contract
/// are assigned to storage slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLayout {
    /// State variables in declaration order.
    pub storage: Vec<StorageLayoutEntry>,

    /// Type descriptions keyed by their type identifier.
    ///
    /// solc emits `null` here for contracts without storage.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub types: BTreeMap<String, StorageLayoutType>,
}

/// A single state variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutEntry {
    /// Id of the declaration in the compiler AST.
    pub ast_id: u64,

    /// Fully qualified name of the contract declaring the variable.
    pub contract: String,

    /// Name of the variable.
    pub label: String,

    /// Offset in bytes within the slot.
    pub offset: u64,

    /// Storage slot of the variable.
    #[serde(with = "decimal_u256")]
    pub slot: U256,

    /// Identifier of the variable type, a key into [`StorageLayout::types`].
    #[serde(rename = "type")]
    pub ty: String,
}

/// A description of a type used by the storage layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutType {
    /// One of `inplace`, `mapping`, `dynamic_array` or `bytes`.
    pub encoding: String,

    /// Canonical type name.
    pub label: String,

    /// Number of used bytes.
    #[serde(with = "decimal_u64")]
    pub number_of_bytes: u64,

    /// Key type of a mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Value type of a mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Element type of an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Members of a struct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<StorageLayoutEntry>>,
}

impl StorageLayout {
    /// Parse a layout from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find the state variable with a given label.
    pub fn entry(&self, label: &str) -> Result<&StorageLayoutEntry> {
        self.storage
            .iter()
            .find(|entry| entry.label == label)
            .ok_or_else(|| Error::EntryNotFound(label.to_string()))
    }

    /// Find the description of a type by its identifier.
    pub fn type_of(&self, name: &str) -> Result<&StorageLayoutType> {
        self.types
            .get(name)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))
    }

    /// `true` if the layout has no state variables.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, StorageLayoutType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

// solc encodes slots as decimal strings, too large for a JSON number.
mod decimal_u256 {
    use ethers::types::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_dec_str(&s).map_err(|e| D::Error::custom(format!("invalid slot {s}: {e}")))
    }
}

mod decimal_u64 {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| D::Error::custom(format!("invalid number of bytes {s}: {e}")))
    }
}
