//! Artifacts produced by `forge build`.

use std::path::Path;

use ethers::types::Bytes;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{solc::StorageLayout, Error, Result};

lazy_static! {
    static ref COMPILER_VERSION: Regex =
        Regex::new(r"\.\d+\.\d+\.\d+").expect("the compiler version regex is valid; qed");
}

/// A forge artifact, `out/<Name>.sol/<Name>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeArtifact {
    /// Contract ABI as emitted by the compiler.
    pub abi: serde_json::Value,

    /// Creation bytecode.
    pub bytecode: Bytecode,

    /// Runtime bytecode.
    pub deployed_bytecode: DeployedBytecode,

    /// Storage layout, present when forge is configured with `extra_output = ["storageLayout"]`.
    #[serde(default)]
    pub storage_layout: StorageLayout,
}

/// Creation bytecode of a forge artifact.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bytecode {
    pub object: Bytes,
    #[serde(default)]
    pub source_map: String,
    #[serde(default)]
    pub link_references: serde_json::Value,
}

/// Runtime bytecode of a forge artifact.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployedBytecode {
    pub object: Bytes,
    #[serde(default)]
    pub source_map: String,
    #[serde(default)]
    pub link_references: serde_json::Value,
    #[serde(default)]
    pub immutable_references: serde_json::Value,
}

impl ForgeArtifact {
    /// Read and parse an artifact file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| Error::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether the runtime bytecode has placeholders for immutable variables.
    pub fn has_immutable_references(&self) -> bool {
        match &self.deployed_bytecode.immutable_references {
            serde_json::Value::Object(refs) => !refs.is_empty(),
            serde_json::Value::Array(refs) => !refs.is_empty(),
            _ => false,
        }
    }
}

/// Strip the compiler version forge appends to artifact names when
/// several compiler versions were used, `Proxy.0.8.15` becomes `Proxy`.
pub fn sanitize_artifact_name(name: &str) -> String {
    COMPILER_VERSION.replace_all(name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{sanitize_artifact_name, ForgeArtifact};

    const ARTIFACT: &str = r#"{
        "abi": [{"type": "function", "name": "version", "inputs": [], "outputs": [{"name": "", "type": "string"}], "stateMutability": "view"}],
        "bytecode": {"object": "0x6080", "sourceMap": "1:2:3", "linkReferences": {}},
        "deployedBytecode": {
            "object": "0x60806040",
            "sourceMap": "4:5:6",
            "linkReferences": {},
            "immutableReferences": {"1234": [{"start": 10, "length": 32}]}
        },
        "storageLayout": {"storage": [], "types": {}}
    }"#;

    #[test]
    fn parses_artifact() {
        let artifact: ForgeArtifact = serde_json::from_str(ARTIFACT).unwrap();

        assert_eq!(artifact.bytecode.object.to_vec(), vec![0x60, 0x80]);
        assert_eq!(artifact.deployed_bytecode.source_map, "4:5:6");
        assert!(artifact.has_immutable_references());
        assert!(artifact.storage_layout.is_empty());
    }

    #[test]
    fn no_immutables() {
        let mut artifact: ForgeArtifact = serde_json::from_str(ARTIFACT).unwrap();

        artifact.deployed_bytecode.immutable_references = serde_json::json!({});
        assert!(!artifact.has_immutable_references());

        artifact.deployed_bytecode.immutable_references = serde_json::Value::Null;
        assert!(!artifact.has_immutable_references());
    }

    #[test]
    fn strips_compiler_versions() {
        assert_eq!(sanitize_artifact_name("Proxy.0.8.15"), "Proxy");
        assert_eq!(sanitize_artifact_name("Proxy"), "Proxy");
        assert_eq!(sanitize_artifact_name("ERC20.0.8.19"), "ERC20");
    }
}
