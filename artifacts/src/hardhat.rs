//! Hardhat compilation artifacts, build infos and deployments.
//!
//! The layout on disk is
//!
//! ```text
//! artifacts/
//!   build-info/<hash>.json
//!   contracts/L1/SystemConfig.sol/SystemConfig.json
//!   contracts/L1/SystemConfig.sol/SystemConfig.dbg.json
//! deployments/<network>/SystemConfig.json
//! ```

use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use ethers::types::{Address, Bytes, H256};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{solc::StorageLayout, Error, Result};

const ARTIFACT_FORMAT: &str = "hh-sol-artifact-1";

/// A hardhat contract artifact.
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(rename = "_format")]
    pub format: String,
    pub contract_name: String,
    pub source_name: String,
    pub abi: serde_json::Value,
    pub bytecode: Bytes,
    pub deployed_bytecode: DeployedBytecode,
    #[serde(default)]
    pub link_references: serde_json::Value,
    #[serde(default)]
    pub deployed_link_references: serde_json::Value,
}

/// Runtime bytecode is a plain hex string in hardhat artifacts and an
/// object with a source map in some plugin outputs.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeployedBytecode {
    Hex(Bytes),
    Object {
        object: Bytes,
        #[serde(default, rename = "sourceMap")]
        source_map: String,
    },
}

impl DeployedBytecode {
    /// The bytecode regardless of the representation.
    pub fn object(&self) -> &Bytes {
        match self {
            Self::Hex(object) | Self::Object { object, .. } => object,
        }
    }

    /// The source map if the artifact carries one.
    pub fn source_map(&self) -> Option<&str> {
        match self {
            Self::Object { source_map, .. } if !source_map.is_empty() => Some(source_map),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DebugFile {
    build_info: PathBuf,
}

/// The full compiler input and output a set of artifacts was built from.
#[allow(missing_docs)]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub id: String,
    pub solc_version: String,
    pub input: serde_json::Value,
    pub output: BuildInfoOutput,
}

/// Compiler output of a [`BuildInfo`].
#[derive(Debug, Clone, Deserialize)]
pub struct BuildInfoOutput {
    /// Compiled contracts keyed by source name and then contract name.
    #[serde(default)]
    pub contracts: BTreeMap<String, BTreeMap<String, CompilerContract>>,
}

/// A single contract of the compiler output.
#[allow(missing_docs)]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerContract {
    #[serde(default)]
    pub abi: serde_json::Value,
    #[serde(default)]
    pub evm: Evm,
    pub storage_layout: Option<StorageLayout>,
}

/// EVM related compiler output.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evm {
    #[serde(default)]
    pub deployed_bytecode: EvmDeployedBytecode,
}

/// Runtime bytecode section of the compiler output.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmDeployedBytecode {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub source_map: String,
    #[serde(default)]
    pub immutable_references: BTreeMap<String, serde_json::Value>,
}

/// A `hardhat-deploy` deployment record.
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    #[serde(skip)]
    pub name: String,
    pub address: Address,
    #[serde(default)]
    pub abi: serde_json::Value,
    pub transaction_hash: Option<H256>,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
    pub bytecode: Option<Bytes>,
    pub deployed_bytecode: Option<Bytes>,
}

struct IndexedArtifact {
    artifact: Arc<Artifact>,
    path: PathBuf,
}

/// An index over hardhat artifacts and deployments of a network.
pub struct Hardhat {
    network: String,
    artifacts: HashMap<String, IndexedArtifact>,
    deployments: HashMap<String, Arc<Deployment>>,
    build_infos: Mutex<HashMap<PathBuf, Arc<BuildInfo>>>,
}

impl std::fmt::Debug for Hardhat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hardhat")
            .field("network", &self.network)
            .field("artifacts", &self.artifacts.len())
            .field("deployments", &self.deployments.len())
            .finish()
    }
}

impl Hardhat {
    /// Index the artifacts and deployments under the given paths.
    ///
    /// # Arguments
    ///
    /// * `network`: Name of the network directory under each deployment path
    /// * `artifact_paths`: Hardhat `artifacts` directories
    /// * `deployment_paths`: `hardhat-deploy` `deployments` directories
    pub fn new<P: AsRef<Path>>(
        network: impl Into<String>,
        artifact_paths: &[P],
        deployment_paths: &[P],
    ) -> Result<Self> {
        let mut hardhat = Self {
            network: network.into(),
            artifacts: HashMap::new(),
            deployments: HashMap::new(),
            build_infos: Mutex::new(HashMap::new()),
        };

        for path in artifact_paths {
            hardhat.index_artifacts(path.as_ref())?;
        }

        for path in deployment_paths {
            hardhat.index_deployments(path.as_ref())?;
        }

        tracing::debug!(
            "indexed {} hardhat artifacts and {} deployments",
            hardhat.artifacts.len(),
            hardhat.deployments.len()
        );

        Ok(hardhat)
    }

    fn index_artifacts(&mut self, dir: &Path) -> Result<()> {
        for path in glob_json(dir, "**/*.json")? {
            if is_debug_file(&path) || is_build_info(&path) {
                continue;
            }

            let value: serde_json::Value = read_json(&path)?;
            if value.get("_format").and_then(|f| f.as_str()) != Some(ARTIFACT_FORMAT) {
                continue;
            }

            let artifact: Arc<Artifact> =
                Arc::new(
                    serde_json::from_value(value).map_err(|source| Error::ParseFile {
                        path: path.clone(),
                        source,
                    })?,
                );

            let fully_qualified = format!("{}:{}", artifact.source_name, artifact.contract_name);
            let name = artifact.contract_name.clone();

            self.artifacts.insert(
                fully_qualified,
                IndexedArtifact {
                    artifact: artifact.clone(),
                    path: path.clone(),
                },
            );

            if self.artifacts.contains_key(&name) {
                tracing::warn!("multiple artifacts named {name}, keeping the first one");
                continue;
            }
            self.artifacts
                .insert(name, IndexedArtifact { artifact, path });
        }

        Ok(())
    }

    fn index_deployments(&mut self, dir: &Path) -> Result<()> {
        let network_dir = dir.join(&self.network);
        if !network_dir.is_dir() {
            tracing::debug!("no deployments for {} in {}", self.network, dir.display());
            return Ok(());
        }

        for path in glob_json(&network_dir, "*.json")? {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let name = name.to_string();

            let mut deployment: Deployment = read_json(&path)?;
            deployment.name = name.clone();

            self.deployments.insert(name, Arc::new(deployment));
        }

        Ok(())
    }

    /// Network the deployments were read for.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Get an artifact by contract name or fully qualified `Source.sol:Name`.
    pub fn get_artifact(&self, name: &str) -> Result<Arc<Artifact>> {
        self.artifacts
            .get(name)
            .map(|indexed| indexed.artifact.clone())
            .ok_or_else(|| Error::ArtifactNotFound(name.to_string()))
    }

    /// Get the build info an artifact was produced from.
    pub fn get_build_info(&self, name: &str) -> Result<Arc<BuildInfo>> {
        let indexed = self
            .artifacts
            .get(name)
            .ok_or_else(|| Error::ArtifactNotFound(name.to_string()))?;

        let debug_path = debug_file_path(&indexed.path)
            .ok_or_else(|| Error::BuildInfoNotFound(name.to_string()))?;
        let debug_file: DebugFile = read_json(&debug_path)?;

        let build_info_path = match debug_path.parent() {
            Some(parent) => parent.join(&debug_file.build_info),
            None => debug_file.build_info,
        };

        let mut build_infos = self
            .build_infos
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(build_info) = build_infos.get(&build_info_path) {
            return Ok(build_info.clone());
        }

        let build_info: Arc<BuildInfo> = Arc::new(read_json(&build_info_path)?);
        build_infos.insert(build_info_path, build_info.clone());

        Ok(build_info)
    }

    /// Get the storage layout of a contract from its build info.
    pub fn get_storage_layout(&self, name: &str) -> Result<StorageLayout> {
        let artifact = self.get_artifact(name)?;
        let build_info = self.get_build_info(name)?;

        build_info
            .output
            .contracts
            .get(&artifact.source_name)
            .and_then(|contracts| contracts.get(&artifact.contract_name))
            .and_then(|contract| contract.storage_layout.clone())
            .ok_or_else(|| Error::StorageLayoutNotFound(name.to_string()))
    }

    /// Get a deployment by name.
    pub fn get_deployment(&self, name: &str) -> Result<Arc<Deployment>> {
        self.deployments
            .get(name)
            .cloned()
            .ok_or_else(|| Error::DeploymentNotFound(name.to_string()))
    }

    /// Whether the runtime bytecode of the contract references immutables.
    ///
    /// Interfaces sharing the contract's source file name are ignored.
    pub fn has_immutable_references(&self, name: &str) -> Result<bool> {
        let build_info = self.get_build_info(name)?;
        let source_suffix = format!("/{name}.sol");

        let found = build_info
            .output
            .contracts
            .iter()
            .filter(|(source, _)| source.contains(&source_suffix) && !source.contains("/interfaces/"))
            .flat_map(|(_, contracts)| contracts.values())
            .any(|contract| !contract.evm.deployed_bytecode.immutable_references.is_empty());

        Ok(found)
    }
}

fn glob_json(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir = dir
        .to_str()
        .ok_or_else(|| Error::NonUnicodePath(dir.to_path_buf()))?;

    let mut paths = glob::glob(&format!("{dir}/{pattern}"))?.collect::<std::result::Result<Vec<_>, _>>()?;
    paths.sort();

    Ok(paths)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| Error::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn is_debug_file(path: &Path) -> bool {
    path.to_str().is_some_and(|p| p.ends_with(".dbg.json"))
}

fn is_build_info(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == "build-info")
}

fn debug_file_path(artifact_path: &Path) -> Option<PathBuf> {
    let stem = artifact_path.file_stem()?.to_str()?;
    Some(artifact_path.with_file_name(format!("{stem}.dbg.json")))
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use ethers::types::Address;
    use pretty_assertions::assert_eq;

    use super::{DeployedBytecode, Hardhat};
    use crate::Error;

    const BUILD_INFO: &str = r#"{
        "id": "c0ffee",
        "solcVersion": "0.8.15",
        "input": {},
        "output": {
            "contracts": {
                "contracts/L1/SystemConfig.sol": {
                    "SystemConfig": {
                        "abi": [],
                        "evm": {"deployedBytecode": {"object": "6080", "sourceMap": "", "immutableReferences": {}}},
                        "storageLayout": {
                            "storage": [{"astId": 7, "contract": "contracts/L1/SystemConfig.sol:SystemConfig", "label": "overhead", "offset": 0, "slot": "101", "type": "t_uint256"}],
                            "types": {"t_uint256": {"encoding": "inplace", "label": "uint256", "numberOfBytes": "32"}}
                        }
                    }
                },
                "contracts/L1/interfaces/SystemConfig.sol": {
                    "ISystemConfig": {
                        "abi": [],
                        "evm": {"deployedBytecode": {"object": "", "immutableReferences": {"1": []}}}
                    }
                },
                "contracts/L1/L1CrossDomainMessenger.sol": {
                    "L1CrossDomainMessenger": {
                        "abi": [],
                        "evm": {"deployedBytecode": {"object": "6080", "immutableReferences": {"42": [{"start": 1, "length": 32}]}}},
                        "storageLayout": {"storage": [], "types": null}
                    }
                }
            }
        }
    }"#;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn artifact(name: &str, source: &str, deployed: &str) -> String {
        format!(
            r#"{{"_format": "hh-sol-artifact-1", "contractName": "{name}", "sourceName": "{source}",
                "abi": [], "bytecode": "0x6080", "deployedBytecode": {deployed},
                "linkReferences": {{}}, "deployedLinkReferences": {{}}}}"#
        )
    }

    fn fixture(root: &Path) {
        let artifacts = root.join("artifacts");

        write(&artifacts.join("build-info/c0ffee.json"), BUILD_INFO);

        let dir = artifacts.join("contracts/L1/SystemConfig.sol");
        write(
            &dir.join("SystemConfig.json"),
            &artifact("SystemConfig", "contracts/L1/SystemConfig.sol", r#""0x60806040""#),
        );
        write(
            &dir.join("SystemConfig.dbg.json"),
            r#"{"_format": "hh-sol-dbg-1", "buildInfo": "../../../build-info/c0ffee.json"}"#,
        );

        let dir = artifacts.join("contracts/L1/L1CrossDomainMessenger.sol");
        write(
            &dir.join("L1CrossDomainMessenger.json"),
            &artifact(
                "L1CrossDomainMessenger",
                "contracts/L1/L1CrossDomainMessenger.sol",
                r#"{"object": "0x6080", "sourceMap": "1:2:3"}"#,
            ),
        );
        write(
            &dir.join("L1CrossDomainMessenger.dbg.json"),
            r#"{"_format": "hh-sol-dbg-1", "buildInfo": "../../../build-info/c0ffee.json"}"#,
        );

        write(
            &root.join("deployments/DevnetL1/SystemConfigProxy.json"),
            r#"{"address": "0x229047fed2591dbec1eF1118d64F7aF3dB9EB290", "abi": [], "args": []}"#,
        );
    }

    #[test]
    fn reads_artifacts_and_layouts() {
        let root = tempfile::tempdir().unwrap();
        fixture(root.path());

        let hh = Hardhat::new(
            "DevnetL1",
            &[root.path().join("artifacts")],
            &[root.path().join("deployments")],
        )
        .unwrap();

        let artifact = hh.get_artifact("SystemConfig").unwrap();
        assert_eq!(artifact.source_name, "contracts/L1/SystemConfig.sol");
        assert_eq!(artifact.deployed_bytecode.object().to_vec(), vec![0x60, 0x80, 0x60, 0x40]);
        assert_eq!(artifact.deployed_bytecode.source_map(), None);

        let qualified = hh
            .get_artifact("contracts/L1/SystemConfig.sol:SystemConfig")
            .unwrap();
        assert_eq!(qualified.contract_name, "SystemConfig");

        let layout = hh.get_storage_layout("SystemConfig").unwrap();
        assert_eq!(layout.entry("overhead").unwrap().slot, 101.into());

        let messenger = hh.get_artifact("L1CrossDomainMessenger").unwrap();
        assert!(matches!(
            &messenger.deployed_bytecode,
            DeployedBytecode::Object { source_map, .. } if source_map == "1:2:3"
        ));
        assert!(hh.get_storage_layout("L1CrossDomainMessenger").unwrap().is_empty());
    }

    #[test]
    fn immutable_references_ignore_interfaces() {
        let root = tempfile::tempdir().unwrap();
        fixture(root.path());

        let hh = Hardhat::new(
            "DevnetL1",
            &[root.path().join("artifacts")],
            &[root.path().join("deployments")],
        )
        .unwrap();

        assert!(!hh.has_immutable_references("SystemConfig").unwrap());
        assert!(hh.has_immutable_references("L1CrossDomainMessenger").unwrap());
    }

    #[test]
    fn reads_deployments() {
        let root = tempfile::tempdir().unwrap();
        fixture(root.path());

        let hh = Hardhat::new(
            "DevnetL1",
            &[root.path().join("artifacts")],
            &[root.path().join("deployments")],
        )
        .unwrap();

        let deployment = hh.get_deployment("SystemConfigProxy").unwrap();
        assert_eq!(deployment.name, "SystemConfigProxy");
        assert_eq!(
            deployment.address,
            "0x229047fed2591dbec1eF1118d64F7aF3dB9EB290"
                .parse::<Address>()
                .unwrap()
        );

        assert!(matches!(
            hh.get_deployment("L2OutputOracle"),
            Err(Error::DeploymentNotFound(_))
        ));
    }

    #[test]
    fn unknown_contract() {
        let root = tempfile::tempdir().unwrap();
        fixture(root.path());

        let hh = Hardhat::new(
            "DevnetL1",
            &[root.path().join("artifacts")],
            &[root.path().join("deployments")],
        )
        .unwrap();

        assert!(matches!(
            hh.get_storage_layout("OptimismPortal"),
            Err(Error::ArtifactNotFound(name)) if name == "OptimismPortal"
        ));
    }
}
