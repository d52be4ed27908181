//! Lookup of storage layouts and deployed bytecode by contract name.
//!
//! The embedded table comes from the modules generated by `bindgen`.
//! Layouts missing from the table (or empty in it) are loaded from hardhat
//! build artifacts and cached for the lifetime of the process.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use artifacts::{hardhat::Hardhat, solc::StorageLayout};
use auto_impl::auto_impl;
use envconfig::Envconfig;
use ethers::types::Bytes;
use lazy_static::lazy_static;

use crate::{generated, metrics::BINDINGS_METRICS, Error, Result};

lazy_static! {
    static ref REGISTRY: Registry<HardhatSource> =
        Registry::new(generated::CONTRACTS.iter().copied(), HardhatSource::from_env());
}

/// Compile-time metadata of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractMetadata {
    /// Contract name.
    pub name: &'static str,

    /// JSON of the canonicalized storage layout.
    pub storage_layout_json: &'static str,

    /// Hex of the runtime bytecode.
    pub deployed_bin: &'static str,

    /// Source map of the runtime bytecode, generated for selected contracts only.
    pub deployed_source_map: Option<&'static str>,

    /// Whether the runtime bytecode has placeholders for immutables.
    pub has_immutable_references: bool,
}

/// Somewhere to load storage layouts from when they are not embedded.
#[auto_impl(&, Arc, Box)]
pub trait LayoutSource {
    /// Load the storage layout of a contract.
    fn storage_layout(&self, name: &str) -> Result<StorageLayout>;
}

/// Location of hardhat artifacts used as a fallback for storage layouts.
#[derive(Envconfig, Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Comma-separated hardhat `artifacts` directories.
    #[envconfig(from = "OP_BINDINGS_HARDHAT_ARTIFACTS")]
    pub hardhat_artifacts: Option<String>,

    /// Comma-separated `hardhat-deploy` `deployments` directories.
    #[envconfig(from = "OP_BINDINGS_HARDHAT_DEPLOYMENTS")]
    pub hardhat_deployments: Option<String>,

    /// Network name of the deployments.
    #[envconfig(from = "OP_BINDINGS_HARDHAT_NETWORK", default = "DevnetL1")]
    pub hardhat_network: String,
}

fn split_paths(paths: &Option<String>) -> Vec<PathBuf> {
    paths
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// A [`LayoutSource`] reading hardhat artifacts.
///
/// The artifacts are indexed on the first load.
#[derive(Debug)]
pub struct HardhatSource {
    config: RegistryConfig,
    hardhat: Mutex<Option<Arc<Hardhat>>>,
}

impl HardhatSource {
    /// Create a new source from a config.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            hardhat: Mutex::new(None),
        }
    }

    /// Create a new source configured from the environment.
    pub fn from_env() -> Self {
        let config = RegistryConfig::init_from_env().unwrap_or_else(|e| {
            tracing::warn!("Invalid registry configuration, hardhat fallback disabled: {e}");
            RegistryConfig::default()
        });

        Self::new(config)
    }

    fn hardhat(&self, name: &str) -> Result<Arc<Hardhat>> {
        let mut hardhat = self.hardhat.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(hardhat) = hardhat.as_ref() {
            return Ok(hardhat.clone());
        }

        let artifact_paths = split_paths(&self.config.hardhat_artifacts);
        if artifact_paths.is_empty() {
            return Err(Error::NoArtifactSource(name.to_string()));
        }

        tracing::info!("Loading artifacts from: {artifact_paths:?}");

        let loaded = Arc::new(Hardhat::new(
            self.config.hardhat_network.as_str(),
            &artifact_paths,
            &split_paths(&self.config.hardhat_deployments),
        )?);
        *hardhat = Some(loaded.clone());

        Ok(loaded)
    }
}

impl LayoutSource for HardhatSource {
    fn storage_layout(&self, name: &str) -> Result<StorageLayout> {
        Ok(self.hardhat(name)?.get_storage_layout(name)?)
    }
}

/// Storage layouts and deployed bytecode by contract name.
pub struct Registry<S> {
    contracts: HashMap<&'static str, ContractMetadata>,
    layouts: RwLock<HashMap<String, Arc<StorageLayout>>>,
    source: S,
}

impl<S: LayoutSource> Registry<S> {
    /// Create a registry over a table of contracts.
    ///
    /// # Arguments
    ///
    /// * `contracts`: Embedded contract metadata
    /// * `source`: Where to load layouts the table does not have
    pub fn new(contracts: impl IntoIterator<Item = ContractMetadata>, source: S) -> Self {
        Self {
            contracts: contracts.into_iter().map(|c| (c.name, c)).collect(),
            layouts: RwLock::new(HashMap::new()),
            source,
        }
    }

    /// Names of the contracts in the embedded table.
    pub fn contract_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.contracts.keys().copied()
    }

    fn cached_layout(&self, name: &str) -> Option<Arc<StorageLayout>> {
        self.layouts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .filter(|layout| !layout.is_empty())
            .cloned()
    }

    fn cache_layout(&self, name: &str, layout: StorageLayout) -> Arc<StorageLayout> {
        let layout = Arc::new(layout);

        self.layouts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), layout.clone());

        layout
    }

    /// Get the storage layout of a contract.
    ///
    /// A layout with no entries counts as missing and is loaded from the
    /// [`LayoutSource`]. A failed load leaves the cache untouched.
    pub fn get_storage_layout(&self, name: &str) -> Result<Arc<StorageLayout>> {
        if let Some(layout) = self.cached_layout(name) {
            tracing::debug!("Using cached storage layout for {name}");
            BINDINGS_METRICS.layout_cache_hits.inc();
            return Ok(layout);
        }

        if let Some(metadata) = self.contracts.get(name) {
            let layout: StorageLayout = serde_json::from_str(metadata.storage_layout_json)?;

            if !layout.is_empty() {
                BINDINGS_METRICS.layout_cache_hits.inc();
                return Ok(self.cache_layout(name, layout));
            }
        }

        BINDINGS_METRICS.layout_cache_misses.inc();

        let latency = BINDINGS_METRICS.layout_load.start();
        let layout = self
            .source
            .storage_layout(name)
            .map_err(|e| {
                tracing::warn!("Failed to find storage layout for {name}: {e}");
                Error::StorageLayout {
                    name: name.to_string(),
                    source: Box::new(e),
                }
            })?;
        latency.observe();

        tracing::info!(
            "Successfully retrieved and cached storage layout for {name} with {} entries",
            layout.storage.len()
        );

        Ok(self.cache_layout(name, layout))
    }

    /// Get the decoded runtime bytecode of a contract.
    pub fn get_deployed_bytecode(&self, name: &str) -> Result<Bytes> {
        let bin = self
            .contracts
            .get(name)
            .map(|metadata| metadata.deployed_bin)
            .filter(|bin| !bin.is_empty())
            .ok_or_else(|| Error::DeployedBytecodeNotFound(name.to_string()))?;

        if !is_hex(bin) {
            return Err(Error::InvalidDeployedBytecode(name.to_string()));
        }

        let bytes = hex::decode(bin.strip_prefix("0x").unwrap_or(bin))
            .map_err(|_| Error::InvalidDeployedBytecode(name.to_string()))?;

        Ok(bytes.into())
    }

    /// Get the source map of the runtime bytecode if one was generated.
    pub fn get_deployed_source_map(&self, name: &str) -> Option<&'static str> {
        self.contracts
            .get(name)
            .and_then(|metadata| metadata.deployed_source_map)
    }

    /// Whether the runtime bytecode of a contract references immutables,
    /// `None` for contracts not in the table.
    pub fn has_immutable_references(&self, name: &str) -> Option<bool> {
        self.contracts
            .get(name)
            .map(|metadata| metadata.has_immutable_references)
    }
}

/// Whether the string is even-length hex with an optional `0x` prefix.
///
/// The length is checked before the prefix is stripped.
pub fn is_hex(s: &str) -> bool {
    if s.len() % 2 != 0 {
        return false;
    }

    s.strip_prefix("0x")
        .unwrap_or(s)
        .bytes()
        .all(|c| c.is_ascii_hexdigit())
}

/// Get the storage layout of a contract from the process-wide registry.
pub fn get_storage_layout(name: &str) -> Result<Arc<StorageLayout>> {
    REGISTRY.get_storage_layout(name)
}

/// Get the runtime bytecode of a contract from the process-wide registry.
pub fn get_deployed_bytecode(name: &str) -> Result<Bytes> {
    REGISTRY.get_deployed_bytecode(name)
}

/// Get the runtime bytecode source map of a contract from the process-wide registry.
pub fn get_deployed_source_map(name: &str) -> Option<&'static str> {
    REGISTRY.get_deployed_source_map(name)
}

/// Whether a contract of the process-wide registry references immutables.
pub fn has_immutable_references(name: &str) -> Option<bool> {
    REGISTRY.has_immutable_references(name)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use artifacts::solc::StorageLayout;
    use pretty_assertions::assert_eq;

    use super::{is_hex, ContractMetadata, LayoutSource, Registry};
    use crate::{Error, Result};

    const GAS_LIMIT_LAYOUT: &str = r#"{
        "storage": [{"astId": 1000, "contract": "src/L1/SystemConfig.sol:SystemConfig", "label": "gasLimit", "offset": 0, "slot": "104", "type": "t_uint64"}],
        "types": {"t_uint64": {"encoding": "inplace", "label": "uint64", "numberOfBytes": "8"}}
    }"#;

    const CONTRACTS: [ContractMetadata; 4] = [
        ContractMetadata {
            name: "SystemConfig",
            storage_layout_json: GAS_LIMIT_LAYOUT,
            deployed_bin: "0x6080604052",
            deployed_source_map: Some("1:2:3"),
            has_immutable_references: false,
        },
        ContractMetadata {
            name: "StorageSetter",
            storage_layout_json: r#"{"storage":[],"types":{}}"#,
            deployed_bin: "60806040",
            deployed_source_map: None,
            has_immutable_references: true,
        },
        ContractMetadata {
            name: "Broken",
            storage_layout_json: "{",
            deployed_bin: "0x60zz",
            deployed_source_map: None,
            has_immutable_references: false,
        },
        ContractMetadata {
            name: "Empty",
            storage_layout_json: r#"{"storage":[],"types":null}"#,
            deployed_bin: "",
            deployed_source_map: None,
            has_immutable_references: false,
        },
    ];

    #[derive(Default)]
    struct CountingSource {
        loads: AtomicUsize,
    }

    impl LayoutSource for CountingSource {
        fn storage_layout(&self, name: &str) -> Result<StorageLayout> {
            self.loads.fetch_add(1, Ordering::SeqCst);

            if name == "StorageSetter" {
                Ok(serde_json::from_str(GAS_LIMIT_LAYOUT)?)
            } else {
                Err(Error::NoArtifactSource(name.to_string()))
            }
        }
    }

    #[test]
    fn hex_validation() {
        assert!(is_hex(""));
        assert!(is_hex("0x"));
        assert!(is_hex("0x6080"));
        assert!(is_hex("6080"));
        assert!(is_hex("0xDEADbeef"));

        assert!(!is_hex("0x608"));
        assert!(!is_hex("608"));
        assert!(!is_hex("0x60zz"));
        // only a lowercase prefix is stripped
        assert!(!is_hex("0X6080"));
    }

    #[test]
    fn deployed_bytecode() {
        let registry = Registry::new(CONTRACTS, CountingSource::default());

        assert_eq!(
            registry.get_deployed_bytecode("SystemConfig").unwrap().to_vec(),
            vec![0x60, 0x80, 0x60, 0x40, 0x52]
        );
        assert_eq!(
            registry.get_deployed_bytecode("StorageSetter").unwrap().to_vec(),
            vec![0x60, 0x80, 0x60, 0x40]
        );

        assert!(matches!(
            registry.get_deployed_bytecode("Broken"),
            Err(Error::InvalidDeployedBytecode(name)) if name == "Broken"
        ));
        assert!(matches!(
            registry.get_deployed_bytecode("Empty"),
            Err(Error::DeployedBytecodeNotFound(name)) if name == "Empty"
        ));
        assert!(matches!(
            registry.get_deployed_bytecode("OptimismPortal"),
            Err(Error::DeployedBytecodeNotFound(_))
        ));
    }

    #[test]
    fn embedded_layouts_are_cached() {
        let registry = Registry::new(CONTRACTS, CountingSource::default());

        let first = registry.get_storage_layout("SystemConfig").unwrap();
        let second = registry.get_storage_layout("SystemConfig").unwrap();

        assert_eq!(first.entry("gasLimit").unwrap().slot, 104.into());
        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert_eq!(registry.source.loads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_layouts_fall_back_to_the_source() {
        let registry = Registry::new(CONTRACTS, CountingSource::default());

        let layout = registry.get_storage_layout("StorageSetter").unwrap();
        assert_eq!(layout.storage.len(), 1);

        registry.get_storage_layout("StorageSetter").unwrap();
        assert_eq!(registry.source.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let registry = Registry::new(CONTRACTS, CountingSource::default());

        for _ in 0..2 {
            let err = registry.get_storage_layout("OptimismPortal").unwrap_err();
            assert!(matches!(
                &err,
                Error::StorageLayout { name, .. } if name == "OptimismPortal"
            ));
        }

        assert_eq!(registry.source.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn malformed_embedded_layout() {
        let registry = Registry::new(CONTRACTS, CountingSource::default());

        assert!(matches!(
            registry.get_storage_layout("Broken"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn metadata_lookups() {
        let registry = Registry::new(CONTRACTS, CountingSource::default());

        assert_eq!(registry.has_immutable_references("StorageSetter"), Some(true));
        assert_eq!(registry.has_immutable_references("SystemConfig"), Some(false));
        assert_eq!(registry.has_immutable_references("OptimismPortal"), None);
        assert_eq!(registry.get_deployed_source_map("SystemConfig"), Some("1:2:3"));
        assert_eq!(registry.get_deployed_source_map("StorageSetter"), None);

        let mut names: Vec<_> = registry.contract_names().collect();
        names.sort();
        assert_eq!(names, vec!["Broken", "Empty", "StorageSetter", "SystemConfig"]);
    }

    #[test]
    fn process_wide_registry_has_generated_contracts() {
        let bytecode = super::get_deployed_bytecode("SystemConfig").unwrap();
        assert!(bytecode.starts_with(&[0x60, 0x80, 0x60, 0x40]));

        let layout = super::get_storage_layout("SystemConfig").unwrap();
        assert_eq!(layout.entry("gasLimit").unwrap().slot, 104.into());
    }
}
