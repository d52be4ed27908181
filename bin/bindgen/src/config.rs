use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{cli::Args, error::Error};

const DEFAULT_REGISTRY_PATH: &str = "crate::registry";

fn default_registry_path() -> String {
    DEFAULT_REGISTRY_PATH.to_string()
}

/// What to generate and where to.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) forge_artifacts: Option<PathBuf>,

    pub(crate) forge_contracts: Option<PathBuf>,

    pub(crate) hardhat_artifacts: Option<PathBuf>,

    pub(crate) hardhat_contracts: Option<PathBuf>,

    #[serde(default)]
    pub(crate) source_maps: Vec<String>,

    pub(crate) out: PathBuf,

    pub(crate) metadata_out: Option<PathBuf>,

    #[serde(default = "default_registry_path")]
    pub(crate) registry_path: String,

    pub(crate) monorepo_base: Option<String>,
}

impl Config {
    pub(crate) fn from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(config_path)?;

        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    pub(crate) fn from_args(args: Args) -> Result<Self, Error> {
        let out = args.out.ok_or(Error::NoOutput)?;

        Ok(Self {
            forge_artifacts: args.forge_artifacts,
            forge_contracts: args.forge_contracts,
            hardhat_artifacts: args.hardhat_artifacts,
            hardhat_contracts: args.hardhat_contracts,
            source_maps: args
                .source_maps
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            out,
            metadata_out: args.metadata_out,
            registry_path: args.registry_path.unwrap_or_else(default_registry_path),
            monorepo_base: args.monorepo_base,
        })
    }

    /// Directory the metadata modules and `mod.rs` are written to.
    pub(crate) fn metadata_out(&self) -> &Path {
        self.metadata_out.as_deref().unwrap_or(&self.out)
    }

    pub(crate) fn wants_source_map(&self, contract: &str) -> bool {
        self.source_maps.iter().any(|name| name == contract)
    }
}

// Forge lists are `{"local": [...]}`, hardhat ones are plain arrays.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContractList {
    Names(Vec<String>),
    Local { local: Vec<String> },
}

/// Read a list of contract names, fails on an empty list.
pub(crate) fn read_contract_list(path: &Path) -> Result<Vec<String>, Error> {
    let contents = fs::read_to_string(path)?;

    let contracts = match serde_json::from_str(&contents)? {
        ContractList::Names(names) => names,
        ContractList::Local { local } => local,
    };

    if contracts.is_empty() {
        return Err(Error::NoContracts(path.to_path_buf()));
    }

    vlog::debug!("loaded {} contracts from {}", contracts.len(), path.display());

    Ok(contracts)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::{read_contract_list, Config};
    use crate::{cli::Args, error::Error};

    #[test]
    fn from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bindgen.toml");
        std::fs::write(
            &path,
            r#"
            forge_artifacts = "packages/contracts-bedrock/forge-artifacts"
            forge_contracts = "artifacts.json"
            source_maps = ["SystemConfig"]
            out = "bindings/src"
            metadata_out = "bindings/src/generated"
            monorepo_base = "/home/ci/tokamak-thanos"
            "#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.registry_path, "crate::registry");
        assert_eq!(config.metadata_out(), Path::new("bindings/src/generated"));
        assert!(config.wants_source_map("SystemConfig"));
        assert!(!config.wants_source_map("StorageSetter"));
        assert_eq!(config.hardhat_artifacts, None);
    }

    #[test]
    fn from_args() {
        let args = Args::parse_from([
            "bindgen",
            "--hardhat-artifacts",
            "artifacts",
            "--hardhat-contracts",
            "hardhat.json",
            "--source-maps",
            "SystemConfig, L1CrossDomainMessenger",
            "--out",
            "out",
        ]);

        let config = Config::from_args(args).unwrap();

        assert_eq!(config.metadata_out(), Path::new("out"));
        assert_eq!(config.hardhat_artifacts, Some(PathBuf::from("artifacts")));
        assert_eq!(
            config.source_maps,
            vec!["SystemConfig".to_string(), "L1CrossDomainMessenger".to_string()]
        );
    }

    #[test]
    fn output_is_required() {
        let args = Args::parse_from(["bindgen", "--forge-artifacts", "out"]);

        assert!(matches!(Config::from_args(args), Err(Error::NoOutput)));
    }

    #[test]
    fn contract_lists() {
        let dir = tempfile::tempdir().unwrap();

        let local = dir.path().join("local.json");
        std::fs::write(&local, r#"{"local": ["SystemConfig", "StorageSetter"]}"#).unwrap();
        assert_eq!(
            read_contract_list(&local).unwrap(),
            vec!["SystemConfig".to_string(), "StorageSetter".to_string()]
        );

        let plain = dir.path().join("plain.json");
        std::fs::write(&plain, r#"["L1CrossDomainMessenger"]"#).unwrap();
        assert_eq!(
            read_contract_list(&plain).unwrap(),
            vec!["L1CrossDomainMessenger".to_string()]
        );

        let empty = dir.path().join("empty.json");
        std::fs::write(&empty, r#"{"local": []}"#).unwrap();
        assert!(matches!(
            read_contract_list(&empty),
            Err(Error::NoContracts(path)) if path == empty
        ));
    }
}
