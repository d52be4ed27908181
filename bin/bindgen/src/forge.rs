//! Bindings and metadata from `forge build` artifacts.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use artifacts::{
    ast::canonicalize_ast_ids,
    foundry::{sanitize_artifact_name, ForgeArtifact},
};
use ethers::prelude::Abigen;

use crate::{
    config::Config,
    error::Error,
    template::{bindings_module, metadata_module, render_metadata, Metadata},
};

/// Generate bindings and metadata of the forge contracts.
///
/// Returns the names of the generated contracts.
///
/// # Arguments
///
/// * `config`: The generator configuration
/// * `artifacts_dir`: Forge `out` directory
/// * `contracts`: Contracts to generate
pub(crate) fn generate(
    config: &Config,
    artifacts_dir: &Path,
    contracts: &[String],
) -> Result<Vec<String>, Error> {
    let monorepo_base = config
        .monorepo_base
        .as_deref()
        .ok_or(Error::NoMonorepoBase)?;

    let index = index_artifacts(artifacts_dir)?;

    fs::create_dir_all(&config.out)?;
    fs::create_dir_all(config.metadata_out())?;

    for contract in contracts {
        vlog::info!("generating bindings and metadata for forge contract {contract}");

        let artifact = read_artifact(artifacts_dir, contract, &index)?;

        write_bindings(contract, &artifact, &config.out)?;

        let layout = canonicalize_ast_ids(&artifact.storage_layout, monorepo_base);

        let deployed_source_map = config
            .wants_source_map(contract)
            .then(|| artifact.deployed_bytecode.source_map.clone());

        let metadata = Metadata {
            name: contract.clone(),
            storage_layout_json: serde_json::to_string(&layout)?,
            deployed_bin: artifact.deployed_bytecode.object.to_string(),
            deployed_source_map,
            has_immutable_references: artifact.has_immutable_references(),
        };

        let path = config
            .metadata_out()
            .join(format!("{}.rs", metadata_module(contract)));
        fs::write(&path, render_metadata(&metadata, &config.registry_path))?;

        vlog::debug!("wrote metadata of {contract} to {}", path.display());
    }

    Ok(contracts.to_vec())
}

// Artifacts of contracts built with several compiler versions are named
// `Name.0.8.15.json`, the first one found is kept.
fn index_artifacts(dir: &Path) -> Result<HashMap<String, PathBuf>, Error> {
    let pattern = dir.join("**").join("*.json");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| artifacts::Error::NonUnicodePath(dir.to_path_buf()))?;

    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();

    let mut index = HashMap::new();

    for path in paths {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let name = sanitize_artifact_name(stem);

        if index.contains_key(&name) {
            vlog::warn!("multiple versions of forge artifacts exist for {name}, using the first one");
            continue;
        }

        vlog::debug!("found artifact of {name} at {}", path.display());
        index.insert(name, path);
    }

    Ok(index)
}

fn read_artifact(
    dir: &Path,
    contract: &str,
    index: &HashMap<String, PathBuf>,
) -> Result<ForgeArtifact, Error> {
    let standard = dir
        .join(format!("{contract}.sol"))
        .join(format!("{contract}.json"));

    let path = if standard.is_file() {
        standard
    } else {
        vlog::debug!(
            "no forge artifact of {contract} at {}, using the indexed one",
            standard.display()
        );
        index
            .get(contract)
            .cloned()
            .ok_or_else(|| Error::ArtifactNotFound(contract.to_string()))?
    };

    Ok(ForgeArtifact::from_file(path)?)
}

fn write_bindings(contract: &str, artifact: &ForgeArtifact, out: &Path) -> Result<(), Error> {
    let abigen_error = |reason: String| Error::Abigen {
        contract: contract.to_string(),
        reason,
    };

    let abi = serde_json::to_string(&artifact.abi)?;

    let bindings = Abigen::new(contract, abi)
        .and_then(Abigen::generate)
        .map_err(|e| abigen_error(e.to_string()))?;

    let path = out.join(format!("{}.rs", bindings_module(contract)));
    bindings
        .write_to_file(&path)
        .map_err(|e| abigen_error(e.to_string()))?;

    vlog::debug!("wrote bindings of {contract} to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use pretty_assertions::assert_eq;

    use super::{generate, index_artifacts};
    use crate::{config::Config, error::Error};

    const ARTIFACT: &str = r#"{
        "abi": [
            {"type": "function", "name": "gasLimit", "inputs": [], "outputs": [{"name": "", "type": "uint64"}], "stateMutability": "view"}
        ],
        "bytecode": {"object": "0x6080", "sourceMap": "", "linkReferences": {}},
        "deployedBytecode": {
            "object": "0x60806040",
            "sourceMap": "1:2:3:-:0",
            "linkReferences": {},
            "immutableReferences": {}
        },
        "storageLayout": {
            "storage": [
                {"astId": 4242, "contract": "/monorepo/packages/contracts-bedrock/src/L1/SystemConfig.sol:SystemConfig", "label": "gasLimit", "offset": 0, "slot": "104", "type": "t_uint64"}
            ],
            "types": {
                "t_uint64": {"encoding": "inplace", "label": "uint64", "numberOfBytes": "8"}
            }
        }
    }"#;

    fn config(root: &Path, source_maps: &[&str]) -> Config {
        Config {
            forge_artifacts: Some(root.join("forge-artifacts")),
            forge_contracts: None,
            hardhat_artifacts: None,
            hardhat_contracts: None,
            source_maps: source_maps.iter().map(|s| s.to_string()).collect(),
            out: root.join("out"),
            metadata_out: Some(root.join("out/generated")),
            registry_path: "crate::registry".to_string(),
            monorepo_base: Some("/monorepo".to_string()),
        }
    }

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn index_keeps_first_version() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("forge-artifacts");

        write(&dir.join("Proxy.sol/Proxy.0.8.15.json"), "{}");
        write(&dir.join("Proxy.sol/Proxy.0.8.19.json"), "{}");
        write(&dir.join("StorageSetter.sol/StorageSetter.json"), "{}");

        let index = index_artifacts(&dir).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index["Proxy"], dir.join("Proxy.sol/Proxy.0.8.15.json"));
        assert_eq!(
            index["StorageSetter"],
            dir.join("StorageSetter.sol/StorageSetter.json")
        );
    }

    #[test]
    fn generates_bindings_and_metadata() {
        let root = tempfile::tempdir().unwrap();
        write(
            &root
                .path()
                .join("forge-artifacts/SystemConfig.sol/SystemConfig.json"),
            ARTIFACT,
        );

        let config = config(root.path(), &["SystemConfig"]);
        let generated = generate(
            &config,
            &root.path().join("forge-artifacts"),
            &["SystemConfig".to_string()],
        )
        .unwrap();

        assert_eq!(generated, vec!["SystemConfig".to_string()]);

        let bindings = fs::read_to_string(root.path().join("out/systemconfig.rs")).unwrap();
        assert!(bindings.contains("SystemConfig"));

        let metadata =
            fs::read_to_string(root.path().join("out/generated/systemconfig_more.rs")).unwrap();
        assert!(metadata.starts_with("// Code generated - DO NOT EDIT."));
        assert!(metadata.contains(r#""astId":1000"#));
        assert!(metadata.contains(r#""contract":"src/L1/SystemConfig.sol:SystemConfig""#));
        assert!(metadata.contains("const DEPLOYED_BIN: &str = \"0x60806040\";"));
        assert!(metadata.contains("deployed_source_map: Some(DEPLOYED_SOURCE_MAP),"));
        assert!(metadata.contains("has_immutable_references: false,"));
    }

    #[test]
    fn falls_back_to_indexed_artifact() {
        let root = tempfile::tempdir().unwrap();
        write(
            &root
                .path()
                .join("forge-artifacts/SystemConfig.sol/SystemConfig.0.8.15.json"),
            ARTIFACT,
        );

        let config = config(root.path(), &[]);
        generate(
            &config,
            &root.path().join("forge-artifacts"),
            &["SystemConfig".to_string()],
        )
        .unwrap();

        let metadata =
            fs::read_to_string(root.path().join("out/generated/systemconfig_more.rs")).unwrap();
        assert!(metadata.contains("deployed_source_map: None,"));
    }

    #[test]
    fn missing_artifact() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("forge-artifacts")).unwrap();

        let config = config(root.path(), &[]);
        let err = generate(
            &config,
            &root.path().join("forge-artifacts"),
            &["Missing".to_string()],
        )
        .unwrap_err();

        assert!(matches!(err, Error::ArtifactNotFound(name) if name == "Missing"));
    }

    #[test]
    fn monorepo_base_is_required() {
        let root = tempfile::tempdir().unwrap();

        let mut config = config(root.path(), &[]);
        config.monorepo_base = None;

        let err = generate(&config, root.path(), &["SystemConfig".to_string()]).unwrap_err();

        assert!(matches!(err, Error::NoMonorepoBase));
    }
}
