//! Metadata of contracts only available as hardhat artifacts.

use std::{fs, path::Path};

use artifacts::hardhat::Hardhat;

use crate::{
    config::Config,
    error::Error,
    template::{metadata_module, render_metadata, Metadata},
};

// Deployments are not read, any network name does.
const NETWORK: &str = "mainnet";

/// Generate metadata of the hardhat contracts, no bindings are generated.
///
/// Returns the names of the generated contracts.
///
/// # Arguments
///
/// * `config`: The generator configuration
/// * `artifacts_dir`: Hardhat `artifacts` directory
/// * `contracts`: Contracts to generate
pub(crate) fn generate(
    config: &Config,
    artifacts_dir: &Path,
    contracts: &[String],
) -> Result<Vec<String>, Error> {
    let hardhat = Hardhat::new(NETWORK, &[artifacts_dir], &[])?;

    fs::create_dir_all(config.metadata_out())?;

    for contract in contracts {
        vlog::info!("generating metadata for hardhat contract {contract}");

        let artifact = hardhat.get_artifact(contract)?;
        let layout = hardhat.get_storage_layout(contract)?;
        let has_immutable_references = hardhat.has_immutable_references(contract)?;

        vlog::debug!("{contract} has immutable references: {has_immutable_references}");

        let metadata = Metadata {
            name: contract.clone(),
            storage_layout_json: serde_json::to_string(&layout)?,
            deployed_bin: artifact.deployed_bytecode.object().to_string(),
            deployed_source_map: artifact.deployed_bytecode.source_map().map(str::to_string),
            has_immutable_references,
        };

        let path = config
            .metadata_out()
            .join(format!("{}.rs", metadata_module(contract)));
        fs::write(&path, render_metadata(&metadata, &config.registry_path))?;

        vlog::debug!("wrote metadata of {contract} to {}", path.display());
    }

    Ok(contracts.to_vec())
}
