#![deny(unused_crate_dependencies)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![warn(unused_imports)]

//! Generator of contract bindings and of the metadata read by the registry.

use std::fs;

use clap::Parser;
use eyre::Result;

use cli::Args;
use config::{read_contract_list, Config};
use template::render_registry;

mod cli;
mod config;
mod error;
mod forge;
mod hardhat;
mod template;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let config = match args.config_path.clone() {
        Some(path) => Config::from_file(path)?,
        None => {
            dotenvy::dotenv().ok();
            Config::from_args(args)?
        }
    };

    let _sentry_guard = vlog::init();

    vlog::info!("writing bindings to {}", config.out.display());

    let mut contracts = vec![];
    let mut bindings = vec![];

    if let Some(list) = &config.forge_contracts {
        let forge_contracts = read_contract_list(list)?;

        match &config.forge_artifacts {
            Some(dir) => {
                let generated = forge::generate(&config, dir, &forge_contracts)?;
                bindings.extend(generated.iter().cloned());
                contracts.extend(generated);
            }
            None => vlog::warn!("skipping forge contracts as no artifacts path is provided"),
        }
    }

    if let Some(list) = &config.hardhat_contracts {
        let hardhat_contracts = read_contract_list(list)?;

        match &config.hardhat_artifacts {
            Some(dir) => contracts.extend(hardhat::generate(&config, dir, &hardhat_contracts)?),
            None => vlog::warn!("skipping hardhat contracts as no artifacts path is provided"),
        }
    }

    if contracts.is_empty() {
        vlog::warn!("no contracts were generated");
        return Ok(());
    }

    // Bindings are only declared when they share a directory with the metadata.
    if config.metadata_out() != config.out.as_path() {
        bindings.clear();
    }

    let registry = render_registry(&contracts, &bindings, &config.registry_path);
    let path = config.metadata_out().join("mod.rs");
    fs::write(&path, registry)?;

    vlog::info!(
        "generated {} contracts, registry written to {}",
        contracts.len(),
        path.display()
    );

    Ok(())
}
