use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// A TOML file with the same keys as the flags, overrides all of them.
    #[arg(long)]
    pub(crate) config_path: Option<PathBuf>,

    /// Forge `out` directory.
    #[arg(long)]
    pub(crate) forge_artifacts: Option<PathBuf>,

    /// JSON list of the forge contracts to generate.
    #[arg(long)]
    pub(crate) forge_contracts: Option<PathBuf>,

    /// Hardhat `artifacts` directory.
    #[arg(long)]
    pub(crate) hardhat_artifacts: Option<PathBuf>,

    /// JSON list of the hardhat contracts to generate metadata for.
    #[arg(long)]
    pub(crate) hardhat_contracts: Option<PathBuf>,

    /// Contracts whose deployed source map is embedded, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub(crate) source_maps: Vec<String>,

    /// Directory of the generated bindings.
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,

    /// Directory of the generated metadata, `out` if not set.
    #[arg(long)]
    pub(crate) metadata_out: Option<PathBuf>,

    /// Rust path of the module defining `ContractMetadata`.
    #[arg(long)]
    pub(crate) registry_path: Option<String>,

    /// Root of the monorepo, stripped from contract paths in storage layouts.
    #[arg(long)]
    pub(crate) monorepo_base: Option<String>,
}
