use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Artifacts(#[from] artifacts::Error),

    #[error(transparent)]
    GlobPattern(#[from] glob::PatternError),

    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    #[error("failed to generate bindings of {contract}: {reason}")]
    Abigen { contract: String, reason: String },

    #[error("forge contracts require a monorepo base path")]
    NoMonorepoBase,

    #[error("no contracts parsed from contract list {0}")]
    NoContracts(PathBuf),

    #[error("cannot find forge artifact of {0}")]
    ArtifactNotFound(String),

    #[error("output directory is not set")]
    NoOutput,
}
