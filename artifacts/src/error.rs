use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    GlobPattern(#[from] glob::PatternError),

    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("storage layout entry {0} not found")]
    EntryNotFound(String),

    #[error("storage layout type {0} not found")]
    TypeNotFound(String),

    #[error("cannot find artifact {0}")]
    ArtifactNotFound(String),

    #[error("cannot find build info for {0}")]
    BuildInfoNotFound(String),

    #[error("cannot find storage layout for {0}")]
    StorageLayoutNotFound(String),

    #[error("cannot find deployment {0}")]
    DeploymentNotFound(String),

    #[error("artifact path {0} is not valid unicode")]
    NonUnicodePath(PathBuf),
}

/// The crate result type.
pub type Result<T> = std::result::Result<T, Error>;
