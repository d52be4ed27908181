use ethers::{
    abi::AbiError, contract::ContractError, prelude::Middleware, providers::ProviderError,
};

#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    ProviderError(#[from] ProviderError),

    #[error(transparent)]
    Artifacts(#[from] artifacts::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] ethers::abi::Error),

    #[error("Contract error {0}")]
    ContractError(String),

    #[error("Abi error {0}")]
    Abi(String),

    #[error("Middleware error {0}")]
    Middleware(String),

    #[error("failed to find storage layout for {name}: {source}")]
    StorageLayout {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}: deployed bytecode not found")]
    DeployedBytecodeNotFound(String),

    #[error("{0}: invalid deployed bytecode")]
    InvalidDeployedBytecode(String),

    #[error("no hardhat artifacts configured to load {0} from")]
    NoArtifactSource(String),

    #[error("value of {label} is too short: offset {offset} and {size} bytes exceed a word")]
    ValueTooShort { label: String, offset: u64, size: u64 },
}

impl<M: Middleware> From<ContractError<M>> for Error {
    fn from(value: ContractError<M>) -> Self {
        Self::ContractError(value.to_string())
    }
}

impl From<AbiError> for Error {
    fn from(value: AbiError) -> Self {
        Self::Abi(value.to_string())
    }
}

/// The bindings result type.
pub type Result<T> = std::result::Result<T, Error>;
