#![deny(unused_crate_dependencies)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![warn(unused_imports)]

//! Typed bindings to the L1 and L2 contracts and a registry of their
//! storage layouts and deployed bytecode.

mod error;
mod generated;
mod metrics;

pub mod dispute_game_factory;
pub mod l1_cross_domain_messenger;
pub mod middleware;
pub mod registry;
pub mod storage_setter;
pub mod system_config;
pub mod wnative_token;

pub use error::{Error, Result};
pub use middleware::StorageLayoutMiddleware;
pub use registry::{
    get_deployed_bytecode, get_storage_layout, has_immutable_references, ContractMetadata,
};

use ethers::{
    abi::{Detokenize, RawLog},
    contract::{ContractCall, EthEvent},
    providers::Middleware,
    types::{Log, TransactionReceipt},
};

/// Decode a log into a typed event.
///
/// Fails if the first topic is not the signature of `E`.
pub fn parse_log<E: EthEvent>(log: &Log) -> Result<E> {
    let raw = RawLog {
        topics: log.topics.clone(),
        data: log.data.to_vec(),
    };

    Ok(E::decode_log(&raw)?)
}

/// Send a transaction and wait for its receipt.
pub(crate) async fn send_and_confirm<M: Middleware, D: Detokenize>(
    call: ContractCall<M, D>,
) -> Result<Option<TransactionReceipt>> {
    let pending_tx = call.send().await.map_err(Into::<Error>::into)?;

    tracing::debug!("Sent transaction {:?}", *pending_tx);

    Ok(pending_tx.await?)
}
