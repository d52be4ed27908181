//! ABI wrappers for the `DisputeGameFactory` contract.

use std::sync::Arc;

use ethers::{
    contract::LogMeta,
    providers::Middleware,
    types::{Address, Bytes, Log, TransactionReceipt, H256, U256},
};

use crate::{parse_log, send_and_confirm, Result};

#[allow(missing_docs)]
mod codegen {
    use ethers::prelude::abigen;

    abigen!(DisputeGameFactory, "./src/contracts/DisputeGameFactory.json");
}

pub use codegen::{DisputeGameCreatedFilter, ImplementationSetFilter};

/// A dispute game as recorded by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Type of the game.
    pub game_type: u8,

    /// Creation timestamp.
    pub timestamp: u64,

    /// Address of the game proxy.
    pub proxy: Address,
}

/// A struct wrapper for interacting with the `DisputeGameFactory` contract.
pub struct DisputeGameFactory<M> {
    contract: codegen::DisputeGameFactory<M>,
}

impl<M: Middleware> DisputeGameFactory<M> {
    /// Create a new instance of `DisputeGameFactory` contract.
    ///
    /// # Arguments
    ///
    /// * `address` - An address of the contract
    /// * `provider` - A middleware to perform calls to the contract
    pub fn new(address: Address, provider: Arc<M>) -> Self {
        let contract = codegen::DisputeGameFactory::new(address, provider);

        Self { contract }
    }

    /// Address of the contract.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Call `gameCount` method of `DisputeGameFactory` contract.
    pub async fn game_count(&self) -> Result<U256> {
        self.contract.game_count().call().await.map_err(Into::into)
    }

    /// Call `gameAtIndex` method of `DisputeGameFactory` contract.
    ///
    /// # Arguments
    ///
    /// * `index` - Index of the game in creation order
    pub async fn game_at_index(&self, index: U256) -> Result<GameSummary> {
        let (game_type, timestamp, proxy) = self.contract.game_at_index(index).call().await?;

        Ok(GameSummary {
            game_type,
            timestamp,
            proxy,
        })
    }

    /// Call `gameImpls` method of `DisputeGameFactory` contract.
    pub async fn game_impls(&self, game_type: u8) -> Result<Address> {
        self.contract
            .game_impls(game_type)
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `games` method of `DisputeGameFactory` contract.
    ///
    /// Returns the zero address for games that were not created.
    pub async fn games(
        &self,
        game_type: u8,
        root_claim: H256,
        extra_data: Bytes,
    ) -> Result<(Address, u64)> {
        self.contract
            .games(game_type, root_claim.0, extra_data)
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `getGameUUID` method of `DisputeGameFactory` contract.
    pub async fn get_game_uuid(
        &self,
        game_type: u8,
        root_claim: H256,
        extra_data: Bytes,
    ) -> Result<H256> {
        self.contract
            .method::<_, [u8; 32]>("getGameUUID", (game_type, root_claim.0, extra_data))?
            .call()
            .await
            .map(H256)
            .map_err(Into::into)
    }

    /// Send `create` transaction.
    pub async fn create(
        &self,
        game_type: u8,
        root_claim: H256,
        extra_data: Bytes,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.create(game_type, root_claim.0, extra_data)).await
    }

    /// Send `setImplementation` transaction.
    pub async fn set_implementation(
        &self,
        game_type: u8,
        implementation: Address,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.set_implementation(game_type, implementation)).await
    }

    /// Query `DisputeGameCreated` events in a block range.
    ///
    /// # Arguments
    ///
    /// * `from_block` - First block of the range
    /// * `to_block` - Last block of the range, inclusive
    pub async fn dispute_game_created_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(DisputeGameCreatedFilter, LogMeta)>> {
        self.contract
            .dispute_game_created_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }

    /// Query `ImplementationSet` events in a block range.
    pub async fn implementation_set_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(ImplementationSetFilter, LogMeta)>> {
        self.contract
            .implementation_set_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }
}

/// Decode a `DisputeGameCreated` log.
pub fn parse_dispute_game_created(log: &Log) -> Result<DisputeGameCreatedFilter> {
    parse_log(log)
}

/// Decode an `ImplementationSet` log.
pub fn parse_implementation_set(log: &Log) -> Result<ImplementationSetFilter> {
    parse_log(log)
}
