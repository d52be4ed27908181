//! ABI wrappers for the `SystemConfig` contract.

use std::sync::Arc;

use ethers::{
    contract::{ContractCall, LogMeta},
    providers::Middleware,
    types::{Address, Log, TransactionReceipt, H256, U256},
};

use crate::{parse_log, send_and_confirm, Result};

#[allow(missing_docs)]
mod codegen {
    use ethers::prelude::abigen;

    abigen!(SystemConfig, "./src/contracts/SystemConfig.json");
}

pub use codegen::{
    Addresses, ConfigUpdateFilter, InitializedFilter, OwnershipTransferredFilter, ResourceConfig,
};

/// Kinds of `ConfigUpdate` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateType {
    /// Batcher address changed.
    Batcher,

    /// Fee overhead and scalar changed.
    GasConfig,

    /// Block gas limit changed.
    GasLimit,

    /// Unsafe block signer changed.
    UnsafeBlockSigner,
}

impl TryFrom<u8> for UpdateType {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Batcher),
            1 => Ok(Self::GasConfig),
            2 => Ok(Self::GasLimit),
            3 => Ok(Self::UnsafeBlockSigner),
            v => Err(v),
        }
    }
}

/// A struct wrapper for interacting with the `SystemConfig` contract.
pub struct SystemConfig<M> {
    contract: codegen::SystemConfig<M>,
}

impl<M: Middleware> SystemConfig<M> {
    /// Create a new instance of `SystemConfig` contract.
    ///
    /// # Arguments
    ///
    /// * `address` - An address of the contract
    /// * `provider` - A middleware to perform calls to the contract
    pub fn new(address: Address, provider: Arc<M>) -> Self {
        let contract = codegen::SystemConfig::new(address, provider);

        Self { contract }
    }

    /// Address of the contract.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Call `version` method of `SystemConfig` contract.
    pub async fn version(&self) -> Result<String> {
        self.contract.version().call().await.map_err(Into::into)
    }

    /// Call `owner` method of `SystemConfig` contract.
    pub async fn owner(&self) -> Result<Address> {
        self.contract.owner().call().await.map_err(Into::into)
    }

    /// Call `overhead` method of `SystemConfig` contract.
    pub async fn overhead(&self) -> Result<U256> {
        self.contract.overhead().call().await.map_err(Into::into)
    }

    /// Call `scalar` method of `SystemConfig` contract.
    pub async fn scalar(&self) -> Result<U256> {
        self.contract.scalar().call().await.map_err(Into::into)
    }

    /// Call `batcherHash` method of `SystemConfig` contract.
    pub async fn batcher_hash(&self) -> Result<H256> {
        self.contract
            .batcher_hash()
            .call()
            .await
            .map(H256)
            .map_err(Into::into)
    }

    /// Call `gasLimit` method of `SystemConfig` contract.
    pub async fn gas_limit(&self) -> Result<u64> {
        self.contract.gas_limit().call().await.map_err(Into::into)
    }

    /// Call `minimumGasLimit` method of `SystemConfig` contract.
    pub async fn minimum_gas_limit(&self) -> Result<u64> {
        self.contract
            .minimum_gas_limit()
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `startBlock` method of `SystemConfig` contract.
    pub async fn start_block(&self) -> Result<U256> {
        self.contract.start_block().call().await.map_err(Into::into)
    }

    /// Call `resourceConfig` method of `SystemConfig` contract.
    pub async fn resource_config(&self) -> Result<ResourceConfig> {
        self.contract
            .resource_config()
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `unsafeBlockSigner` method of `SystemConfig` contract.
    pub async fn unsafe_block_signer(&self) -> Result<Address> {
        self.contract
            .unsafe_block_signer()
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `batchInbox` method of `SystemConfig` contract.
    pub async fn batch_inbox(&self) -> Result<Address> {
        self.contract.batch_inbox().call().await.map_err(Into::into)
    }

    /// Call `nativeTokenAddress` method of `SystemConfig` contract.
    pub async fn native_token_address(&self) -> Result<Address> {
        self.contract
            .native_token_address()
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `optimismPortal` method of `SystemConfig` contract.
    pub async fn optimism_portal(&self) -> Result<Address> {
        self.contract
            .optimism_portal()
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `l1CrossDomainMessenger` method of `SystemConfig` contract.
    pub async fn l1_cross_domain_messenger(&self) -> Result<Address> {
        self.address_getter("l1CrossDomainMessenger").await
    }

    /// Call `l1StandardBridge` method of `SystemConfig` contract.
    pub async fn l1_standard_bridge(&self) -> Result<Address> {
        self.address_getter("l1StandardBridge").await
    }

    /// Call `l1ERC721Bridge` method of `SystemConfig` contract.
    pub async fn l1_erc721_bridge(&self) -> Result<Address> {
        self.address_getter("l1ERC721Bridge").await
    }

    /// Call `l2OutputOracle` method of `SystemConfig` contract.
    pub async fn l2_output_oracle(&self) -> Result<Address> {
        self.address_getter("l2OutputOracle").await
    }

    /// Call `optimismMintableERC20Factory` method of `SystemConfig` contract.
    pub async fn optimism_mintable_erc20_factory(&self) -> Result<Address> {
        self.address_getter("optimismMintableERC20Factory").await
    }

    async fn address_getter(&self, name: &str) -> Result<Address> {
        self.contract
            .method::<_, Address>(name, ())?
            .call()
            .await
            .map_err(Into::into)
    }

    /// Send `setBatcherHash` transaction.
    pub async fn set_batcher_hash(&self, batcher_hash: H256) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.set_batcher_hash(batcher_hash.0)).await
    }

    /// Send `setGasConfig` transaction.
    pub async fn set_gas_config(
        &self,
        overhead: U256,
        scalar: U256,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.set_gas_config(overhead, scalar)).await
    }

    /// Send `setGasLimit` transaction.
    pub async fn set_gas_limit(&self, gas_limit: u64) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.set_gas_limit(gas_limit)).await
    }

    /// Send `setUnsafeBlockSigner` transaction.
    pub async fn set_unsafe_block_signer(
        &self,
        signer: Address,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.set_unsafe_block_signer(signer)).await
    }

    /// Send `setResourceConfig` transaction.
    pub async fn set_resource_config(
        &self,
        config: ResourceConfig,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.set_resource_config_call(config)).await
    }

    fn set_resource_config_call(&self, config: ResourceConfig) -> ContractCall<M, ()> {
        self.contract.set_resource_config(config)
    }

    /// Send `transferOwnership` transaction.
    pub async fn transfer_ownership(&self, new_owner: Address) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.transfer_ownership(new_owner)).await
    }

    /// Send `renounceOwnership` transaction.
    pub async fn renounce_ownership(&self) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.renounce_ownership()).await
    }

    /// Send `initialize` transaction.
    #[allow(clippy::too_many_arguments)]
    pub async fn initialize(
        &self,
        owner: Address,
        overhead: U256,
        scalar: U256,
        batcher_hash: H256,
        gas_limit: u64,
        unsafe_block_signer: Address,
        config: ResourceConfig,
        start_block: U256,
        batch_inbox: Address,
        addresses: Addresses,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.initialize_call(
            owner,
            overhead,
            scalar,
            batcher_hash,
            gas_limit,
            unsafe_block_signer,
            config,
            start_block,
            batch_inbox,
            addresses,
        ))
        .await
    }

    #[allow(clippy::too_many_arguments)]
    fn initialize_call(
        &self,
        owner: Address,
        overhead: U256,
        scalar: U256,
        batcher_hash: H256,
        gas_limit: u64,
        unsafe_block_signer: Address,
        config: ResourceConfig,
        start_block: U256,
        batch_inbox: Address,
        addresses: Addresses,
    ) -> ContractCall<M, ()> {
        self.contract.initialize(
            owner,
            overhead,
            scalar,
            batcher_hash.0,
            gas_limit,
            unsafe_block_signer,
            config,
            start_block,
            batch_inbox,
            addresses,
        )
    }

    /// Query `ConfigUpdate` events in a block range.
    ///
    /// # Arguments
    ///
    /// * `from_block` - First block of the range
    /// * `to_block` - Last block of the range, inclusive
    pub async fn config_update_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(ConfigUpdateFilter, LogMeta)>> {
        self.contract
            .config_update_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }

    /// Query `OwnershipTransferred` events in a block range.
    pub async fn ownership_transferred_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(OwnershipTransferredFilter, LogMeta)>> {
        self.contract
            .ownership_transferred_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }

    /// Query `Initialized` events in a block range.
    pub async fn initialized_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(InitializedFilter, LogMeta)>> {
        self.contract
            .initialized_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }
}

/// Decode a `ConfigUpdate` log.
pub fn parse_config_update(log: &Log) -> Result<ConfigUpdateFilter> {
    parse_log(log)
}

/// Decode an `OwnershipTransferred` log.
pub fn parse_ownership_transferred(log: &Log) -> Result<OwnershipTransferredFilter> {
    parse_log(log)
}

/// Decode an `Initialized` log.
pub fn parse_initialized(log: &Log) -> Result<InitializedFilter> {
    parse_log(log)
}
