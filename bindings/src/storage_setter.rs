//! ABI wrappers for the `StorageSetter` contract.
//!
//! A proxy is temporarily upgraded to `StorageSetter` to clear or patch storage
//! slots before it is upgraded to the real implementation.

use std::sync::Arc;

use ethers::{
    providers::Middleware,
    types::{Address, TransactionReceipt, H256, U256},
};

use crate::Result;

#[allow(missing_docs)]
mod codegen {
    use ethers::prelude::abigen;

    abigen!(StorageSetter, "./src/contracts/StorageSetter.json");
}

/// A struct wrapper for interacting with the `StorageSetter` contract.
pub struct StorageSetter<M> {
    contract: codegen::StorageSetter<M>,
}

impl<M: Middleware> StorageSetter<M> {
    /// Create a new instance of `StorageSetter` contract.
    ///
    /// # Arguments
    ///
    /// * `address` - An address of the contract
    /// * `provider` - A middleware to perform calls to the contract
    pub fn new(address: Address, provider: Arc<M>) -> Self {
        let contract = codegen::StorageSetter::new(address, provider);

        Self { contract }
    }

    /// Address of the contract.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Call `version` method of `StorageSetter` contract.
    pub async fn version(&self) -> Result<String> {
        self.contract.version().call().await.map_err(Into::into)
    }

    /// Call `getAddress` method of `StorageSetter` contract.
    pub async fn get_address(&self, slot: H256) -> Result<Address> {
        self.contract
            .get_address(slot.0)
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `getBool` method of `StorageSetter` contract.
    pub async fn get_bool(&self, slot: H256) -> Result<bool> {
        self.contract.get_bool(slot.0).call().await.map_err(Into::into)
    }

    /// Call `getBytes32` method of `StorageSetter` contract.
    pub async fn get_bytes32(&self, slot: H256) -> Result<H256> {
        self.contract
            .method::<_, [u8; 32]>("getBytes32", slot.0)?
            .call()
            .await
            .map(H256)
            .map_err(Into::into)
    }

    /// Call `getUint` method of `StorageSetter` contract.
    pub async fn get_uint(&self, slot: H256) -> Result<U256> {
        self.contract.get_uint(slot.0).call().await.map_err(Into::into)
    }

    /// Send `setAddress` transaction.
    pub async fn set_address(
        &self,
        slot: H256,
        address: Address,
    ) -> Result<Option<TransactionReceipt>> {
        crate::send_and_confirm(self.contract.set_address(slot.0, address)).await
    }

    /// Send `setBool` transaction.
    pub async fn set_bool(&self, slot: H256, value: bool) -> Result<Option<TransactionReceipt>> {
        crate::send_and_confirm(self.contract.set_bool(slot.0, value)).await
    }

    /// Send `setBytes32` transaction.
    pub async fn set_bytes32(&self, slot: H256, value: H256) -> Result<Option<TransactionReceipt>> {
        crate::send_and_confirm(
            self.contract
                .method::<_, ()>("setBytes32", (slot.0, value.0))?,
        )
        .await
    }

    /// Send `setUint` transaction.
    pub async fn set_uint(&self, slot: H256, value: U256) -> Result<Option<TransactionReceipt>> {
        crate::send_and_confirm(self.contract.set_uint(slot.0, value)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ethers::{
        providers::Provider,
        types::{Address, Bytes, H256, U256},
    };
    use pretty_assertions::assert_eq;

    use super::StorageSetter;

    #[tokio::test]
    async fn reads_slots_through_eth_call() {
        let (provider, mock) = Provider::mocked();
        let setter = StorageSetter::new(Address::repeat_byte(0x01), Arc::new(provider));

        let mut word = [0_u8; 32];
        word[31] = 0x2a;
        mock.push::<Bytes, _>(Bytes::from(word.to_vec())).unwrap();

        let value = setter.get_uint(H256::zero()).await.unwrap();

        assert_eq!(value, U256::from(42));
        assert_eq!(setter.address(), Address::repeat_byte(0x01));
    }
}
