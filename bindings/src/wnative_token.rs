//! ABI wrappers for the `WNativeToken` contract, the wrapped native token on L2.

use std::sync::Arc;

use ethers::{
    contract::LogMeta,
    providers::Middleware,
    types::{Address, Log, TransactionReceipt, U256},
};

use crate::{parse_log, send_and_confirm, Result};

#[allow(missing_docs)]
mod codegen {
    use ethers::prelude::abigen;

    abigen!(WNativeToken, "./src/contracts/WNativeToken.json");
}

pub use codegen::{ApprovalFilter, DepositFilter, TransferFilter, WithdrawalFilter};

/// A struct wrapper for interacting with the `WNativeToken` contract.
pub struct WNativeToken<M> {
    contract: codegen::WNativeToken<M>,
}

impl<M: Middleware> WNativeToken<M> {
    /// Create a new instance of `WNativeToken` contract.
    ///
    /// # Arguments
    ///
    /// * `address` - An address of the contract
    /// * `provider` - A middleware to perform calls to the contract
    pub fn new(address: Address, provider: Arc<M>) -> Self {
        let contract = codegen::WNativeToken::new(address, provider);

        Self { contract }
    }

    /// Address of the contract.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Call `name` method of `WNativeToken` contract.
    pub async fn name(&self) -> Result<String> {
        self.contract.name().call().await.map_err(Into::into)
    }

    /// Call `symbol` method of `WNativeToken` contract.
    pub async fn symbol(&self) -> Result<String> {
        self.contract.symbol().call().await.map_err(Into::into)
    }

    /// Call `decimals` method of `WNativeToken` contract.
    pub async fn decimals(&self) -> Result<u8> {
        self.contract.decimals().call().await.map_err(Into::into)
    }

    /// Call `totalSupply` method of `WNativeToken` contract.
    pub async fn total_supply(&self) -> Result<U256> {
        self.contract.total_supply().call().await.map_err(Into::into)
    }

    /// Call `balanceOf` method of `WNativeToken` contract.
    pub async fn balance_of(&self, owner: Address) -> Result<U256> {
        self.contract
            .balance_of(owner)
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `allowance` method of `WNativeToken` contract.
    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        self.contract
            .allowance(owner, spender)
            .call()
            .await
            .map_err(Into::into)
    }

    /// Send `deposit` transaction wrapping `amount` of the native token.
    pub async fn deposit(&self, amount: U256) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.deposit().value(amount)).await
    }

    /// Send `withdraw` transaction.
    pub async fn withdraw(&self, amount: U256) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.withdraw(amount)).await
    }

    /// Send `approve` transaction.
    pub async fn approve(&self, spender: Address, amount: U256) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.approve(spender, amount)).await
    }

    /// Send `transfer` transaction.
    pub async fn transfer(&self, to: Address, amount: U256) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.transfer(to, amount)).await
    }

    /// Send `transferFrom` transaction.
    pub async fn transfer_from(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.transfer_from(from, to, amount)).await
    }

    /// Query `Transfer` events in a block range.
    ///
    /// # Arguments
    ///
    /// * `from_block` - First block of the range
    /// * `to_block` - Last block of the range, inclusive
    pub async fn transfer_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(TransferFilter, LogMeta)>> {
        self.contract
            .transfer_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }

    /// Query `Deposit` events in a block range.
    pub async fn deposit_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(DepositFilter, LogMeta)>> {
        self.contract
            .deposit_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }

    /// Query `Withdrawal` events in a block range.
    pub async fn withdrawal_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(WithdrawalFilter, LogMeta)>> {
        self.contract
            .withdrawal_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }

    /// Query `Approval` events in a block range.
    pub async fn approval_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(ApprovalFilter, LogMeta)>> {
        self.contract
            .approval_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }
}

/// Decode a `Transfer` log.
pub fn parse_transfer(log: &Log) -> Result<TransferFilter> {
    parse_log(log)
}

/// Decode a `Deposit` log.
pub fn parse_deposit(log: &Log) -> Result<DepositFilter> {
    parse_log(log)
}

/// Decode a `Withdrawal` log.
pub fn parse_withdrawal(log: &Log) -> Result<WithdrawalFilter> {
    parse_log(log)
}

/// Decode an `Approval` log.
pub fn parse_approval(log: &Log) -> Result<ApprovalFilter> {
    parse_log(log)
}
