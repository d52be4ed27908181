//! ABI wrappers for the `L1CrossDomainMessenger` contract.

use std::sync::Arc;

use ethers::{
    abi::Detokenize,
    contract::LogMeta,
    providers::Middleware,
    types::{Address, Bytes, Log, TransactionReceipt, H256, U256},
};

use crate::{parse_log, send_and_confirm, Result};

#[allow(missing_docs)]
mod codegen {
    use ethers::prelude::abigen;

    abigen!(
        L1CrossDomainMessenger,
        "./src/contracts/L1CrossDomainMessenger.json"
    );
}

pub use codegen::{
    FailedRelayedMessageFilter, RelayedMessageFilter, SentMessageExtension1Filter,
    SentMessageFilter,
};

/// A struct wrapper for interacting with the `L1CrossDomainMessenger` contract.
pub struct L1CrossDomainMessenger<M> {
    contract: codegen::L1CrossDomainMessenger<M>,
}

impl<M: Middleware> L1CrossDomainMessenger<M> {
    /// Create a new instance of `L1CrossDomainMessenger` contract.
    ///
    /// # Arguments
    ///
    /// * `address` - An address of the contract
    /// * `provider` - A middleware to perform calls to the contract
    pub fn new(address: Address, provider: Arc<M>) -> Self {
        let contract = codegen::L1CrossDomainMessenger::new(address, provider);

        Self { contract }
    }

    /// Address of the contract.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    async fn constant<D: Detokenize>(&self, name: &str) -> Result<D> {
        self.contract
            .method::<_, D>(name, ())?
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `version` method of `L1CrossDomainMessenger` contract.
    pub async fn version(&self) -> Result<String> {
        self.contract.version().call().await.map_err(Into::into)
    }

    /// Call `MESSAGE_VERSION` method of `L1CrossDomainMessenger` contract.
    pub async fn message_version(&self) -> Result<u16> {
        self.constant("MESSAGE_VERSION").await
    }

    /// Call `OTHER_MESSENGER` method of `L1CrossDomainMessenger` contract.
    pub async fn other_messenger(&self) -> Result<Address> {
        self.constant("OTHER_MESSENGER").await
    }

    /// Call `RELAY_CONSTANT_OVERHEAD` method of `L1CrossDomainMessenger` contract.
    pub async fn relay_constant_overhead(&self) -> Result<u64> {
        self.constant("RELAY_CONSTANT_OVERHEAD").await
    }

    /// Call `MIN_GAS_CALLDATA_OVERHEAD` method of `L1CrossDomainMessenger` contract.
    pub async fn min_gas_calldata_overhead(&self) -> Result<u64> {
        self.constant("MIN_GAS_CALLDATA_OVERHEAD").await
    }

    /// Call `portal` method of `L1CrossDomainMessenger` contract.
    pub async fn portal(&self) -> Result<Address> {
        self.contract.portal().call().await.map_err(Into::into)
    }

    /// Call `nativeTokenAddress` method of `L1CrossDomainMessenger` contract.
    pub async fn native_token_address(&self) -> Result<Address> {
        self.contract
            .native_token_address()
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `messageNonce` method of `L1CrossDomainMessenger` contract.
    pub async fn message_nonce(&self) -> Result<U256> {
        self.contract.message_nonce().call().await.map_err(Into::into)
    }

    /// Call `xDomainMessageSender` method of `L1CrossDomainMessenger` contract.
    pub async fn x_domain_message_sender(&self) -> Result<Address> {
        self.constant("xDomainMessageSender").await
    }

    /// Call `successfulMessages` method of `L1CrossDomainMessenger` contract.
    ///
    /// # Arguments
    ///
    /// * `msg_hash` - Hash of the cross domain message
    pub async fn successful_messages(&self, msg_hash: H256) -> Result<bool> {
        self.contract
            .successful_messages(msg_hash.0)
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `failedMessages` method of `L1CrossDomainMessenger` contract.
    ///
    /// # Arguments
    ///
    /// * `msg_hash` - Hash of the cross domain message
    pub async fn failed_messages(&self, msg_hash: H256) -> Result<bool> {
        self.contract
            .failed_messages(msg_hash.0)
            .call()
            .await
            .map_err(Into::into)
    }

    /// Call `baseGas` method of `L1CrossDomainMessenger` contract.
    ///
    /// # Arguments
    ///
    /// * `message` - Message to relay
    /// * `min_gas_limit` - Minimum gas limit the message is executed with
    pub async fn base_gas(&self, message: Bytes, min_gas_limit: u32) -> Result<u64> {
        self.contract
            .base_gas(message, min_gas_limit)
            .call()
            .await
            .map_err(Into::into)
    }

    /// Send `sendMessage` transaction.
    ///
    /// # Arguments
    ///
    /// * `target` - Recipient on the other domain
    /// * `message` - Calldata for the target
    /// * `min_gas_limit` - Minimum gas limit the message is executed with
    /// * `value` - Ether sent along with the message
    pub async fn send_message(
        &self,
        target: Address,
        message: Bytes,
        min_gas_limit: u32,
        value: U256,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(
            self.contract
                .send_message(target, message, min_gas_limit)
                .value(value),
        )
        .await
    }

    /// Send `sendNativeTokenMessage` transaction.
    pub async fn send_native_token_message(
        &self,
        target: Address,
        amount: U256,
        message: Bytes,
        min_gas_limit: u32,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(self.contract.send_native_token_message(
            target,
            amount,
            message,
            min_gas_limit,
        ))
        .await
    }

    /// Send `relayMessage` transaction.
    pub async fn relay_message(
        &self,
        nonce: U256,
        sender: Address,
        target: Address,
        value: U256,
        min_gas_limit: U256,
        message: Bytes,
    ) -> Result<Option<TransactionReceipt>> {
        send_and_confirm(
            self.contract
                .relay_message(nonce, sender, target, value, min_gas_limit, message)
                .value(value),
        )
        .await
    }

    /// Query `SentMessage` events in a block range.
    ///
    /// # Arguments
    ///
    /// * `from_block` - First block of the range
    /// * `to_block` - Last block of the range, inclusive
    pub async fn sent_message_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(SentMessageFilter, LogMeta)>> {
        self.contract
            .sent_message_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }

    /// Query `SentMessageExtension1` events in a block range.
    pub async fn sent_message_extension_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(SentMessageExtension1Filter, LogMeta)>> {
        self.contract
            .event::<SentMessageExtension1Filter>()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }

    /// Query `RelayedMessage` events in a block range.
    pub async fn relayed_message_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(RelayedMessageFilter, LogMeta)>> {
        self.contract
            .relayed_message_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }

    /// Query `FailedRelayedMessage` events in a block range.
    pub async fn failed_relayed_message_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<(FailedRelayedMessageFilter, LogMeta)>> {
        self.contract
            .failed_relayed_message_filter()
            .from_block(from_block)
            .to_block(to_block)
            .query_with_meta()
            .await
            .map_err(Into::into)
    }
}

/// Decode a `SentMessage` log.
pub fn parse_sent_message(log: &Log) -> Result<SentMessageFilter> {
    parse_log(log)
}

/// Decode a `SentMessageExtension1` log.
pub fn parse_sent_message_extension(log: &Log) -> Result<SentMessageExtension1Filter> {
    parse_log(log)
}

/// Decode a `RelayedMessage` log.
pub fn parse_relayed_message(log: &Log) -> Result<RelayedMessageFilter> {
    parse_log(log)
}

/// Decode a `FailedRelayedMessage` log.
pub fn parse_failed_relayed_message(log: &Log) -> Result<FailedRelayedMessageFilter> {
    parse_log(log)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ethers::{
        abi::{self, Token},
        contract::EthEvent,
        providers::Provider,
        types::{Address, Bytes, Log, H256, U256},
    };
    use pretty_assertions::assert_eq;

    use super::{
        parse_relayed_message, parse_sent_message, L1CrossDomainMessenger, RelayedMessageFilter,
        SentMessageFilter,
    };

    #[test]
    fn signatures() {
        assert_eq!(
            SentMessageFilter::abi_signature(),
            "SentMessage(address,address,bytes,uint256,uint256)"
        );
        assert_eq!(
            RelayedMessageFilter::abi_signature(),
            "RelayedMessage(bytes32)"
        );
    }

    #[test]
    fn parses_sent_message() {
        let target = Address::repeat_byte(0x42);
        let sender = Address::repeat_byte(0x11);

        let log = Log {
            topics: vec![SentMessageFilter::signature(), H256::from(target)],
            data: abi::encode(&[
                Token::Address(sender),
                Token::Bytes(vec![0xde, 0xad]),
                Token::Uint(7.into()),
                Token::Uint(200_000.into()),
            ])
            .into(),
            ..Default::default()
        };

        let event = parse_sent_message(&log).unwrap();

        assert_eq!(event.target, target);
        assert_eq!(event.sender, sender);
        assert_eq!(event.message.to_vec(), vec![0xde, 0xad]);
        assert_eq!(event.message_nonce, U256::from(7));
        assert_eq!(event.gas_limit, U256::from(200_000));
    }

    #[test]
    fn parses_relayed_message() {
        let msg_hash = H256::repeat_byte(0xab);

        let log = Log {
            topics: vec![RelayedMessageFilter::signature(), msg_hash],
            ..Default::default()
        };

        assert_eq!(parse_relayed_message(&log).unwrap().msg_hash, msg_hash.0);
        assert!(parse_sent_message(&log).is_err());
    }

    #[tokio::test]
    async fn reads_message_nonce() {
        let (provider, mock) = Provider::mocked();
        let messenger = L1CrossDomainMessenger::new(Address::repeat_byte(0x01), Arc::new(provider));

        // Version 1 in the two most significant bytes.
        let nonce = (U256::from(1) << 240) | U256::from(7);
        mock.push::<Bytes, _>(Bytes::from(abi::encode(&[Token::Uint(nonce)])))
            .unwrap();

        assert_eq!(messenger.message_nonce().await.unwrap(), nonce);
    }
}
