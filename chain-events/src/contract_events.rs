use std::sync::Arc;

use ethers::{
    abi::{Address, RawLog},
    contract::{EthLogDecode, LogMeta},
    providers::{Middleware, Provider, PubsubClient, Ws},
    types::{BlockNumber, Filter, Log, H256},
};
use futures::{Sink, SinkExt, StreamExt};

use crate::{metrics::CHAIN_EVENTS_METRICS, Error, Result, RECONNECT_BACKOFF};

const LOGS_PAGE_SIZE: u64 = 256;

/// A decoded event together with the position of its log.
#[derive(Debug, Clone)]
pub struct ContractEvent<E> {
    /// The decoded event.
    pub event: E,

    /// Block, transaction and index of the log.
    pub meta: LogMeta,
}

// `ethers` event streams borrow the contract instance they were created
// from, which does not play well with long-running tasks. Instead logs of
// all requested events are streamed with a single filter and decoded
// into a multiplexer enum.
/// Listener of contract events over a websocket connection.
pub struct ContractEvents {
    url: String,
}

impl ContractEvents {
    /// Creates a new `ContractEvents` structure
    ///
    /// # Arguments
    ///
    /// * `url`: Websocket url of the node.
    pub fn new(url: &str) -> ContractEvents {
        Self {
            url: url.to_string(),
        }
    }

    async fn connect(&self) -> Option<Provider<Ws>> {
        match Provider::<Ws>::connect_with_reconnects(&self.url, 0).await {
            Ok(p) => {
                CHAIN_EVENTS_METRICS.successful_reconnects.inc();
                Some(p)
            }
            Err(e) => {
                tracing::warn!("Contract events stream reconnect attempt failed: {e}");
                CHAIN_EVENTS_METRICS.reconnects_on_error.inc();
                None
            }
        }
    }

    /// Run the main loop with re-connecting on websocket disconnects
    ///
    /// Returns only when the receiving side of `sender` is gone.
    ///
    /// # Arguments
    ///
    /// * `addresses`: Contracts to watch
    /// * `topics`: Signatures of the events to watch, see `signatures()` of the multiplexers
    /// * `from_block`: First block to replay logs from
    /// * `sender`: Where to send the decoded events
    //
    // Websocket subscriptions do not work well with reconnections
    // in `ethers-rs`: https://github.com/gakonst/ethers-rs/issues/2418
    // This function is a workaround for that and implements manual re-connecting.
    pub async fn run_with_reconnects<E, B, S>(
        self,
        addresses: Vec<Address>,
        topics: Vec<H256>,
        from_block: B,
        sender: S,
    ) -> Result<()>
    where
        E: EthLogDecode,
        B: Into<BlockNumber> + Copy,
        S: Sink<ContractEvent<E>> + Unpin + Clone,
        <S as Sink<ContractEvent<E>>>::Error: std::fmt::Debug,
    {
        let mut from_block: BlockNumber = from_block.into();

        loop {
            let Some(provider) = self.connect().await else {
                tokio::time::sleep(RECONNECT_BACKOFF).await;
                continue;
            };

            let middleware = Arc::new(provider);

            match run(
                addresses.clone(),
                topics.clone(),
                from_block,
                sender.clone(),
                middleware,
            )
            .await
            {
                Err(Error::ChannelClosing) => return Err(Error::ChannelClosing),
                Err(e) => {
                    tracing::warn!("Contract events worker failed with {e}");
                    tokio::time::sleep(RECONNECT_BACKOFF).await;
                }
                Ok(block) => from_block = block,
            }
        }
    }
}

/// Stream logs of the given events once and send them to the user.
///
/// Past logs from `from_block` to the latest block are queried in pages,
/// after that the live subscription takes over. Returns the number of the
/// last block a log was seen in when the stream ends.
///
/// # Arguments
///
/// * `addresses`: Contracts to watch
/// * `topics`: Signatures of the events to watch
/// * `from_block`: First block to replay logs from
/// * `sender`: Where to send the decoded events
/// * `middleware`: A middleware with a pubsub transport
pub async fn run<E, B, S, M>(
    addresses: Vec<Address>,
    topics: Vec<H256>,
    from_block: B,
    mut sender: S,
    middleware: M,
) -> Result<BlockNumber>
where
    E: EthLogDecode,
    B: Into<BlockNumber> + Copy,
    M: Middleware,
    <M as Middleware>::Provider: PubsubClient,
    S: Sink<ContractEvent<E>> + Unpin,
    <S as Sink<ContractEvent<E>>>::Error: std::fmt::Debug,
{
    let from_block: BlockNumber = from_block.into();
    let mut last_seen_block = from_block;

    let latest_block = middleware
        .get_block_number()
        .await
        .map_err(|e| Error::Middleware(e.to_string()))?;

    tracing::info!("Filtering logs from {from_block:?} to {latest_block}");

    let past_filter = Filter::new()
        .from_block(from_block)
        .to_block(latest_block)
        .address(addresses.clone())
        .topic0(topics.clone());

    let filter = Filter::new()
        .from_block(latest_block)
        .address(addresses)
        .topic0(topics);

    let past_logs = middleware.get_logs_paginated(&past_filter, LOGS_PAGE_SIZE);
    let current_logs = middleware
        .subscribe_logs(&filter)
        .await
        .map_err(|e| Error::Middleware(e.to_string()))?;

    let mut logs = past_logs.chain(current_logs.map(Ok));

    while let Some(log) = logs.next().await {
        let log = match log {
            Err(e) => {
                tracing::warn!("Contract events stream ended with {e}");
                break;
            }
            Ok(log) => log,
        };

        if let Some(block_number) = forward_log(&log, &mut sender).await? {
            last_seen_block = block_number.into();
        }
    }

    tracing::info!("all event streams have terminated, exiting...");

    Ok(last_seen_block)
}

/// Decode a log and send it to the user.
///
/// Returns the block number of the log, `None` for pending logs which are skipped.
async fn forward_log<E, S>(log: &Log, sender: &mut S) -> Result<Option<u64>>
where
    E: EthLogDecode,
    S: Sink<ContractEvent<E>> + Unpin,
    <S as Sink<ContractEvent<E>>>::Error: std::fmt::Debug,
{
    CHAIN_EVENTS_METRICS.logs_received.inc();

    let Some(meta) = log_meta(log) else {
        return Ok(None);
    };

    let raw_log = RawLog {
        topics: log.topics.clone(),
        data: log.data.to_vec(),
    };

    match E::decode_log(&raw_log) {
        Ok(event) => {
            CHAIN_EVENTS_METRICS.logs_decoded.inc();

            let block_number = meta.block_number.as_u64();

            sender
                .send(ContractEvent { event, meta })
                .await
                .map_err(|_| Error::ChannelClosing)?;

            CHAIN_EVENTS_METRICS.events_sent.inc();

            Ok(Some(block_number))
        }
        Err(e) => {
            tracing::debug!(
                "Skipping undecodable log {:?} in {:?}: {e}",
                log.log_index,
                log.transaction_hash
            );

            Ok(meta.block_number.as_u64().into())
        }
    }
}

// Pending logs have no position yet.
fn log_meta(log: &Log) -> Option<LogMeta> {
    Some(LogMeta {
        address: log.address,
        block_number: log.block_number?,
        block_hash: log.block_hash?,
        transaction_hash: log.transaction_hash?,
        transaction_index: log.transaction_index?,
        log_index: log.log_index?,
    })
}

#[cfg(test)]
mod tests {
    use bindings::wnative_token::{DepositFilter, TransferFilter};
    use ethers::{
        abi::{self, Token},
        contract::EthEvent,
        types::{Address, Log, H256, U256, U64},
    };
    use event_mux::EventMux;
    use pretty_assertions::assert_eq;
    use tokio_util::sync::PollSender;

    use super::{forward_log, log_meta, ContractEvent};
    use crate::Error;

    #[derive(Debug, Clone, PartialEq, EventMux)]
    enum TokenEvents {
        Transfer(TransferFilter),
        Deposit(DepositFilter),
    }

    fn deposit_log(block_number: Option<u64>) -> Log {
        let dst = Address::repeat_byte(0x0d);

        Log {
            address: Address::repeat_byte(0x01),
            topics: vec![DepositFilter::signature(), H256::from(dst)],
            data: abi::encode(&[Token::Uint(U256::from(5))]).into(),
            block_number: block_number.map(U64::from),
            block_hash: Some(H256::repeat_byte(0xbb)),
            transaction_hash: Some(H256::repeat_byte(0xcc)),
            transaction_index: Some(U64::from(3)),
            log_index: Some(U256::from(9)),
            ..Default::default()
        }
    }

    #[test]
    fn meta_of_mined_logs() {
        let meta = log_meta(&deposit_log(Some(100))).unwrap();

        assert_eq!(meta.block_number, U64::from(100));
        assert_eq!(meta.transaction_index, U64::from(3));
        assert_eq!(meta.log_index, U256::from(9));

        assert!(log_meta(&deposit_log(None)).is_none());
    }

    #[tokio::test]
    async fn forwards_decoded_events() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(4);
        let mut sender = PollSender::new(tx);

        let block = forward_log::<TokenEvents, _>(&deposit_log(Some(100)), &mut sender)
            .await
            .unwrap();
        assert_eq!(block, Some(100));

        let ContractEvent { event, meta } = rx.recv().await.unwrap();
        let deposit = match event {
            TokenEvents::Deposit(deposit) => deposit,
            other => panic!("expected a deposit, got {other:?}"),
        };
        assert_eq!(deposit.dst, Address::repeat_byte(0x0d));
        assert_eq!(deposit.wad, U256::from(5));
        assert_eq!(meta.address, Address::repeat_byte(0x01));
    }

    #[tokio::test]
    async fn skips_pending_and_unknown_logs() {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<ContractEvent<TokenEvents>>(4);
        let mut sender = PollSender::new(tx);

        let pending = forward_log(&deposit_log(None), &mut sender).await.unwrap();
        assert_eq!(pending, None);

        let mut unknown = deposit_log(Some(7));
        unknown.topics[0] = H256::repeat_byte(0x99);
        let skipped = forward_log(&unknown, &mut sender).await.unwrap();
        assert_eq!(skipped, Some(7));

        drop(sender);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn closed_channel() {
        let (tx, rx) = tokio::sync::mpsc::channel::<ContractEvent<TokenEvents>>(4);
        let mut sender = PollSender::new(tx);
        drop(rx);

        let err = forward_log(&deposit_log(Some(100)), &mut sender)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ChannelClosing));
    }

    #[test]
    fn multiplexed_signatures() {
        assert_eq!(
            TokenEvents::signatures(),
            vec![TransferFilter::signature(), DepositFilter::signature()]
        );
    }
}
