//! Metrics for chain events

use vise::{Counter, Metrics};

/// Chain events metrics.
#[derive(Debug, Metrics)]
#[metrics(prefix = "chain_events")]
pub(super) struct ChainEventsMetrics {
    /// Number of logs received from the node
    pub logs_received: Counter,

    /// Number of logs successfully decoded
    pub logs_decoded: Counter,

    /// Number of events sent to the consumer
    pub events_sent: Counter,

    /// Number of successful websocket reconnects
    pub successful_reconnects: Counter,

    /// Number of reconnect errors on websocket
    pub reconnects_on_error: Counter,
}

#[vise::register]
pub(super) static CHAIN_EVENTS_METRICS: vise::Global<ChainEventsMetrics> = vise::Global::new();
