//! Metrics for bindings

#![allow(unexpected_cfgs)]

use std::time::Duration;

use vise::{Buckets, Counter, Histogram, Metrics};

/// Bindings metrics.
#[derive(Debug, Metrics)]
#[metrics(prefix = "bindings")]
pub(super) struct BindingsMetrics {
    /// Storage layouts served without loading artifacts
    pub layout_cache_hits: Counter,

    /// Storage layouts that had to be loaded from artifacts
    pub layout_cache_misses: Counter,

    /// Time spent loading a storage layout from artifacts
    #[metrics(buckets = Buckets::LATENCIES)]
    pub layout_load: Histogram<Duration>,

    /// Storage slots read by label
    pub storage_reads: Counter,
}

#[vise::register]
pub(super) static BINDINGS_METRICS: vise::Global<BindingsMetrics> = vise::Global::new();
