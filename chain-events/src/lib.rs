#![deny(unused_crate_dependencies)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![warn(unused_imports)]

//! Streaming of contract events from a node with re-connects.

mod contract_events;
mod error;
mod events;
mod metrics;

use std::time::Duration;

pub use contract_events::{run, ContractEvent, ContractEvents};
pub use error::{Error, Result};
pub use events::{DisputeGameEvents, MessengerEvents, SystemConfigEvents};

pub(crate) const RECONNECT_BACKOFF: Duration = Duration::from_secs(1);
