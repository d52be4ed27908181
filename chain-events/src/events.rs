//! Multiplexers of the events of the bound contracts.

use bindings::{
    dispute_game_factory::{DisputeGameCreatedFilter, ImplementationSetFilter},
    l1_cross_domain_messenger::{
        FailedRelayedMessageFilter, RelayedMessageFilter, SentMessageExtension1Filter,
        SentMessageFilter,
    },
    system_config::{ConfigUpdateFilter, InitializedFilter, OwnershipTransferredFilter},
};
use event_mux::EventMux;

/// Events of the `SystemConfig` contract.
#[derive(Debug, Clone, PartialEq, EventMux)]
pub enum SystemConfigEvents {
    /// A config value was updated.
    ConfigUpdate(ConfigUpdateFilter),

    /// The owner changed.
    OwnershipTransferred(OwnershipTransferredFilter),

    /// The proxy was initialized.
    Initialized(InitializedFilter),
}

/// Events of the `L1CrossDomainMessenger` contract.
#[derive(Debug, Clone, PartialEq, EventMux)]
pub enum MessengerEvents {
    /// A message was sent to L2.
    SentMessage(SentMessageFilter),

    /// Value sent along with the preceding `SentMessage`.
    SentMessageExtension1(SentMessageExtension1Filter),

    /// A message from L2 was relayed.
    RelayedMessage(RelayedMessageFilter),

    /// Relaying a message from L2 failed.
    FailedRelayedMessage(FailedRelayedMessageFilter),
}

/// Events of the `DisputeGameFactory` contract.
#[derive(Debug, Clone, PartialEq, EventMux)]
pub enum DisputeGameEvents {
    /// A new dispute game was created.
    DisputeGameCreated(DisputeGameCreatedFilter),

    /// The implementation of a game type was set.
    ImplementationSet(ImplementationSetFilter),
}
