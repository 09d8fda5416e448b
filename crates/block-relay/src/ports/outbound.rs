//! Outbound ports (SPI) for the block relay.
//!
//! Implemented by adapters outside this crate (gRPC delivery client, gossip
//! service, message crypto service, ledger committer).

use async_trait::async_trait;

use crate::domain::{ChannelId, DeliverResponse, Envelope, GossipMessage, NetworkMember, Payload};
use crate::events::RelayError;

/// Bidirectional delivery stream to the ordering service.
///
/// `close` may be called from another task while `recv` is pending; the
/// pending `recv` must then resolve with an error.
#[async_trait]
pub trait StreamClient: Send + Sync {
    /// Wait for the next response from the ordering service.
    async fn recv(&self) -> Result<DeliverResponse, RelayError>;

    /// Send an envelope to the ordering service.
    async fn send(&self, envelope: Envelope) -> Result<(), RelayError>;

    /// Close the stream and its underlying connection. Idempotent.
    fn close(&self);
}

/// Cryptographic gate between ordering-service bytes and ledger data.
pub trait BlockVerifier: Send + Sync {
    /// Accept or reject `block` as block `seq_num` of `channel`.
    ///
    /// `block` is the canonical encoding produced by [`crate::encode_block`].
    fn verify_block(
        &self,
        channel: &ChannelId,
        seq_num: u64,
        block: &[u8],
    ) -> Result<(), RelayError>;
}

/// Gossip service functionality required by the relay.
pub trait GossipAdapter: Send + Sync {
    /// Current members of `channel`.
    fn peers_of_channel(&self, channel: &ChannelId) -> Vec<NetworkMember>;

    /// Add a payload to the local state sync buffer.
    fn add_payload(&self, channel: &ChannelId, payload: Payload) -> Result<(), RelayError>;

    /// Gossip the message across the peers. Fire-and-forget.
    fn gossip(&self, message: GossipMessage);
}

/// Local ledger view used by callers to choose the initial seek position
/// before constructing a relay.
pub trait LedgerInfo: Send + Sync {
    /// Current local ledger height.
    fn ledger_height(&self) -> Result<u64, RelayError>;
}
