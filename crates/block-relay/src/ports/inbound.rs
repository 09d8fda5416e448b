//! Inbound ports (API) for the block relay.

use async_trait::async_trait;

use crate::events::DeliveryOutcome;

/// Delivers blocks of one channel from the ordering service to gossip.
///
/// `deliver_blocks` and `stop` are called from different tasks; implementors
/// are shared through `Arc`.
#[async_trait]
pub trait BlocksProvider: Send + Sync {
    /// Run the receive loop until stopped or until the stream session ends.
    async fn deliver_blocks(&self) -> DeliveryOutcome;

    /// Stop delivering blocks and release the stream.
    fn stop(&self);
}
