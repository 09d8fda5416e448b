//! # Block Relay Service
//!
//! Owns the receive loop that moves blocks from the ordering service into
//! gossip for a single channel.
//!
//! ## Loop
//!
//! ```text
//! recv ──→ Status(Success)    → exit (seek must never complete)
//!      ├─→ Status(other)      → warn, continue
//!      ├─→ Unrecognized       → exit
//!      └─→ Block ──→ encode ──→ verify ──→ add_payload ──→ gossip
//!                      │          │
//!                      └──────────┴──→ drop block, continue
//! ```
//!
//! ## Termination
//!
//! Any exit (stop, receive error, success status, unrecognized message)
//! marks the relay inactive and closes the stream. There is no restart; a new
//! relay must be built over a new stream.
//!
//! ## Thread Safety
//!
//! `deliver_blocks` runs on one task while `stop` may be called from another.
//! The only state shared between them is the `done` flag; stopping also
//! closes the stream so a pending `recv` unblocks.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn, Instrument, Span};

use crate::domain::{
    encode_block, Block, ChannelId, DeliverResponse, GossipMessage, Payload, RelayConfig,
    RelayMetrics,
};
use crate::events::DeliveryOutcome;
use crate::ports::inbound::BlocksProvider;
use crate::ports::outbound::{BlockVerifier, GossipAdapter, StreamClient};

/// Block relay for one channel.
///
/// ## Dependencies
///
/// - `C: StreamClient` - delivery stream to the ordering service
/// - `G: GossipAdapter` - local buffer and broadcast
/// - `V: BlockVerifier` - block verification gate
pub struct BlockRelay<C, G, V>
where
    C: StreamClient,
    G: GossipAdapter,
    V: BlockVerifier,
{
    channel: ChannelId,
    config: RelayConfig,
    client: Arc<C>,
    gossip: Arc<G>,
    verifier: Arc<V>,
    /// Set by `stop()` and by every loop exit.
    done: AtomicBool,
    metrics: RwLock<RelayMetrics>,
    /// Logging context for everything this relay emits.
    span: Span,
}

impl<C, G, V> BlockRelay<C, G, V>
where
    C: StreamClient,
    G: GossipAdapter,
    V: BlockVerifier,
{
    /// Create a running relay with the default configuration. No I/O happens here.
    pub fn new(channel: ChannelId, client: Arc<C>, gossip: Arc<G>, verifier: Arc<V>) -> Self {
        Self::with_config(RelayConfig::default(), channel, client, gossip, verifier)
    }

    pub fn with_config(
        config: RelayConfig,
        channel: ChannelId,
        client: Arc<C>,
        gossip: Arc<G>,
        verifier: Arc<V>,
    ) -> Self {
        let span = tracing::info_span!("block_relay", channel = %channel);
        Self {
            channel,
            config,
            client,
            gossip,
            verifier,
            done: AtomicBool::new(false),
            metrics: RwLock::new(RelayMetrics::default()),
            span,
        }
    }

    /// Replace the logging span the relay reports under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn channel(&self) -> &ChannelId {
        &self.channel
    }

    /// False once stop was requested or the receive loop has exited.
    pub fn is_active(&self) -> bool {
        !self.is_done()
    }

    pub fn metrics(&self) -> RelayMetrics {
        self.metrics.read().clone()
    }

    fn is_done(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }

    fn record<F>(&self, f: F)
    where
        F: FnOnce(&mut RelayMetrics),
    {
        f(&mut self.metrics.write());
    }

    async fn run(&self) -> DeliveryOutcome {
        let _session = StreamSession {
            client: self.client.as_ref(),
            done: &self.done,
        };

        info!("Starting block delivery");
        loop {
            if self.is_done() {
                info!("Block delivery stopped");
                return DeliveryOutcome::Stopped;
            }

            let response = match self.client.recv().await {
                Ok(response) => response,
                Err(e) if self.is_done() => {
                    debug!(error = %e, "Receive interrupted by stop");
                    return DeliveryOutcome::Stopped;
                }
                Err(e) => {
                    warn!(error = %e, "Receive error");
                    return DeliveryOutcome::ReceiveFailed(e);
                }
            };

            match response {
                DeliverResponse::Status(status) if status.is_success() => {
                    error!("Received success for a seek that should never complete");
                    return DeliveryOutcome::SeekCompleted;
                }
                DeliverResponse::Status(status) => {
                    warn!(%status, "Got error status");
                    self.record(|m| m.status_warnings += 1);
                }
                DeliverResponse::Block(block) => self.relay_block(block),
                DeliverResponse::Unrecognized(kind) => {
                    warn!(message_type = %kind, "Received unknown message");
                    return DeliveryOutcome::UnrecognizedMessage(kind);
                }
            }
        }
    }

    /// Verify one block and, if accepted, hand it to the local buffer and gossip.
    fn relay_block(&self, block: Block) {
        let seq_num = block.seq_num();
        self.record(|m| m.blocks_received += 1);

        let marshaled = match encode_block(&block, self.config.max_block_size_bytes) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(seq_num, error = %e, "Error serializing block");
                self.record(|m| m.encoding_failures += 1);
                return;
            }
        };

        if let Err(e) = self
            .verifier
            .verify_block(&self.channel, seq_num, &marshaled)
        {
            error!(seq_num, error = %e, "Error verifying block");
            self.record(|m| m.verification_failures += 1);
            return;
        }

        let peers = self.gossip.peers_of_channel(&self.channel).len();
        let payload = Payload::new(seq_num, marshaled);
        let message = GossipMessage::block_for_channel(&self.channel, payload.clone());

        debug!(seq_num, peers, "Adding payload locally");
        if let Err(e) = self.gossip.add_payload(&self.channel, payload) {
            warn!(seq_num, error = %e, "Local buffer rejected payload");
            self.record(|m| m.add_payload_failures += 1);
        }

        debug!(seq_num, peers, "Gossiping block");
        self.gossip.gossip(message);

        self.record(|m| {
            m.blocks_disseminated += 1;
            m.last_seq_num = Some(seq_num);
            m.last_peer_count = peers;
        });
    }
}

#[async_trait]
impl<C, G, V> BlocksProvider for BlockRelay<C, G, V>
where
    C: StreamClient,
    G: GossipAdapter,
    V: BlockVerifier,
{
    async fn deliver_blocks(&self) -> DeliveryOutcome {
        self.run().instrument(self.span.clone()).await
    }

    fn stop(&self) {
        info!(parent: &self.span, "Stopping block relay");
        self.done.store(true, Ordering::SeqCst);
        self.client.close();
    }
}

/// Marks the relay done and closes the stream when the loop exits, whichever
/// path it exits by.
struct StreamSession<'a, C: StreamClient> {
    client: &'a C,
    done: &'a AtomicBool,
}

impl<C: StreamClient> Drop for StreamSession<'_, C> {
    fn drop(&mut self) {
        self.done.store(true, Ordering::SeqCst);
        self.client.close();
    }
}
