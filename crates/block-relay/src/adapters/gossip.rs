//! Recording gossip adapter.
//!
//! Keeps every local-buffer add and every broadcast in a single ordered log,
//! so callers can check both what was disseminated and in which order.

use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{ChannelId, GossipMessage, NetworkMember, Payload};
use crate::events::RelayError;
use crate::ports::outbound::GossipAdapter;

/// One call observed by [`RecordingGossip`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GossipRecord {
    PayloadAdded { channel: ChannelId, payload: Payload },
    Gossiped(GossipMessage),
}

/// Gossip adapter that records calls instead of talking to the network.
#[derive(Default)]
pub struct RecordingGossip {
    members: RwLock<Vec<NetworkMember>>,
    records: Mutex<Vec<GossipRecord>>,
    reject_payloads: AtomicBool,
}

impl RecordingGossip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<NetworkMember>) -> Self {
        Self {
            members: RwLock::new(members),
            ..Self::default()
        }
    }

    /// Make `add_payload` fail from now on (or stop failing).
    pub fn reject_payloads(&self, reject: bool) {
        self.reject_payloads.store(reject, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<GossipRecord> {
        self.records.lock().clone()
    }

    /// Payloads handed to the local buffer, in call order.
    pub fn added_payloads(&self) -> Vec<Payload> {
        self.records
            .lock()
            .iter()
            .filter_map(|r| match r {
                GossipRecord::PayloadAdded { payload, .. } => Some(payload.clone()),
                GossipRecord::Gossiped(_) => None,
            })
            .collect()
    }

    /// Messages broadcast, in call order.
    pub fn gossiped(&self) -> Vec<GossipMessage> {
        self.records
            .lock()
            .iter()
            .filter_map(|r| match r {
                GossipRecord::Gossiped(msg) => Some(msg.clone()),
                GossipRecord::PayloadAdded { .. } => None,
            })
            .collect()
    }

    pub fn added_seq_nums(&self) -> Vec<u64> {
        self.added_payloads().iter().map(|p| p.seq_num).collect()
    }

    pub fn gossiped_seq_nums(&self) -> Vec<u64> {
        self.gossiped().iter().map(|m| m.payload().seq_num).collect()
    }
}

impl GossipAdapter for RecordingGossip {
    fn peers_of_channel(&self, _channel: &ChannelId) -> Vec<NetworkMember> {
        self.members.read().clone()
    }

    fn add_payload(&self, channel: &ChannelId, payload: Payload) -> Result<(), RelayError> {
        if self.reject_payloads.load(Ordering::SeqCst) {
            return Err(RelayError::AddPayload(format!(
                "buffer rejected payload {}",
                payload.seq_num
            )));
        }
        self.records.lock().push(GossipRecord::PayloadAdded {
            channel: channel.clone(),
            payload,
        });
        Ok(())
    }

    fn gossip(&self, message: GossipMessage) {
        self.records.lock().push(GossipRecord::Gossiped(message));
    }
}
