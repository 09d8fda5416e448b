//! # Gossip Artifacts
//!
//! The only boundary artifacts the relay produces. They are consumed by the
//! gossip subsystem (local state buffer and epidemic broadcast).

use serde::{Deserialize, Serialize};

use super::ChannelId;

/// Sequence number plus canonical block bytes.
///
/// Built once per verified block and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub seq_num: u64,
    pub data: Vec<u8>,
}

impl Payload {
    pub fn new(seq_num: u64, data: Vec<u8>) -> Self {
        Self { seq_num, data }
    }
}

/// Routing scope of a gossip message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GossipTag {
    #[default]
    Undefined,
    Empty,
    OrgOnly,
    ChanOnly,
    /// Deliver to peers in the same channel and organization.
    ChanAndOrg,
    ChanOrOrg,
}

/// Block-carrying gossip content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataMessage {
    pub payload: Payload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GossipContent {
    Data(DataMessage),
}

/// Gossip envelope handed to the broadcast layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GossipMessage {
    /// Left at 0: relay-originated messages are not deduplicated by nonce.
    pub nonce: u64,
    pub tag: GossipTag,
    pub channel: Vec<u8>,
    pub content: GossipContent,
}

impl GossipMessage {
    /// Wraps a block payload for dissemination inside `channel`.
    pub fn block_for_channel(channel: &ChannelId, payload: Payload) -> Self {
        Self {
            nonce: 0,
            tag: GossipTag::ChanAndOrg,
            channel: channel.as_bytes().to_vec(),
            content: GossipContent::Data(DataMessage { payload }),
        }
    }

    /// The block payload carried by this message.
    pub fn payload(&self) -> &Payload {
        match &self.content {
            GossipContent::Data(data) => &data.payload,
        }
    }
}

/// A peer that is a member of a channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkMember {
    pub pki_id: Vec<u8>,
    pub endpoint: String,
}

impl NetworkMember {
    pub fn new(pki_id: impl Into<Vec<u8>>, endpoint: impl Into<String>) -> Self {
        Self {
            pki_id: pki_id.into(),
            endpoint: endpoint.into(),
        }
    }
}
