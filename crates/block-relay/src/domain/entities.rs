//! # Core Domain Entities
//!
//! Defines the ledger and delivery data structures the relay consumes.
//!
//! ## Entities
//!
//! - [`ChannelId`]: Opaque identifier of a ledger partition
//! - [`Block`]: Ordered ledger unit received from the ordering service
//! - [`Status`]: Terminal status code carried by a delivery response
//! - [`DeliverResponse`]: One message read from the delivery stream
//! - [`Envelope`]: Signed request sent towards the ordering service

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// Identifier of a channel (ledger partition).
///
/// Immutable for the lifetime of a relay. The bytes are opaque; `Display`
/// renders them as lossy UTF-8 for logging.
///
/// # Example
///
/// ```rust
/// use block_relay::ChannelId;
///
/// let channel = ChannelId::from("testchain");
/// assert_eq!(channel.as_bytes(), b"testchain");
/// assert_eq!(channel.to_string(), "testchain");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(Vec<u8>);

impl ChannelId {
    pub fn new(id: impl Into<Vec<u8>>) -> Self {
        Self(id.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        Self(id.as_bytes().to_vec())
    }
}

impl From<String> for ChannelId {
    fn from(id: String) -> Self {
        Self(id.into_bytes())
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Block header.
///
/// # Fields
///
/// - `number`: Sequence number of the block within its channel
/// - `previous_hash`: Hash of the previous block header (chain linkage)
/// - `data_hash`: SHA-256 over the block's data entries
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub number: u64,
    pub previous_hash: Hash,
    pub data_hash: Hash,
}

/// Ordered list of serialized entries carried by a block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockData {
    pub data: Vec<Vec<u8>>,
}

/// Block metadata (signatures, commit flags) indexed by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMetadata {
    pub metadata: Vec<Vec<u8>>,
}

/// A ledger block as delivered by the ordering service.
///
/// Never constructed by the relay itself outside of tests; it arrives on the
/// delivery stream and is re-encoded into its canonical form for verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub data: BlockData,
    pub metadata: BlockMetadata,
}

impl Block {
    /// Creates a block, computing `data_hash` from `entries`.
    pub fn new(number: u64, previous_hash: Hash, entries: Vec<Vec<u8>>) -> Self {
        let data = BlockData { data: entries };
        Self {
            header: BlockHeader {
                number,
                previous_hash,
                data_hash: data.hash(),
            },
            data,
            metadata: BlockMetadata::default(),
        }
    }

    /// Sequence number of this block within its channel.
    pub fn seq_num(&self) -> u64 {
        self.header.number
    }
}

impl BlockData {
    /// SHA-256 over the concatenated entries.
    pub fn hash(&self) -> Hash {
        let mut hasher = Sha256::new();
        for entry in &self.data {
            hasher.update(entry);
        }
        hasher.finalize().into()
    }
}

/// Status codes reported by the ordering service.
///
/// Codes follow HTTP semantics. Codes outside the known set collapse to
/// [`Status::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Unknown,
    Success,
    BadRequest,
    Forbidden,
    NotFound,
    RequestEntityTooLarge,
    InternalServerError,
    NotImplemented,
    ServiceUnavailable,
}

impl Status {
    pub fn code(&self) -> u16 {
        match self {
            Status::Unknown => 0,
            Status::Success => 200,
            Status::BadRequest => 400,
            Status::Forbidden => 403,
            Status::NotFound => 404,
            Status::RequestEntityTooLarge => 413,
            Status::InternalServerError => 500,
            Status::NotImplemented => 501,
            Status::ServiceUnavailable => 503,
        }
    }

    pub fn from_code(code: u16) -> Self {
        match code {
            200 => Status::Success,
            400 => Status::BadRequest,
            403 => Status::Forbidden,
            404 => Status::NotFound,
            413 => Status::RequestEntityTooLarge,
            500 => Status::InternalServerError,
            501 => Status::NotImplemented,
            503 => Status::ServiceUnavailable,
            _ => Status::Unknown,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

/// One message read from the delivery stream.
///
/// The set of variants is closed: anything the transport cannot map to a
/// status or a block arrives as `Unrecognized` and is handled explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliverResponse {
    /// Terminal status of the current seek.
    Status(Status),
    /// Next block of the channel.
    Block(Block),
    /// A message type this relay does not understand (name of the type).
    Unrecognized(String),
}

/// Signed request sent to the ordering service (e.g. a seek).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
}
