//! Value objects for relay configuration and observability.

use serde::{Deserialize, Serialize};

/// Default upper bound on the canonical encoding of a single block.
pub const DEFAULT_MAX_BLOCK_SIZE_BYTES: u64 = 10 * 1024 * 1024; // 10 MB

/// Block relay configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Blocks whose canonical encoding exceeds this size are dropped
    /// before verification.
    pub max_block_size_bytes: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            max_block_size_bytes: DEFAULT_MAX_BLOCK_SIZE_BYTES,
        }
    }
}

impl RelayConfig {
    /// Create a config for testing (smaller values).
    pub fn for_testing() -> Self {
        Self {
            max_block_size_bytes: 64 * 1024,
        }
    }
}

/// Counters describing what a relay has done so far.
///
/// Observational only; nothing in the receive loop branches on them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelayMetrics {
    /// Block messages read from the stream.
    pub blocks_received: u64,
    /// Blocks that passed verification and were handed to gossip.
    pub blocks_disseminated: u64,
    /// Blocks dropped because they could not be encoded.
    pub encoding_failures: u64,
    /// Blocks dropped by the verifier.
    pub verification_failures: u64,
    /// Non-success status messages tolerated by the loop.
    pub status_warnings: u64,
    /// Local buffer rejections (dissemination still proceeds).
    pub add_payload_failures: u64,
    /// Sequence number of the last disseminated block.
    pub last_seq_num: Option<u64>,
    /// Channel membership size observed for the last disseminated block.
    pub last_peer_count: usize,
}
