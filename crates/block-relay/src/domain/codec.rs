//! Canonical binary form of a block.
//!
//! Fixed-width little-endian bincode. The verifier signs off on exactly these
//! bytes and the same bytes travel in the gossip payload, so every relay must
//! produce an identical encoding for an identical block.

use bincode::Options;

use super::Block;
use crate::events::RelayError;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
}

/// Encode `block`, failing if the result would exceed `limit` bytes.
pub fn encode_block(block: &Block, limit: u64) -> Result<Vec<u8>, RelayError> {
    options()
        .with_limit(limit)
        .serialize(block)
        .map_err(|e| RelayError::Encoding {
            seq_num: block.seq_num(),
            reason: e.to_string(),
        })
}

/// Decode a block previously produced by [`encode_block`].
pub fn decode_block(bytes: &[u8]) -> Result<Block, RelayError> {
    options()
        .deserialize(bytes)
        .map_err(|e| RelayError::Decoding(e.to_string()))
}
