//! # Block Relay
//!
//! Pulls finalized blocks from the ordering service, verifies each one and
//! disseminates it to the peers of a channel using epidemic gossip.
//!
//! ## Architecture Role
//!
//! ```text
//! [Ordering Service] ──DeliverResponse──→ [Block Relay]
//!                                              │
//!                                              ↓ verify (BlockVerifier)
//!                                              │
//!                                  ┌───────────┴───────────┐
//!                                  ↓                       ↓
//!                           add_payload              gossip(msg)
//!                          (local buffer)        (channel + org peers)
//! ```
//!
//! ## Security
//!
//! - Bytes from the ordering service are untrusted until `BlockVerifier`
//!   accepts them for `(channel, seq_num)`
//! - Rejected blocks → SILENT DROP, the relay keeps running
//! - A success status or an unrecognized message terminates the stream session

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

pub use domain::*;
pub use events::{DeliveryOutcome, RelayError};
pub use ports::inbound::BlocksProvider;
pub use ports::outbound::{BlockVerifier, GossipAdapter, LedgerInfo, StreamClient};
pub use service::BlockRelay;
