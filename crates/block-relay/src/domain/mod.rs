//! # Domain Layer for Block Relay
//!
//! Pure data and encoding with no I/O dependencies. This is the innermost
//! layer of the hexagonal architecture.
//!
//! ## Contents
//!
//! - **entities**: Ledger and delivery types (`Block`, `DeliverResponse`, `ChannelId`)
//! - **gossip**: Dissemination artifacts (`Payload`, `GossipMessage`, `NetworkMember`)
//! - **value_objects**: Configuration and counters (`RelayConfig`, `RelayMetrics`)
//! - **codec**: Canonical binary form of a block

mod codec;
mod entities;
mod gossip;
mod value_objects;

pub use codec::*;
pub use entities::*;
pub use gossip::*;
pub use value_objects::*;
