//! # Adapters
//!
//! In-process implementations of the outbound ports. Production wiring
//! supplies gRPC and gossip-service backed adapters instead; these ones drive
//! the relay in tests and local tooling.

mod gossip;
mod ledger;
mod stream;

pub use gossip::{GossipRecord, RecordingGossip};
pub use ledger::StaticLedger;
pub use stream::{InMemoryStream, StreamFeeder};
