//! Hexagonal ports for the block relay.

pub mod inbound;
pub mod outbound;
