//! Cross-adapter scenarios for the block relay.

pub mod trust_boundary;
