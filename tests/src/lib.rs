//! # Block Relay Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Encoding and loop throughput
//! └── src/integration/  # Relay driven end to end through its adapters
//!     ├── delivery_flows.rs   # Loop termination and ordering scenarios
//!     └── trust_boundary.rs   # Forged and malformed blocks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p relay-tests
//! cargo test -p relay-tests integration::trust_boundary
//! cargo bench -p relay-tests
//! ```

pub mod integration;

use std::sync::Once;

static LOGGING: Once = Once::new();

/// Install a quiet subscriber once per test binary.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        // Another harness may already own the global subscriber.
        let _ = relay_telemetry::init_logging(&relay_telemetry::TelemetryConfig::for_testing());
    });
}
