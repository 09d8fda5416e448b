//! Fixed-height ledger view.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::events::RelayError;
use crate::ports::outbound::LedgerInfo;

/// Ledger whose height only changes when told to.
#[derive(Debug, Default)]
pub struct StaticLedger {
    height: AtomicU64,
}

impl StaticLedger {
    pub fn new(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    pub fn set_height(&self, height: u64) {
        self.height.store(height, Ordering::SeqCst);
    }
}

impl LedgerInfo for StaticLedger {
    fn ledger_height(&self) -> Result<u64, RelayError> {
        Ok(self.height.load(Ordering::SeqCst))
    }
}
