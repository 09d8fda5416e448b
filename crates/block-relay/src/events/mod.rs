//! Error types and loop outcomes for the block relay.

use thiserror::Error;

/// Block relay errors.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Delivery stream closed")]
    StreamClosed,

    #[error("Receive error: {0}")]
    Receive(String),

    #[error("Send error: {0}")]
    Send(String),

    #[error("Failed encoding block {seq_num}: {reason}")]
    Encoding { seq_num: u64, reason: String },

    #[error("Failed decoding block: {0}")]
    Decoding(String),

    #[error("Block {seq_num} failed verification: {reason}")]
    VerificationFailed { seq_num: u64, reason: String },

    #[error("Failed adding payload to local buffer: {0}")]
    AddPayload(String),

    #[error("Ledger error: {0}")]
    Ledger(String),
}

/// Why a `deliver_blocks` loop exited.
///
/// Every variant is terminal for the relay instance; resuming delivery means
/// constructing a new relay over a new stream.
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// `stop()` was requested.
    Stopped,
    /// The stream failed to yield the next message.
    ReceiveFailed(RelayError),
    /// The ordering service reported success for a seek that must never complete.
    SeekCompleted,
    /// A message type the relay does not understand.
    UnrecognizedMessage(String),
}

impl DeliveryOutcome {
    /// True for every exit that was not requested through `stop()`.
    pub fn is_fault(&self) -> bool {
        !matches!(self, DeliveryOutcome::Stopped)
    }
}
