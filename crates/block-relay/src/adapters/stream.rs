//! In-memory delivery stream.
//!
//! Responses are pushed through a [`StreamFeeder`]; `recv` resolves with the
//! next pushed response or with `StreamClosed` once the stream is closed or
//! every feeder has been dropped.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{mpsc, watch};

use crate::domain::{Block, DeliverResponse, Envelope, Status};
use crate::events::RelayError;
use crate::ports::outbound::StreamClient;

type Response = Result<DeliverResponse, RelayError>;

/// Producer side of an [`InMemoryStream`].
#[derive(Clone)]
pub struct StreamFeeder {
    tx: mpsc::UnboundedSender<Response>,
}

impl StreamFeeder {
    /// Queue a response. Returns false if the stream has been dropped.
    pub fn push(&self, response: Response) -> bool {
        self.tx.send(response).is_ok()
    }

    pub fn push_block(&self, block: Block) -> bool {
        self.push(Ok(DeliverResponse::Block(block)))
    }

    pub fn push_status(&self, status: Status) -> bool {
        self.push(Ok(DeliverResponse::Status(status)))
    }

    pub fn push_unrecognized(&self, type_name: &str) -> bool {
        self.push(Ok(DeliverResponse::Unrecognized(type_name.to_string())))
    }

    pub fn push_error(&self, error: RelayError) -> bool {
        self.push(Err(error))
    }
}

/// Stream client backed by a tokio channel.
pub struct InMemoryStream {
    responses: tokio::sync::Mutex<mpsc::UnboundedReceiver<Response>>,
    closed: watch::Sender<bool>,
    sent: Mutex<Vec<Envelope>>,
    recv_calls: AtomicUsize,
    close_calls: AtomicUsize,
    releases: AtomicUsize,
}

impl InMemoryStream {
    /// Create an open stream and the feeder that drives it.
    pub fn new() -> (Self, StreamFeeder) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (closed, _) = watch::channel(false);
        let stream = Self {
            responses: tokio::sync::Mutex::new(rx),
            closed,
            sent: Mutex::new(Vec::new()),
            recv_calls: AtomicUsize::new(0),
            close_calls: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
        };
        (stream, StreamFeeder { tx })
    }

    /// Stream that yields `responses` in order, then reports end of stream.
    pub fn scripted(responses: Vec<Response>) -> Self {
        let (stream, feeder) = Self::new();
        for response in responses {
            feeder.push(response);
        }
        stream
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Number of `recv` calls made so far.
    pub fn recv_calls(&self) -> usize {
        self.recv_calls.load(Ordering::SeqCst)
    }

    /// Number of `close` calls made so far.
    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }

    /// Number of times the underlying connection was actually released.
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<Envelope> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl StreamClient for InMemoryStream {
    async fn recv(&self) -> Result<DeliverResponse, RelayError> {
        self.recv_calls.fetch_add(1, Ordering::SeqCst);

        let mut closed = self.closed.subscribe();
        if *closed.borrow_and_update() {
            return Err(RelayError::StreamClosed);
        }

        let mut responses = self.responses.lock().await;
        tokio::select! {
            biased;
            // `closed` only ever flips false → true, so any change means closed.
            _ = closed.changed() => Err(RelayError::StreamClosed),
            next = responses.recv() => next.unwrap_or(Err(RelayError::StreamClosed)),
        }
    }

    async fn send(&self, envelope: Envelope) -> Result<(), RelayError> {
        if self.is_closed() {
            return Err(RelayError::Send("stream closed".to_string()));
        }
        self.sent.lock().push(envelope);
        Ok(())
    }

    fn close(&self) {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        let released = self.closed.send_if_modified(|closed| {
            if *closed {
                false
            } else {
                *closed = true;
                true
            }
        });
        if released {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }
}
