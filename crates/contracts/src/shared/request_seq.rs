use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ticket handed out for one async request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter shared between an issuer and its async
/// completions. Only the most recently issued ticket is current, so a
/// superseded completion can tell it must not write state.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }
}
