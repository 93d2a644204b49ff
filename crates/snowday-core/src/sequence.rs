//! Request sequencing for overlapping lookups.
//!
//! A lookup cannot be cancelled once started, so a slow early request may
//! finish after a newer one. Every run takes a ticket up front; callers apply
//! a result only if its ticket is still the newest they have seen.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// Monotonically increasing ticket identifying one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues tickets. Shared by reference between concurrent runs.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last_issued: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. The first ticket is 1.
    pub fn next_ticket(&self) -> RequestTicket {
        RequestTicket(self.last_issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True if no ticket has been issued after `ticket`.
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.last_issued.load(Ordering::SeqCst) == ticket.0
    }
}

/// Holds the most recent result, rejecting anything older than what it has.
#[derive(Debug)]
pub struct LatestResult<T> {
    slot: Mutex<Option<(RequestTicket, T)>>,
}

impl<T> Default for LatestResult<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T: Clone> LatestResult<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` if `ticket` is newer than the stored one.
    /// Returns false when the value was stale and dropped.
    pub fn apply(&self, ticket: RequestTicket, value: T) -> bool {
        let mut slot = self.slot.lock();
        match slot.as_ref() {
            Some((current, _)) if *current >= ticket => {
                tracing::debug!(
                    "Discarding stale result #{} (have #{})",
                    ticket.value(),
                    current.value()
                );
                false
            }
            _ => {
                *slot = Some((ticket, value));
                true
            }
        }
    }

    pub fn get(&self) -> Option<T> {
        self.slot.lock().as_ref().map(|(_, v)| v.clone())
    }

    pub fn ticket(&self) -> Option<RequestTicket> {
        self.slot.lock().as_ref().map(|(t, _)| *t)
    }
}
