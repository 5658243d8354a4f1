// Virtual clock and timer queue
//
// All delayed work on the page (typing steps, counter ticks, notification
// dismissal) runs off this queue instead of wall-clock timers, so a test or
// script can advance time deterministically. Timers carry a typed payload
// rather than a closure; the controller routes fired payloads back through
// a match, which keeps scheduling free of borrow entanglement.
//
// Ordering: timers fire in due-time order; among timers due at the same
// instant, registration order wins (a monotonic sequence number breaks ties).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use tracing::trace;

/// Handle to a scheduled timer, usable for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Entry<K> {
    due: u64,
    seq: u64,
    // Fields below don't participate in ordering, but deriving Ord over the
    // whole struct is safe: (due, seq) is already unique per entry.
    id: TimerId,
    period: Option<u64>,
    kind: K,
}

/// Deterministic millisecond clock with one-shot and repeating timers
#[derive(Debug)]
pub struct Clock<K> {
    now: u64,
    next_seq: u64,
    next_id: u64,
    queue: BinaryHeap<Reverse<Entry<K>>>,
    cancelled: HashSet<TimerId>,
}

impl<K: Clone + Ord + std::fmt::Debug> Clock<K> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            next_id: 0,
            queue: BinaryHeap::new(),
            cancelled: HashSet::new(),
        }
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.now
    }

    fn alloc_id(&mut self) -> TimerId {
        self.next_id += 1;
        TimerId(self.next_id)
    }

    fn schedule(&mut self, due: u64, period: Option<u64>, id: TimerId, kind: K) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Entry {
            due,
            seq,
            id,
            period,
            kind,
        }));
    }

    /// Schedule `kind` to fire once, `delay_ms` from now
    pub fn set_timeout(&mut self, kind: K, delay_ms: u64) -> TimerId {
        let id = self.alloc_id();
        trace!(?kind, delay_ms, "set_timeout");
        self.schedule(self.now + delay_ms, None, id, kind);
        id
    }

    /// Schedule `kind` to fire every `period_ms`, first firing one period
    /// from now
    pub fn set_interval(&mut self, kind: K, period_ms: u64) -> TimerId {
        let id = self.alloc_id();
        trace!(?kind, period_ms, "set_interval");
        // A zero period would spin forever inside a single advance
        let period_ms = period_ms.max(1);
        self.schedule(self.now + period_ms, Some(period_ms), id, kind);
        id
    }

    /// Cancel a timer; pending and future firings are dropped
    pub fn cancel(&mut self, id: TimerId) {
        self.cancelled.insert(id);
    }

    /// Pop the earliest timer due at or before `deadline`, advancing `now`
    /// to its due time. Returns `None` once nothing is due; the caller then
    /// finishes the advance with `settle`.
    ///
    /// Repeating timers are re-queued before being returned, so a handler
    /// that cancels the returned id stops the repetition.
    pub fn pop_due(&mut self, deadline: u64) -> Option<(TimerId, K)> {
        while let Some(Reverse(entry)) = self.queue.peek() {
            if entry.due > deadline {
                return None;
            }
            let Reverse(entry) = self.queue.pop().expect("peeked entry vanished");
            if self.cancelled.contains(&entry.id) {
                // Each id has exactly one queue entry, so the tombstone can
                // be dropped as soon as it is seen
                self.cancelled.remove(&entry.id);
                continue;
            }
            self.now = self.now.max(entry.due);
            if let Some(period) = entry.period {
                self.schedule(entry.due + period, Some(period), entry.id, entry.kind.clone());
            }
            return Some((entry.id, entry.kind));
        }
        None
    }

    /// Finish an advance: move `now` to `deadline` after draining due timers
    pub fn settle(&mut self, deadline: u64) {
        self.now = self.now.max(deadline);
    }

    /// Number of live (non-cancelled) scheduled timers
    pub fn pending(&self) -> usize {
        self.queue
            .iter()
            .filter(|Reverse(e)| !self.cancelled.contains(&e.id))
            .count()
    }
}

impl<K: Clone + Ord + std::fmt::Debug> Default for Clock<K> {
    fn default() -> Self {
        Self::new()
    }
}
