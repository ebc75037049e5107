//! One-shot landing timers that can be cancelled.
//!
//! Timers live in a min-heap ordered by due time, then by scheduling order.
//! Cancellation only drops the handle from the live set; stale heap entries
//! are skipped when they surface.

use crate::note::NoteId;
use fnv::FnvHashMap;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    due_ms: f64,
    handle: TimerHandle,
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slot {}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due_ms
            .total_cmp(&other.due_ms)
            .then(self.handle.cmp(&other.handle))
    }
}

#[derive(Debug, Default)]
pub struct LandingSchedule {
    heap: BinaryHeap<Reverse<Slot>>,
    live: FnvHashMap<TimerHandle, NoteId>,
    next_handle: u64,
}

impl LandingSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, note: NoteId) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.heap.push(Reverse(Slot { due_ms, handle }));
        self.live.insert(handle, note);
        handle
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.live.remove(&handle).is_some()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.live.contains_key(&handle)
    }

    /// Pop the earliest timer due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(TimerHandle, NoteId)> {
        self.prune();
        let Reverse(top) = *self.heap.peek()?;
        if top.due_ms > now_ms {
            return None;
        }
        self.heap.pop();
        self.live.remove(&top.handle).map(|note| (top.handle, note))
    }

    pub fn next_due(&mut self) -> Option<f64> {
        self.prune();
        self.heap.peek().map(|Reverse(slot)| slot.due_ms)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    fn prune(&mut self) {
        while let Some(Reverse(top)) = self.heap.peek() {
            if self.live.contains_key(&top.handle) {
                break;
            }
            self.heap.pop();
        }
    }
}
