// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered queue of one-shot timers.

use alloc::vec::Vec;

/// Identifier of a scheduled timer.
///
/// Ids are unique within a [`TimerQueue`] and increase monotonically in
/// schedule order, so they also serve as the tie-breaker for equal deadlines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A timer that has reached its deadline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<T> {
    /// Id returned by [`TimerQueue::schedule`].
    pub id: TimerId,
    /// Deadline the timer was scheduled for.
    pub deadline: u64,
    /// Payload supplied at schedule time.
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

/// A set of pending one-shot timers ordered by deadline.
///
/// Each timer fires at most once: it is either returned by
/// [`pop_expired`](Self::pop_expired), returned by [`cancel`](Self::cancel),
/// or dropped by [`clear`](Self::clear).
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted latest-first so the next timer to fire sits at the end.
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to fire once `now >= deadline`.
    ///
    /// Timers with equal deadlines fire in schedule order.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // A newer id sorts after every existing entry with the same deadline,
        // which in latest-first order means before them.
        let at = self.entries.partition_point(|e| e.deadline > deadline);
        self.entries.insert(
            at,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired, was cancelled, or was cleared.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Returns `true` if the timer is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Pops the earliest timer whose deadline is at or before `now`.
    ///
    /// Call this in a loop to drain everything that is due.
    pub fn pop_expired(&mut self, now: u64) -> Option<Expired<T>> {
        if self.entries.last()?.deadline > now {
            return None;
        }
        let Entry {
            id,
            deadline,
            payload,
        } = self.entries.pop()?;
        Some(Expired {
            id,
            deadline,
            payload,
        })
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts can use this to decide when to wake up next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.last().map(|e| e.deadline)
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every pending timer without firing it.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
