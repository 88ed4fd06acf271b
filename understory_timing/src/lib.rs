// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI components often need "call me back in N milliseconds" behavior: the end
//! of an exit animation, a long-press delay, a tooltip timeout. This crate does
//! not own a clock or a thread. Instead, the host feeds monotonic timestamps in
//! and pulls expired timers out, on whatever thread drives its frame loop.
//!
//! The core type is [`TimerQueue`]: a deadline-ordered set of one-shot timers,
//! each carrying an application payload.
//!
//! - [`TimerQueue::schedule`] registers a payload for a deadline and returns a [`TimerId`].
//! - [`TimerQueue::cancel`] removes a pending timer; a cancelled timer never fires.
//! - [`TimerQueue::pop_expired`] yields due timers one at a time, earliest first.
//! - [`TimerQueue::clear`] drops every pending timer, which is the teardown path.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! #[derive(Debug, PartialEq)]
//! enum Job { Blink, Hide }
//!
//! let mut timers = TimerQueue::new();
//! let blink = timers.schedule(100, Job::Blink);
//! timers.schedule(250, Job::Hide);
//! assert_eq!(timers.next_deadline(), Some(100));
//!
//! // Nothing is due yet.
//! assert!(timers.pop_expired(50).is_none());
//!
//! // Cancelled timers never fire.
//! assert_eq!(timers.cancel(blink), Some(Job::Blink));
//!
//! let fired = timers.pop_expired(300).unwrap();
//! assert_eq!(fired.payload, Job::Hide);
//! assert!(timers.is_empty());
//! ```
//!
//! Timestamps are plain `u64` values in a caller-chosen unit (typically
//! milliseconds since some host epoch) and are expected to be monotonic.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{Expired, TimerId, TimerQueue};
