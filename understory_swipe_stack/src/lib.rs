// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe_stack --heading-base-level=0

//! Understory Swipe Stack: a renderer-agnostic swipe-to-dismiss card stack.
//!
//! A stack shows its first few items as overlapping cards. The user drags the
//! front card sideways; past a threshold, releasing dismisses it and the card
//! beneath moves up to take its place. This crate is the interaction engine
//! behind that widget. It consumes drag translations and host timestamps, and
//! produces per-card render parameters plus a handful of notifications.
//!
//! The pieces, leaf to root:
//!
//! - [`Direction`]: classifies a horizontal offset as left, right, or idle.
//! - [`drag::DragTracker`]: applies the dead-zone slack, tracks direction, and
//!   reports threshold-crossing edges.
//! - [`projector`]: pure functions computing each visible slot's
//!   [`CardTransform`] (translation, rotation, scale, opacity, z-order).
//! - [`pop::PopController`]: moves the front card into its exit animation,
//!   one card at a time.
//! - [`SwipeConfig`] and [`SwipeCallbacks`]: tuning and host handlers.
//! - [`SwipeStack`]: the component tying them together over a
//!   [`understory_timing::TimerQueue`] of animation completions.
//!
//! The crate does not capture input, query screen sizes, or paint. Hosts:
//!
//! - Forward drag samples to [`SwipeStack::drag_changed`] and the release to
//!   [`SwipeStack::drag_ended`] (or use the pointer-position variants).
//! - Call [`SwipeStack::advance`] once per frame with a monotonic timestamp.
//! - Paint the cards in [`SwipeStack::frame`] using each [`CardTransform`],
//!   for example through [`CardTransform::to_affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use understory_swipe_stack::{Direction, DragOutcome, SwipeConfig, SwipeStack};
//!
//! let config = SwipeConfig::default().with_visible_count(3);
//! let mut stack = SwipeStack::with_config(1..=5, config);
//!
//! // A short drag springs back.
//! stack.drag_changed(Vec2::new(60.0, 0.0));
//! assert_eq!(stack.drag_ended(Vec2::new(60.0, 0.0), 0), DragOutcome::Cancelled);
//! assert_eq!(stack.front(), Some(&1));
//!
//! // A long one dismisses the front card.
//! stack.advance(400);
//! stack.drag_changed(Vec2::new(-240.0, 0.0));
//! assert_eq!(
//!     stack.drag_ended(Vec2::new(-240.0, 0.0), 400),
//!     DragOutcome::Committed(Direction::Left)
//! );
//! assert_eq!(stack.front(), Some(&2));
//!
//! let frame = stack.frame();
//! assert_eq!(frame.cards.len(), 3);
//! assert_eq!(frame.exiting.map(|card| *card.item), Some(1));
//! ```
//!
//! ## Timing
//!
//! Timestamps are host-supplied `u64` values, conventionally milliseconds.
//! The stack never reads a clock: animations are evaluated at the time of the
//! latest call to [`SwipeStack::advance`], and their completions fire from it.
//! [`SwipeStack::teardown`] drops pending completions so no handler runs
//! after the host is done with the stack.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to `kurbo`.
//! - `libm`: use `libm` for `kurbo`'s float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`SwipeConfig`], [`Direction`],
//!   and [`Easing`].
//!
//! This crate is `no_std` compatible (with `alloc`). Diagnostics are emitted
//! through the `log` facade.

#![no_std]

extern crate alloc;

mod animation;
mod callbacks;
mod config;
mod direction;
mod error;
mod stack;

pub mod drag;
pub mod pop;
pub mod projector;

pub use animation::{Easing, OffsetTween};
pub use callbacks::SwipeCallbacks;
pub use config::SwipeConfig;
pub use direction::Direction;
pub use error::PopError;
pub use projector::{CardTransform, SlotProjection};
pub use stack::{CardFrame, DragOutcome, Frame, SwipeStack};
