// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pop controller: move the front card from the live list into its exit animation.
//!
//! A card goes through `live → committed → exiting → removed`. Committing
//! removes it from the front of the live list at once, so the next card
//! becomes the front with a neutral offset, while the popped card animates
//! out on its own track. Only one card may be exiting at a time.
//!
//! The controller does not own a clock or fire callbacks. It records the
//! exit timer id handed to it by the caller and hands the popped card back
//! when that timer completes.

use alloc::vec::Vec;

use kurbo::Vec2;
use understory_timing::TimerId;

use crate::animation::OffsetTween;
use crate::config::SwipeConfig;
use crate::direction::Direction;
use crate::error::PopError;

/// A card that has left the live list and is animating off-screen.
#[derive(Clone, Debug)]
pub struct PoppedItem<T> {
    /// The popped item.
    pub item: T,
    /// Direction the card is leaving in.
    pub direction: Direction,
    /// Exit animation from the commit-time offset to the off-screen target.
    pub tween: OffsetTween,
    /// Timer that completes the exit.
    pub timer: TimerId,
}

impl<T> PoppedItem<T> {
    /// Offset of the exiting card at `now`.
    #[must_use]
    pub fn offset_at(&self, now: u64) -> Vec2 {
        self.tween.value_at(now)
    }
}

/// Owns the at-most-one card that is currently exiting.
#[derive(Clone, Debug)]
pub struct PopController<T> {
    popped: Option<PoppedItem<T>>,
}

impl<T> Default for PopController<T> {
    fn default() -> Self {
        Self { popped: None }
    }
}

impl<T> PopController<T> {
    /// Creates a controller with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a commit would be accepted right now.
    pub fn can_commit(&self, items: &[T], direction: Direction) -> Result<(), PopError> {
        if self.popped.is_some() {
            Err(PopError::InFlight)
        } else if items.is_empty() {
            Err(PopError::Empty)
        } else if direction.is_idle() {
            Err(PopError::NoDirection)
        } else {
            Ok(())
        }
    }

    /// Removes the front item and starts its exit animation.
    ///
    /// `offset` is the card's offset at the moment of commit; the exit runs
    /// horizontally from there to `exit_distance` on the committed side,
    /// keeping its vertical offset. `schedule` receives the exit deadline and
    /// returns the id of the timer that will complete it.
    pub fn commit(
        &mut self,
        items: &mut Vec<T>,
        direction: Direction,
        offset: Vec2,
        config: &SwipeConfig,
        now: u64,
        schedule: impl FnOnce(u64) -> TimerId,
    ) -> Result<&PoppedItem<T>, PopError> {
        self.can_commit(items, direction)?;
        let item = items.remove(0);
        let target = Vec2::new(direction.sign() * config.exit_distance.abs(), offset.y);
        let tween = OffsetTween::new(
            offset,
            target,
            now,
            config.exit_duration_ms,
            config.exit_easing,
        );
        let timer = schedule(tween.end());
        log::debug!(
            "card committed {direction:?}; {} left, exit ends at {}",
            items.len(),
            tween.end()
        );
        Ok(self.popped.insert(PoppedItem {
            item,
            direction,
            tween,
            timer,
        }))
    }

    /// Completes the exit whose timer fired, discarding the popped card.
    ///
    /// Returns `None` if `timer` does not belong to the card in flight.
    pub fn finish(&mut self, timer: TimerId) -> Option<PoppedItem<T>> {
        if self.popped.as_ref()?.timer != timer {
            return None;
        }
        let done = self.popped.take()?;
        log::debug!("card exit finished {:?}", done.direction);
        Some(done)
    }

    /// Drops the card in flight without completing it.
    pub fn abandon(&mut self) -> Option<PoppedItem<T>> {
        self.popped.take()
    }

    /// The card in flight, if any.
    #[must_use]
    pub fn popped(&self) -> Option<&PoppedItem<T>> {
        self.popped.as_ref()
    }

    /// Returns `true` while a card is exiting.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.popped.is_some()
    }
}
