// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe stack component: items, gestures, animations, and callbacks together.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use understory_timing::{TimerId, TimerQueue};

use crate::animation::OffsetTween;
use crate::callbacks::SwipeCallbacks;
use crate::config::SwipeConfig;
use crate::direction::Direction;
use crate::drag::{DragTracker, DragUpdate, Release};
use crate::error::PopError;
use crate::pop::{PopController, PoppedItem};
use crate::projector::{self, CardTransform};

/// What a drag release did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The front card was popped in this direction.
    Committed(Direction),
    /// The front card is returning to rest.
    Cancelled,
    /// No drag was in progress, or the stack was torn down.
    Ignored,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Completion {
    SnapBack,
    Exit,
}

#[derive(Copy, Clone, Debug)]
struct SnapBack {
    tween: OffsetTween,
    timer: TimerId,
}

/// One card to paint this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardFrame<'a, T> {
    /// The item shown on the card.
    pub item: &'a T,
    /// Slot index; `0` is the front card.
    pub slot: usize,
    /// Swipe progress of the front card; `0.0` elsewhere.
    pub progress: f64,
    /// Render parameters.
    pub transform: CardTransform,
}

/// Everything a host needs to paint the stack at the current time.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<'a, T> {
    /// Visible live cards, front first.
    pub cards: Vec<CardFrame<'a, T>>,
    /// The popped card animating out, painted above the live cards.
    pub exiting: Option<CardFrame<'a, T>>,
    /// Live offset of the front card.
    pub offset: Vec2,
    /// Swipe progress of the front card.
    pub progress: f64,
    /// Direction of the live offset.
    pub direction: Direction,
}

/// A swipe-to-dismiss card stack.
///
/// The stack owns the live item list (front at index 0), feeds drag input
/// through a [`DragTracker`], commits pops through a [`PopController`], and
/// schedules animation completions on a [`TimerQueue`] driven by
/// [`advance`](Self::advance). All calls are expected on one thread; handlers
/// run synchronously inside the call that triggers them.
///
/// ## Minimal example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use kurbo::Vec2;
/// use understory_swipe_stack::{Direction, DragOutcome, SwipeStack};
///
/// let swiped = Rc::new(RefCell::new(Vec::new()));
/// let mut stack = SwipeStack::new(["a", "b", "c"]);
/// let log = Rc::clone(&swiped);
/// stack.on_swipe_end(move |item, direction| log.borrow_mut().push((*item, direction)));
///
/// stack.drag_changed(Vec2::new(120.0, 0.0));
/// stack.drag_changed(Vec2::new(200.0, 0.0));
/// let outcome = stack.drag_ended(Vec2::new(200.0, 0.0), 0);
///
/// assert_eq!(outcome, DragOutcome::Committed(Direction::Right));
/// assert_eq!(*swiped.borrow(), [("a", Direction::Right)]);
/// assert_eq!(stack.front(), Some(&"b"));
///
/// // The popped card keeps animating until its exit completes.
/// assert!(stack.frame().exiting.is_some());
/// stack.advance(500);
/// assert!(stack.frame().exiting.is_none());
/// ```
#[derive(Debug)]
pub struct SwipeStack<T> {
    items: Vec<T>,
    config: SwipeConfig,
    callbacks: SwipeCallbacks<T>,
    drag: DragTracker,
    snap_back: Option<SnapBack>,
    pop: PopController<T>,
    timers: TimerQueue<Completion>,
    pop_trigger: Option<Direction>,
    now: u64,
    torn_down: bool,
}

impl<T> SwipeStack<T> {
    /// Creates a stack with the default configuration.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_config(items, SwipeConfig::default())
    }

    /// Creates a stack with the given configuration.
    pub fn with_config(items: impl IntoIterator<Item = T>, config: SwipeConfig) -> Self {
        Self {
            items: items.into_iter().collect(),
            config,
            callbacks: SwipeCallbacks::new(),
            drag: DragTracker::new(),
            snap_back: None,
            pop: PopController::new(),
            timers: TimerQueue::new(),
            pop_trigger: None,
            now: 0,
            torn_down: false,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect from the next sample or frame.
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    /// Handler slots.
    pub fn callbacks_mut(&mut self) -> &mut SwipeCallbacks<T> {
        &mut self.callbacks
    }

    /// Registers the handler for user-driven commits.
    pub fn on_swipe_end(&mut self, handler: impl FnMut(&T, Direction) + 'static) {
        self.callbacks.set_swipe_end(handler);
    }

    /// Registers the handler for the live list running out.
    pub fn on_no_more_cards_left(&mut self, handler: impl FnMut() + 'static) {
        self.callbacks.set_no_more_cards_left(handler);
    }

    /// Registers the handler for threshold crossings.
    pub fn on_threshold_passed(&mut self, handler: impl FnMut() + 'static) {
        self.callbacks.set_threshold_passed(handler);
    }

    /// Live items, front first. Never contains the card that is exiting.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The front card, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    /// Number of live items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no live items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item at the back of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends items at the back of the stack.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    /// Replaces the live items. A card that is already exiting is unaffected.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.items = items.into_iter().collect();
    }

    /// Feeds a cumulative drag translation for the front card.
    ///
    /// Starting a drag interrupts a running snap-back. Returns `None` when
    /// there is no front card or the stack was torn down.
    pub fn drag_changed(&mut self, translation: Vec2) -> Option<DragUpdate> {
        if self.torn_down || self.items.is_empty() {
            return None;
        }
        self.cancel_snap_back();
        let update = self.drag.sample(&self.config, translation);
        if update.threshold_passed {
            self.callbacks.threshold_passed();
        }
        Some(update)
    }

    /// Ends the drag with its final translation.
    ///
    /// Releases at or past the threshold pop the front card and fire the
    /// swipe-end handler before returning. Shorter releases, and releases
    /// while another card is still exiting, animate the card back to rest.
    pub fn drag_ended(&mut self, translation: Vec2, now: u64) -> DragOutcome {
        if self.torn_down || !self.drag.is_dragging() {
            return DragOutcome::Ignored;
        }
        self.now = self.now.max(now);
        self.fire_expired();
        let offset = self.drag.offset();
        match self.drag.release(&self.config, translation) {
            Release::Commit(direction) => match self.commit(direction, offset, true) {
                Ok(()) => DragOutcome::Committed(direction),
                Err(err) => {
                    log::debug!("swipe release not committed: {err}");
                    self.start_snap_back(offset);
                    DragOutcome::Cancelled
                }
            },
            Release::Cancel => {
                self.start_snap_back(offset);
                DragOutcome::Cancelled
            }
        }
    }

    /// Starts a drag from an absolute pointer position.
    pub fn pointer_down(&mut self, pos: Point) {
        if self.torn_down || self.items.is_empty() {
            return;
        }
        self.cancel_snap_back();
        self.drag.pointer_down(pos);
    }

    /// Feeds an absolute pointer position for a drag started with [`pointer_down`](Self::pointer_down).
    pub fn pointer_move(&mut self, pos: Point) -> Option<DragUpdate> {
        let translation = self.drag.translation_to(pos)?;
        self.drag_changed(translation)
    }

    /// Ends a drag started with [`pointer_down`](Self::pointer_down).
    pub fn pointer_up(&mut self, pos: Point, now: u64) -> DragOutcome {
        match self.drag.translation_to(pos) {
            Some(translation) => self.drag_ended(translation, now),
            None => DragOutcome::Ignored,
        }
    }

    /// Pops the front card without a gesture.
    ///
    /// Runs the same exit animation as a swipe but does not fire the
    /// swipe-end handler. Any drag in progress on the front card is dropped.
    pub fn pop(&mut self, direction: Direction, now: u64) -> Result<(), PopError> {
        if self.torn_down {
            return Err(PopError::TornDown);
        }
        self.now = self.now.max(now);
        self.fire_expired();
        self.pop.can_commit(&self.items, direction)?;
        let offset = self.live_offset();
        self.drag.reset();
        self.commit(direction, offset, false)
    }

    /// Requests a programmatic pop on the next [`advance`](Self::advance).
    ///
    /// The request waits while a card is exiting and is cleared once handled.
    /// Setting a new request replaces a pending one; `None` withdraws it.
    pub fn set_pop_trigger(&mut self, direction: Option<Direction>) {
        self.pop_trigger = direction;
    }

    /// The pending programmatic pop request, if any.
    #[must_use]
    pub fn pop_trigger(&self) -> Option<Direction> {
        self.pop_trigger
    }

    /// Advances the stack's clock to `now`.
    ///
    /// Fires completed animations (and the out-of-cards handler when the last
    /// exit finishes on an empty list), then services a pending pop trigger.
    pub fn advance(&mut self, now: u64) {
        if self.torn_down {
            return;
        }
        self.now = self.now.max(now);
        self.fire_expired();
        self.service_pop_trigger();
    }

    fn fire_expired(&mut self) {
        while let Some(expired) = self.timers.pop_expired(self.now) {
            match expired.payload {
                Completion::SnapBack => {
                    if self.snap_back.is_some_and(|s| s.timer == expired.id) {
                        self.snap_back = None;
                    }
                }
                Completion::Exit => {
                    if self.pop.finish(expired.id).is_some() && self.items.is_empty() {
                        log::debug!("swipe stack ran out of cards");
                        self.callbacks.no_more_cards_left();
                    }
                }
            }
        }
    }

    /// Earliest timestamp at which [`advance`](Self::advance) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Returns `true` while a snap-back or exit animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.snap_back.is_some() || self.pop.is_exiting()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Last non-idle direction seen by the drag tracker.
    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.drag.last_direction()
    }

    /// The card that is exiting, if any.
    #[must_use]
    pub fn popped(&self) -> Option<&PoppedItem<T>> {
        self.pop.popped()
    }

    /// Offset of the front card at the stack's current time.
    #[must_use]
    pub fn live_offset(&self) -> Vec2 {
        if self.drag.is_dragging() {
            self.drag.offset()
        } else if let Some(snap_back) = self.snap_back {
            snap_back.tween.value_at(self.now)
        } else {
            Vec2::ZERO
        }
    }

    /// Render parameters for every visible card at the stack's current time.
    #[must_use]
    pub fn frame(&self) -> Frame<'_, T> {
        let offset = self.live_offset();
        let cards = projector::project(&self.config, self.items.len(), offset)
            .into_iter()
            .zip(&self.items)
            .map(|(projection, item)| CardFrame {
                item,
                slot: projection.slot,
                progress: projection.progress,
                transform: projection.transform,
            })
            .collect();
        let exiting = self.pop.popped().map(|popped| CardFrame {
            item: &popped.item,
            slot: 0,
            progress: 1.0,
            transform: projector::project_exiting(&self.config, popped.offset_at(self.now)),
        });
        Frame {
            cards,
            exiting,
            offset,
            progress: self.config.progress(offset.x),
            direction: Direction::classify(offset.x),
        }
    }

    /// Stops the stack for good.
    ///
    /// Pending animations are dropped without completing, no handler fires
    /// afterwards, and further input is ignored. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        log::debug!("swipe stack torn down with {} timers pending", self.timers.len());
        self.torn_down = true;
        self.timers.clear();
        self.pop.abandon();
        self.snap_back = None;
        self.drag.reset();
        self.pop_trigger = None;
        self.callbacks.clear();
    }

    /// Returns `true` after [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn commit(&mut self, direction: Direction, offset: Vec2, notify: bool) -> Result<(), PopError> {
        self.cancel_snap_back();
        let timers = &mut self.timers;
        let popped = self.pop.commit(
            &mut self.items,
            direction,
            offset,
            &self.config,
            self.now,
            |deadline| timers.schedule(deadline, Completion::Exit),
        )?;
        if notify {
            self.callbacks.swipe_end(&popped.item, direction);
        }
        Ok(())
    }

    fn start_snap_back(&mut self, from: Vec2) {
        self.cancel_snap_back();
        if from == Vec2::ZERO {
            return;
        }
        let tween = OffsetTween::new(
            from,
            Vec2::ZERO,
            self.now,
            self.config.snap_back_duration_ms,
            self.config.snap_back_easing,
        );
        let timer = self.timers.schedule(tween.end(), Completion::SnapBack);
        self.snap_back = Some(SnapBack { tween, timer });
    }

    fn cancel_snap_back(&mut self) {
        if let Some(snap_back) = self.snap_back.take() {
            self.timers.cancel(snap_back.timer);
        }
    }

    fn service_pop_trigger(&mut self) {
        let Some(direction) = self.pop_trigger else {
            return;
        };
        if self.pop.is_exiting() {
            return;
        }
        self.pop_trigger = None;
        if let Err(err) = self.pop(direction, self.now) {
            log::debug!("pop trigger {direction:?} dropped: {err}");
        }
    }
}
