// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host callbacks fired by a [`SwipeStack`](crate::SwipeStack).
//!
//! Each event has zero or one handler. Registering a handler replaces the
//! previous one. Handlers run synchronously on the thread driving the stack.

use alloc::boxed::Box;
use core::fmt;

use crate::direction::Direction;

type SwipeEndHandler<T> = Box<dyn FnMut(&T, Direction)>;
type Handler = Box<dyn FnMut()>;

/// Handler slots for the stack's three notifications.
pub struct SwipeCallbacks<T> {
    swipe_end: Option<SwipeEndHandler<T>>,
    no_more_cards_left: Option<Handler>,
    threshold_passed: Option<Handler>,
}

impl<T> Default for SwipeCallbacks<T> {
    fn default() -> Self {
        Self {
            swipe_end: None,
            no_more_cards_left: None,
            threshold_passed: None,
        }
    }
}

impl<T> fmt::Debug for SwipeCallbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeCallbacks")
            .field("swipe_end", &self.swipe_end.is_some())
            .field("no_more_cards_left", &self.no_more_cards_left.is_some())
            .field("threshold_passed", &self.threshold_passed.is_some())
            .finish()
    }
}

impl<T> SwipeCallbacks<T> {
    /// Creates an empty set of handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler for a user-driven commit, called with the popped item and its direction.
    pub fn set_swipe_end(&mut self, handler: impl FnMut(&T, Direction) + 'static) {
        self.swipe_end = Some(Box::new(handler));
    }

    /// Handler for the live list running out, called after the last exit animation.
    pub fn set_no_more_cards_left(&mut self, handler: impl FnMut() + 'static) {
        self.no_more_cards_left = Some(Box::new(handler));
    }

    /// Handler for each false-to-true edge of the drag meeting the threshold.
    pub fn set_threshold_passed(&mut self, handler: impl FnMut() + 'static) {
        self.threshold_passed = Some(Box::new(handler));
    }

    /// Drops every handler.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn swipe_end(&mut self, item: &T, direction: Direction) {
        if let Some(handler) = self.swipe_end.as_mut() {
            handler(item, direction);
        }
    }

    pub(crate) fn no_more_cards_left(&mut self) {
        if let Some(handler) = self.no_more_cards_left.as_mut() {
            handler();
        }
    }

    pub(crate) fn threshold_passed(&mut self) {
        if let Some(handler) = self.threshold_passed.as_mut() {
            handler();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn unset_handlers_are_noops() {
        let mut callbacks = SwipeCallbacks::<u32>::new();
        callbacks.swipe_end(&1, Direction::Left);
        callbacks.no_more_cards_left();
        callbacks.threshold_passed();
    }

    #[test]
    fn setting_a_handler_replaces_the_previous_one() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut callbacks = SwipeCallbacks::<u32>::new();

        let first = Rc::clone(&log);
        callbacks.set_swipe_end(move |item, _| first.borrow_mut().push(("first", *item)));
        let second = Rc::clone(&log);
        callbacks.set_swipe_end(move |item, _| second.borrow_mut().push(("second", *item)));

        callbacks.swipe_end(&7, Direction::Right);
        assert_eq!(*log.borrow(), [("second", 7)]);
    }

    #[test]
    fn clear_drops_handlers() {
        let hits = Rc::new(RefCell::new(0));
        let mut callbacks = SwipeCallbacks::<u32>::new();
        let counter = Rc::clone(&hits);
        callbacks.set_threshold_passed(move || *counter.borrow_mut() += 1);

        callbacks.threshold_passed();
        callbacks.clear();
        callbacks.threshold_passed();

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(Rc::strong_count(&hits), 1);
    }

    #[test]
    fn debug_reports_registered_slots() {
        let mut callbacks = SwipeCallbacks::<u32>::new();
        callbacks.set_no_more_cards_left(|| {});
        let text = alloc::format!("{callbacks:?}");
        assert!(text.contains("no_more_cards_left: true"));
        assert!(text.contains("swipe_end: false"));
    }
}
