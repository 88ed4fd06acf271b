// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracker: turn raw drag translations into a slack-corrected card offset.
//!
//! ## Usage
//!
//! 1) Feed every drag sample to [`DragTracker::sample`]. A sample is the
//!    cumulative translation since the gesture started. The first sample after
//!    a release starts a new gesture.
//! 2) Inspect the returned [`DragUpdate`] for the corrected offset, the live
//!    direction, and the threshold-crossing edge.
//! 3) Call [`DragTracker::release`] with the final translation to learn whether
//!    the gesture commits or cancels.
//!
//! Hosts that only see absolute pointer positions can use
//! [`DragTracker::pointer_down`], [`DragTracker::pointer_move`], and
//! [`DragTracker::pointer_up`], which derive translations from the press point.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_swipe_stack::{Direction, SwipeConfig};
//! use understory_swipe_stack::drag::{DragTracker, Release};
//!
//! let config = SwipeConfig::default();
//! let mut drag = DragTracker::new();
//!
//! // Inside the dead zone, the card does not move.
//! let update = drag.sample(&config, Vec2::new(12.0, 0.0));
//! assert_eq!(update.offset, Vec2::ZERO);
//!
//! // Past it, the card follows the finger minus the slack.
//! let update = drag.sample(&config, Vec2::new(180.0, 0.0));
//! assert_eq!(update.offset.x, 160.0);
//! assert!(update.threshold_passed);
//!
//! let release = drag.release(&config, Vec2::new(180.0, 0.0));
//! assert_eq!(release, Release::Commit(Direction::Right));
//! ```

use kurbo::{Point, Vec2};

use crate::config::SwipeConfig;
use crate::direction::Direction;

/// Result of feeding one sample to a [`DragTracker`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragUpdate {
    /// Slack-corrected offset of the front card.
    pub offset: Vec2,
    /// Direction of the corrected offset.
    pub direction: Direction,
    /// `true` if the sample changed the remembered last direction.
    pub direction_changed: bool,
    /// Whether the corrected offset currently meets the trigger threshold.
    pub threshold_reached: bool,
    /// `true` only on the sample where `threshold_reached` flipped from false to true.
    pub threshold_passed: bool,
}

/// Decision made when a drag ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// The release translation met the threshold; pop the front card this way.
    Commit(Direction),
    /// The release fell short; return the card to rest.
    Cancel,
}

/// Tracks the state of a single swipe gesture.
#[derive(Copy, Clone, Debug, Default)]
pub struct DragTracker {
    /// Press position, when driven by absolute pointer positions.
    start_pos: Option<Point>,
    active: bool,
    offset: Vec2,
    last_direction: Direction,
    threshold_reached: bool,
}

impl DragTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the dead-zone correction to a raw translation.
    ///
    /// Horizontally, magnitudes below the slack map to zero and larger ones
    /// lose exactly the slack. Vertically, the raw value passes through when
    /// secondary-axis tracking is enabled and is pinned to zero otherwise.
    #[must_use]
    pub fn corrected_offset(config: &SwipeConfig, raw: Vec2) -> Vec2 {
        let slack = config.slack();
        let correction = if raw.x >= slack {
            -slack
        } else if raw.x <= -slack {
            slack
        } else {
            -raw.x
        };
        let y = if config.animate_on_secondary_axis {
            raw.y
        } else {
            0.0
        };
        Vec2::new(raw.x + correction, y)
    }

    /// Processes a cumulative drag translation.
    pub fn sample(&mut self, config: &SwipeConfig, raw: Vec2) -> DragUpdate {
        if !self.active {
            self.begin();
        }
        self.offset = Self::corrected_offset(config, raw);

        let direction = Direction::classify(self.offset.x);
        let direction_changed = !direction.is_idle() && direction != self.last_direction;
        if direction_changed {
            log::trace!("swipe direction {:?} -> {direction:?}", self.last_direction);
            self.last_direction = direction;
        }

        let reached = config.reaches_threshold(self.offset.x);
        let threshold_passed = reached && !self.threshold_reached;
        if reached != self.threshold_reached {
            log::trace!("swipe threshold reached: {reached}");
            self.threshold_reached = reached;
        }

        DragUpdate {
            offset: self.offset,
            direction,
            direction_changed,
            threshold_reached: reached,
            threshold_passed,
        }
    }

    /// Ends the gesture and decides between commit and cancel.
    ///
    /// The decision uses the raw release translation; a commit heads in its
    /// direction. A release with no horizontal motion always cancels. The
    /// tracker returns to rest either way.
    pub fn release(&mut self, config: &SwipeConfig, raw: Vec2) -> Release {
        let direction = Direction::classify(raw.x);
        let decision = if !direction.is_idle() && config.reaches_threshold(raw.x) {
            self.last_direction = direction;
            Release::Commit(direction)
        } else {
            Release::Cancel
        };
        self.reset();
        decision
    }

    /// Starts a gesture explicitly, re-arming the threshold edge.
    pub fn begin(&mut self) {
        self.active = true;
        self.offset = Vec2::ZERO;
        self.threshold_reached = false;
    }

    /// Abandons the gesture without a decision. The last direction is kept.
    pub fn reset(&mut self) {
        self.start_pos = None;
        self.active = false;
        self.offset = Vec2::ZERO;
        self.threshold_reached = false;
    }

    /// Starts a gesture from an absolute pointer position.
    pub fn pointer_down(&mut self, pos: Point) {
        self.begin();
        self.start_pos = Some(pos);
    }

    /// Feeds an absolute pointer position, returning `None` if no press is tracked.
    pub fn pointer_move(&mut self, config: &SwipeConfig, pos: Point) -> Option<DragUpdate> {
        let translation = self.translation_to(pos)?;
        Some(self.sample(config, translation))
    }

    /// Ends a pointer-driven gesture, returning `None` if no press is tracked.
    pub fn pointer_up(&mut self, config: &SwipeConfig, pos: Point) -> Option<Release> {
        let translation = self.translation_to(pos)?;
        Some(self.release(config, translation))
    }

    /// Cumulative translation from the press position.
    #[must_use]
    pub fn translation_to(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Current slack-corrected offset; zero when no gesture is active.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Direction of the current offset.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::classify(self.offset.x)
    }

    /// Last non-idle direction ever observed.
    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    /// Returns `true` while the current offset meets the threshold.
    #[must_use]
    pub fn threshold_reached(&self) -> bool {
        self.threshold_reached
    }
}
