// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack projector: per-slot render parameters for the visible part of the stack.
//!
//! Everything here is a pure function of the configuration, the number of live
//! items, and the current front offset, so hosts may call it as often as they
//! render. The front slot follows the drag directly. Deeper slots rest lower
//! and smaller, and advance toward the next-shallower slot's rest pose as the
//! front card's progress rises, so the whole stack appears to move up while
//! the front card leaves. The deepest visible slot fades in with progress.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_swipe_stack::SwipeConfig;
//! use understory_swipe_stack::projector::project;
//!
//! let config = SwipeConfig::default();
//! let slots = project(&config, 10, Vec2::new(75.0, 0.0));
//!
//! assert_eq!(slots.len(), 4);
//! assert_eq!(slots[0].progress, 0.5);
//! assert_eq!(slots[0].transform.translation, Vec2::new(75.0, 0.0));
//! // Slot 1 is halfway from its rest offset (10) to slot 0's (0).
//! assert_eq!(slots[1].transform.translation.y, 5.0);
//! // The deepest slot is only half faded in.
//! assert_eq!(slots[3].transform.opacity, 0.5);
//! ```

use alloc::vec::Vec;

use kurbo::{Affine, Point, Vec2};

use crate::config::SwipeConfig;

/// Render parameters for one card.
///
/// The core only computes these values; painting them is the host's job.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardTransform {
    /// Translation from the card's rest position.
    pub translation: Vec2,
    /// Clockwise rotation in degrees about the card's anchor.
    pub rotation_degrees: f64,
    /// Uniform scale about the card's anchor.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Paint order; higher values draw on top.
    pub z_index: i32,
}

impl CardTransform {
    /// A card at rest: no translation, rotation, or scaling, fully opaque.
    pub const REST: Self = Self {
        translation: Vec2::ZERO,
        rotation_degrees: 0.0,
        scale: 1.0,
        opacity: 1.0,
        z_index: 0,
    };

    /// Combines the transform into an affine map.
    ///
    /// Scaling and rotation happen about `anchor` (usually the card centre in
    /// its own coordinate space), followed by the translation.
    #[must_use]
    pub fn to_affine(&self, anchor: Point) -> Affine {
        Affine::translate(self.translation)
            * Affine::rotate_about(self.rotation_degrees.to_radians(), anchor)
            * Affine::scale_about(self.scale, anchor)
    }

    /// Returns `true` if the card paints anything.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.scale > 0.0
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::REST
    }
}

/// Projection of one visible slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotProjection {
    /// Slot index; `0` is the front card and matches the item index.
    pub slot: usize,
    /// Swipe progress for the front slot; `0.0` for deeper slots.
    pub progress: f64,
    /// Render parameters.
    pub transform: CardTransform,
}

/// Number of slots rendered for a list of `len` items.
#[must_use]
pub fn visible_slots(config: &SwipeConfig, len: usize) -> usize {
    config.visible_count.min(len)
}

/// Secondary-axis rest offset of a slot.
#[must_use]
pub fn rest_offset(config: &SwipeConfig, slot: usize) -> f64 {
    slot as f64 * config.stack_spacing
}

/// Rest scale of a slot, never below zero.
#[must_use]
pub fn rest_scale(config: &SwipeConfig, slot: usize) -> f64 {
    (1.0 - slot as f64 * config.scale_step).max(0.0)
}

/// Paint order of a slot: strictly decreasing with depth, front-most highest.
#[must_use]
pub fn z_index(config: &SwipeConfig, slot: usize) -> i32 {
    let depth = config.visible_count.saturating_sub(slot);
    i32::try_from(depth).unwrap_or(i32::MAX)
}

/// Projects a single slot for the given front offset.
///
/// Slots at or beyond `visible_count` come back fully transparent.
#[must_use]
pub fn project_slot(config: &SwipeConfig, slot: usize, offset: Vec2) -> CardTransform {
    if slot >= config.visible_count {
        return CardTransform {
            opacity: 0.0,
            z_index: 0,
            ..CardTransform::REST
        };
    }
    let progress = config.progress(offset.x);
    if slot == 0 {
        return CardTransform {
            translation: offset,
            rotation_degrees: config.rotation_degrees(offset.x),
            scale: rest_scale(config, 0),
            opacity: 1.0,
            z_index: z_index(config, 0),
        };
    }

    let y = lerp(
        rest_offset(config, slot),
        rest_offset(config, slot - 1),
        progress,
    );
    let scale = lerp(
        rest_scale(config, slot),
        rest_scale(config, slot - 1),
        progress,
    );
    let opacity = if slot + 1 == config.visible_count {
        progress
    } else {
        1.0
    };
    CardTransform {
        translation: Vec2::new(0.0, y),
        rotation_degrees: 0.0,
        scale,
        opacity,
        z_index: z_index(config, slot),
    }
}

/// Projects every visible slot for a list of `len` items, front first.
#[must_use]
pub fn project(config: &SwipeConfig, len: usize, offset: Vec2) -> Vec<SlotProjection> {
    let front_progress = config.progress(offset.x);
    (0..visible_slots(config, len))
        .map(|slot| SlotProjection {
            slot,
            progress: if slot == 0 { front_progress } else { 0.0 },
            transform: project_slot(config, slot, offset),
        })
        .collect()
}

/// Transform of a card that has been popped and is animating off-screen.
///
/// It keeps the front card's pose and paints above the live stack.
#[must_use]
pub fn project_exiting(config: &SwipeConfig, offset: Vec2) -> CardTransform {
    CardTransform {
        translation: offset,
        rotation_degrees: config.rotation_degrees(offset.x),
        scale: rest_scale(config, 0),
        opacity: 1.0,
        z_index: z_index(config, 0).saturating_add(1),
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
