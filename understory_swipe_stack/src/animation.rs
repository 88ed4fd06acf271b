// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based offset interpolation used by the snap-back and exit animations.
//!
//! The core never paints anything; a tween only answers "where should this
//! offset be at time `now`", and the host applies the result.

use kurbo::Vec2;

/// Easing curve applied to a linear time fraction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration to rest.
    #[default]
    EaseOut,
    /// Cubic acceleration then deceleration.
    EaseInOut,
}

impl Easing {
    /// Maps a linear fraction to an eased one. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, fraction: f64) -> f64 {
        let t = if fraction.is_nan() {
            1.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// An offset moving from `from` to `to` over a fixed duration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetTween {
    /// Offset at `start`.
    pub from: Vec2,
    /// Offset at `start + duration`.
    pub to: Vec2,
    /// Host timestamp at which the tween begins.
    pub start: u64,
    /// Length of the tween; zero jumps straight to `to`.
    pub duration: u64,
    /// Easing curve.
    pub easing: Easing,
}

impl OffsetTween {
    /// Creates a tween starting at `start`.
    #[must_use]
    pub fn new(from: Vec2, to: Vec2, start: u64, duration: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Timestamp at which the tween reaches `to`.
    #[must_use]
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.duration)
    }

    /// Linear time fraction in `[0, 1]` at `now`.
    #[must_use]
    pub fn fraction_at(&self, now: u64) -> f64 {
        if self.duration == 0 || now >= self.end() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        elapsed as f64 / self.duration as f64
    }

    /// Interpolated offset at `now`.
    #[must_use]
    pub fn value_at(&self, now: u64) -> Vec2 {
        let t = self.easing.apply(self.fraction_at(now));
        self.from.lerp(self.to, t)
    }

    /// Returns `true` once `now` has reached the end of the tween.
    #[must_use]
    pub fn is_finished(&self, now: u64) -> bool {
        now >= self.end()
    }
}
