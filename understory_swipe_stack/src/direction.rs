// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal swipe direction.

/// Which way the front card is heading, derived from the sign of its
/// horizontal offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Negative horizontal offset.
    Left,
    /// Positive horizontal offset.
    Right,
    /// Zero horizontal offset, or no drag yet.
    #[default]
    Idle,
}

impl Direction {
    /// Classifies a horizontal offset.
    ///
    /// `offset > 0` is [`Right`](Self::Right), `offset < 0` is
    /// [`Left`](Self::Left), anything else (zero, `-0.0`, NaN) is
    /// [`Idle`](Self::Idle).
    #[must_use]
    pub fn classify(horizontal: f64) -> Self {
        if horizontal > 0.0 {
            Self::Right
        } else if horizontal < 0.0 {
            Self::Left
        } else {
            Self::Idle
        }
    }

    /// Sign applied to exit distances: `-1` for left, `1` for right, `0` for idle.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
            Self::Idle => 0.0,
        }
    }

    /// Returns `true` for [`Idle`](Self::Idle).
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}
