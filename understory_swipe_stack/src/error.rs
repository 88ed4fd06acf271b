// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by refused pop requests.

use core::fmt;

/// Reason a pop request was refused.
///
/// Refusals leave the stack untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PopError {
    /// The live list has no front card.
    Empty,
    /// A previously popped card is still animating out.
    InFlight,
    /// The requested direction was [`Direction::Idle`](crate::Direction::Idle).
    NoDirection,
    /// The stack has been torn down.
    TornDown,
}

impl fmt::Display for PopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "no card left to pop",
            Self::InFlight => "a popped card is still exiting",
            Self::NoDirection => "a pop needs a left or right direction",
            Self::TornDown => "the swipe stack was torn down",
        })
    }
}

impl core::error::Error for PopError {}
