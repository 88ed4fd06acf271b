// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable parameters for a [`SwipeStack`](crate::SwipeStack).
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe_stack::SwipeConfig;
//!
//! let config = SwipeConfig::default()
//!     .with_trigger_threshold(120.0)
//!     .with_visible_count(3)
//!     .with_exit_distance(2.0 * 390.0);
//!
//! assert_eq!(config.minimum_distance, 20.0);
//! assert_eq!(config.progress(60.0), 0.5);
//! assert_eq!(config.progress(-500.0), 1.0);
//! ```

use crate::animation::Easing;

/// Configuration read by the drag tracker and stack projector on every update.
///
/// All distances share the host's coordinate space (typically logical pixels).
/// Durations are in the same unit as the timestamps passed to
/// [`SwipeStack::advance`](crate::SwipeStack::advance), conventionally milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Minimum horizontal magnitude that commits a swipe on release.
    ///
    /// Zero or negative values make any nonzero drag commit, and saturate
    /// progress at `1.0` for any nonzero offset.
    pub trigger_threshold: f64,
    /// Dead-zone half-width subtracted from the raw drag. Negative values act as zero.
    pub minimum_distance: f64,
    /// Number of stacked slots rendered, front slot included.
    pub visible_count: usize,
    /// Whether vertical drag moves the front card.
    pub animate_on_secondary_axis: bool,
    /// Horizontal distance an exiting card travels, typically a multiple of the container width.
    pub exit_distance: f64,
    /// Duration of the exit animation.
    pub exit_duration_ms: u64,
    /// Duration of the cancel-to-rest animation.
    pub snap_back_duration_ms: u64,
    /// Easing of the exit animation.
    pub exit_easing: Easing,
    /// Easing of the cancel-to-rest animation.
    pub snap_back_easing: Easing,
    /// Secondary-axis rest offset added per slot of depth.
    pub stack_spacing: f64,
    /// Rest scale removed per slot of depth.
    pub scale_step: f64,
    /// Front card rotation is `horizontal / rotation_divisor` degrees.
    ///
    /// Non-positive values disable rotation.
    pub rotation_divisor: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            trigger_threshold: 150.0,
            minimum_distance: 20.0,
            visible_count: 4,
            animate_on_secondary_axis: false,
            exit_distance: 1000.0,
            exit_duration_ms: 500,
            snap_back_duration_ms: 350,
            exit_easing: Easing::EaseOut,
            snap_back_easing: Easing::EaseInOut,
            stack_spacing: 10.0,
            scale_step: 0.05,
            rotation_divisor: 20.0,
        }
    }
}

impl SwipeConfig {
    /// Sets [`trigger_threshold`](Self::trigger_threshold).
    #[must_use]
    pub fn with_trigger_threshold(mut self, threshold: f64) -> Self {
        self.trigger_threshold = threshold;
        self
    }

    /// Sets [`minimum_distance`](Self::minimum_distance).
    #[must_use]
    pub fn with_minimum_distance(mut self, distance: f64) -> Self {
        self.minimum_distance = distance;
        self
    }

    /// Sets [`visible_count`](Self::visible_count).
    #[must_use]
    pub fn with_visible_count(mut self, count: usize) -> Self {
        self.visible_count = count;
        self
    }

    /// Sets [`animate_on_secondary_axis`](Self::animate_on_secondary_axis).
    #[must_use]
    pub fn with_secondary_axis(mut self, enabled: bool) -> Self {
        self.animate_on_secondary_axis = enabled;
        self
    }

    /// Sets [`exit_distance`](Self::exit_distance).
    #[must_use]
    pub fn with_exit_distance(mut self, distance: f64) -> Self {
        self.exit_distance = distance;
        self
    }

    /// Sets both animation durations.
    #[must_use]
    pub fn with_durations(mut self, exit_ms: u64, snap_back_ms: u64) -> Self {
        self.exit_duration_ms = exit_ms;
        self.snap_back_duration_ms = snap_back_ms;
        self
    }

    /// Sets the per-slot rest spacing and scale step.
    #[must_use]
    pub fn with_depth(mut self, stack_spacing: f64, scale_step: f64) -> Self {
        self.stack_spacing = stack_spacing;
        self.scale_step = scale_step;
        self
    }

    /// Slack distance with negative values clamped to zero.
    #[must_use]
    pub fn slack(&self) -> f64 {
        self.minimum_distance.max(0.0)
    }

    /// Returns `true` if a horizontal magnitude satisfies the trigger threshold.
    ///
    /// A zero (or NaN) magnitude never does, whatever the threshold.
    #[must_use]
    pub fn reaches_threshold(&self, horizontal: f64) -> bool {
        let magnitude = horizontal.abs();
        magnitude > 0.0 && magnitude >= self.trigger_threshold
    }

    /// Normalized swipe progress for a horizontal offset, clamped to `[0, 1]`.
    ///
    /// A non-positive threshold yields `1.0` for any nonzero offset and `0.0`
    /// at rest.
    #[must_use]
    pub fn progress(&self, horizontal: f64) -> f64 {
        let magnitude = horizontal.abs();
        if magnitude.is_nan() || magnitude == 0.0 {
            return 0.0;
        }
        if self.trigger_threshold <= 0.0 {
            return 1.0;
        }
        (magnitude / self.trigger_threshold).min(1.0)
    }

    /// Front card rotation in degrees for a horizontal offset.
    #[must_use]
    pub fn rotation_degrees(&self, horizontal: f64) -> f64 {
        if self.rotation_divisor > 0.0 {
            horizontal / self.rotation_divisor
        } else {
            0.0
        }
    }
}
