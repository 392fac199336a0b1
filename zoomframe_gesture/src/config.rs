// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Timing and distance thresholds for gesture recognition.
///
/// Distances are in the same pixel units as pointer positions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Longest gap between the first tap's up and the second tap's down.
    pub double_tap_timeout_ms: u64,
    /// Shortest such gap; anything quicker is treated as contact bounce.
    pub double_tap_min_time_ms: u64,
    /// How far a pointer may wander while still counting as a tap.
    pub tap_slop: f64,
    /// How far apart the two taps of a double tap may land.
    pub double_tap_slop: f64,
    /// Span change needed before two pointers start a pinch.
    pub pinch_span_slop: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_timeout_ms: 300,
            double_tap_min_time_ms: 40,
            tap_slop: 8.0,
            double_tap_slop: 100.0,
            pinch_span_slop: 16.0,
        }
    }
}

impl GestureConfig {
    /// Checks that the thresholds are usable.
    pub fn validate(&self) -> Result<(), GestureConfigError> {
        if self.double_tap_min_time_ms > self.double_tap_timeout_ms {
            return Err(GestureConfigError::DoubleTapWindow {
                min_ms: self.double_tap_min_time_ms,
                timeout_ms: self.double_tap_timeout_ms,
            });
        }
        for (name, value) in [
            ("tap_slop", self.tap_slop),
            ("double_tap_slop", self.double_tap_slop),
            ("pinch_span_slop", self.pinch_span_slop),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GestureConfigError::Slop { name, value });
            }
        }
        Ok(())
    }
}

/// Reason a [`GestureConfig`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureConfigError {
    /// The minimum double-tap gap exceeds the timeout.
    DoubleTapWindow {
        /// Configured minimum gap.
        min_ms: u64,
        /// Configured timeout.
        timeout_ms: u64,
    },
    /// A slop distance is negative or not finite.
    Slop {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl fmt::Display for GestureConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoubleTapWindow { min_ms, timeout_ms } => write!(
                f,
                "double-tap minimum gap {min_ms}ms exceeds timeout {timeout_ms}ms"
            ),
            Self::Slop { name, value } => {
                write!(f, "{name} must be a finite non-negative distance, got {value}")
            }
        }
    }
}

impl core::error::Error for GestureConfigError {}
