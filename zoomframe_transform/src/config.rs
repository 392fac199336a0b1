// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// The resting scale of the surface. Not configurable.
pub const SCALE_NORMAL: f64 = 1.0;

/// Limits and timing for a [`TransformController`](crate::TransformController).
///
/// The defaults are the values a touch video surface is usually tuned to:
/// half-size to triple-size zoom, no overscroll, and a ~60 Hz animation that
/// grows or shrinks the scale by 5% per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Smallest scale a pinch may reach.
    pub scale_min: f64,
    /// Largest scale a pinch or double tap may reach.
    pub scale_max: f64,
    /// Slack, in pixels, by which a surface edge may sit inside the viewport
    /// edge before the bounds clamp pulls it back.
    pub offset_border: f64,
    /// Delay between two auto-scale ticks.
    pub animation_tick_ms: u64,
    /// Multiplicative step used while animating towards a larger scale.
    pub grow_step: f64,
    /// Multiplicative step used while animating towards a smaller scale.
    pub shrink_step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale_min: 0.5,
            scale_max: 3.0,
            offset_border: 0.0,
            animation_tick_ms: 16,
            grow_step: 1.05,
            shrink_step: 0.95,
        }
    }
}

impl ZoomConfig {
    /// Middle stop of the double-tap cycle, a third of the way from normal to max.
    #[must_use]
    pub fn scale_mid(&self) -> f64 {
        SCALE_NORMAL + (self.scale_max - SCALE_NORMAL) / 3.0
    }

    /// Clamps `scale` into `[scale_min, scale_max]`.
    ///
    /// An inverted range is treated as if its ends were swapped, and a NaN
    /// limit leaves that side unbounded.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        let (lo, hi) = if self.scale_min <= self.scale_max {
            (self.scale_min, self.scale_max)
        } else {
            (self.scale_max, self.scale_min)
        };
        scale.max(lo).min(hi)
    }

    /// Returns a copy that a controller can run with.
    ///
    /// Inverted scale limits are swapped. Any value [`validate`](Self::validate)
    /// would reject for being non-finite or out of range falls back to its
    /// default, except for the border which falls back to zero. Whether the
    /// range contains [`SCALE_NORMAL`] is left alone.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let or_default = |value: f64, ok: bool, fallback: f64| {
            if value.is_finite() && ok { value } else { fallback }
        };
        let min = or_default(self.scale_min, self.scale_min > 0.0, defaults.scale_min);
        let max = or_default(self.scale_max, self.scale_max > 0.0, defaults.scale_max);
        let (scale_min, scale_max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            scale_min,
            scale_max,
            offset_border: or_default(self.offset_border, self.offset_border >= 0.0, 0.0),
            animation_tick_ms: self.animation_tick_ms.max(1),
            grow_step: or_default(self.grow_step, self.grow_step > 1.0, defaults.grow_step),
            shrink_step: or_default(
                self.shrink_step,
                self.shrink_step > 0.0 && self.shrink_step < 1.0,
                defaults.shrink_step,
            ),
        }
    }

    /// Checks that the limits are usable.
    ///
    /// `scale_min <= 1.0 <= scale_max` must hold with a positive minimum, the
    /// border must be a finite non-negative number, the tick must be non-zero,
    /// and the two animation steps must actually grow and shrink.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.scale_min,
            self.scale_max,
            self.offset_border,
            self.grow_step,
            self.shrink_step,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if self.scale_min <= 0.0 || self.scale_min > SCALE_NORMAL || self.scale_max < SCALE_NORMAL
        {
            return Err(ConfigError::ScaleRange {
                min: self.scale_min,
                max: self.scale_max,
            });
        }
        if self.offset_border < 0.0 {
            return Err(ConfigError::NegativeBorder(self.offset_border));
        }
        if self.animation_tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.grow_step <= 1.0 {
            return Err(ConfigError::GrowStep(self.grow_step));
        }
        if self.shrink_step <= 0.0 || self.shrink_step >= 1.0 {
            return Err(ConfigError::ShrinkStep(self.shrink_step));
        }
        Ok(())
    }
}

/// Reason a [`ZoomConfig`] was rejected by [`ZoomConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// One of the floating point fields is NaN or infinite.
    NonFinite,
    /// The scale range does not contain the normal scale or has a non-positive minimum.
    ScaleRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The overscroll border is negative.
    NegativeBorder(f64),
    /// The animation tick is zero milliseconds.
    ZeroTick,
    /// The grow step does not exceed `1.0`.
    GrowStep(f64),
    /// The shrink step is not within `(0.0, 1.0)`.
    ShrinkStep(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "zoom config contains a non-finite value"),
            Self::ScaleRange { min, max } => write!(
                f,
                "scale range [{min}, {max}] must be positive and contain {SCALE_NORMAL}"
            ),
            Self::NegativeBorder(b) => write!(f, "offset border {b} must not be negative"),
            Self::ZeroTick => write!(f, "animation tick must be at least 1ms"),
            Self::GrowStep(s) => write!(f, "grow step {s} must be greater than 1"),
            Self::ShrinkStep(s) => write!(f, "shrink step {s} must be within (0, 1)"),
        }
    }
}

impl core::error::Error for ConfigError {}
