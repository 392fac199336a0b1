// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::animation::{AnimationStatus, AutoScale, AutoScaleStep, TickClock};
use crate::bounds::{EdgeOffsets, Viewport, clamp_pan, scale_correction};
use crate::config::{ConfigError, SCALE_NORMAL, ZoomConfig};
use crate::surface::SurfaceTransform;

/// Owns the transform of a single surface inside a viewport.
///
/// `TransformController` keeps the surface's uniform scale within the
/// configured limits and, at or above normal scale, keeps the surface covering
/// the whole viewport. It can be driven directly by pan/scale deltas, or
/// towards a target scale by a stepped animation advanced with
/// [`advance`](Self::advance) or [`step_animation`](Self::step_animation).
#[derive(Clone, Debug)]
pub struct TransformController {
    config: ZoomConfig,
    viewport: Viewport,
    transform: SurfaceTransform,
    auto_scale: Option<AutoScale>,
    clock: TickClock,
}

impl TransformController {
    /// Creates a controller at identity for the given viewport.
    ///
    /// The configuration is not validated but goes through
    /// [`ZoomConfig::normalized`], so a bad one cannot stall or panic the
    /// controller. See [`try_new`](Self::try_new) for a validating constructor.
    #[must_use]
    pub fn new(config: ZoomConfig, viewport: Viewport) -> Self {
        let config = config.normalized();
        Self {
            config,
            viewport,
            transform: SurfaceTransform::IDENTITY,
            auto_scale: None,
            clock: TickClock::new(config.animation_tick_ms),
        }
    }

    /// Creates a controller after checking `config` with [`ZoomConfig::validate`].
    pub fn try_new(config: ZoomConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, viewport))
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the viewport size.
    ///
    /// Transform state is left alone; the next scale change or pan is clamped
    /// against the new size.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Current surface transform.
    #[must_use]
    pub fn transform(&self) -> SurfaceTransform {
        self.transform
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Current surface extent relative to the viewport edges.
    #[must_use]
    pub fn bounds(&self) -> EdgeOffsets {
        self.transform.bounds(self.viewport)
    }

    /// Sets the uniform scale.
    ///
    /// The value is clamped into the configured range and non-finite values are
    /// ignored. At or above normal scale, translation is corrected so the
    /// surface still covers the viewport.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        self.transform.scale = self.config.clamp_scale(scale);
        if self.transform.scale >= SCALE_NORMAL {
            self.check_bounds();
        }
    }

    /// Moves the pivot to `pivot` without moving the surface on screen.
    pub fn set_pivot(&mut self, pivot: Point) {
        let t = &mut self.transform;
        t.translation += (t.pivot - pivot) * (1.0 - t.scale);
        t.pivot = pivot;
    }

    /// Pans by `delta`, limited by the bounds policy.
    ///
    /// Returns the translation that was actually applied.
    pub fn apply_pan(&mut self, delta: Vec2) -> Vec2 {
        let applied = clamp_pan(
            self.viewport,
            self.bounds(),
            self.transform.scale,
            self.config.offset_border,
            delta,
        );
        self.transform.translation += applied;
        applied
    }

    /// Scales by `factor` around `focus`.
    ///
    /// Growing stops at the maximum scale and shrinking stops at the minimum;
    /// a factor that heads back into range is always applied.
    pub fn apply_scale_factor(&mut self, factor: f64, focus: Point) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let mut scale = self.transform.scale;
        if factor < 1.0 && scale > self.config.scale_min {
            scale = (scale * factor).max(self.config.scale_min);
        }
        if factor > 1.0 && scale < self.config.scale_max {
            scale = (scale * factor).min(self.config.scale_max);
        }
        self.set_pivot(focus);
        self.set_scale(scale);
    }

    /// Pulls any edge that left the viewport border back onto it.
    ///
    /// Returns the correction applied; calling it again right away returns zero.
    pub fn check_bounds(&mut self) -> Vec2 {
        let delta = scale_correction(self.viewport, self.bounds(), self.config.offset_border);
        self.transform.translation += delta;
        delta
    }

    /// Snaps back to normal scale if the surface was left shrunk.
    ///
    /// Hosts call this when the last pointer lifts.
    pub fn release(&mut self) {
        if self.transform.scale < SCALE_NORMAL {
            self.set_scale(SCALE_NORMAL);
        }
    }

    /// Returns the surface to normal scale, keeping its translation clamped.
    pub fn reset_scale(&mut self) {
        self.set_scale(SCALE_NORMAL);
    }

    /// Returns `true` while an auto-scale animation is in flight.
    #[must_use]
    pub fn is_auto_scaling(&self) -> bool {
        self.auto_scale.is_some()
    }

    /// Target of the in-flight animation, if any.
    #[must_use]
    pub fn auto_scale_target(&self) -> Option<f64> {
        self.auto_scale.map(|a| a.target())
    }

    /// Starts animating towards `target`, with the first tick due one interval
    /// after `now_ms`.
    ///
    /// Returns `false` and changes nothing while another animation is running.
    pub fn start_auto_scale(&mut self, target: f64, now_ms: u64) -> bool {
        if self.auto_scale.is_some() || !target.is_finite() {
            return false;
        }
        let target = self.config.clamp_scale(target);
        let anim = AutoScale::new(
            self.transform.scale,
            target,
            self.config.grow_step,
            self.config.shrink_step,
        );
        log::debug!(
            "auto-scale {} -> {} (step {})",
            self.transform.scale,
            target,
            anim.step()
        );
        self.auto_scale = Some(anim);
        self.clock.start(now_ms);
        true
    }

    /// Deadline of the next animation tick, for hosts that schedule timers.
    #[must_use]
    pub fn next_tick_deadline(&self) -> Option<u64> {
        self.clock.next_due()
    }

    /// Runs every animation tick due at `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> AnimationStatus {
        if self.auto_scale.is_none() {
            return AnimationStatus::Idle;
        }
        let mut status = AnimationStatus::Running;
        while self.auto_scale.is_some() && self.clock.take_due(now_ms) {
            status = self.step_animation();
        }
        status
    }

    /// Runs exactly one animation tick, regardless of time.
    pub fn step_animation(&mut self) -> AnimationStatus {
        let Some(anim) = self.auto_scale.as_mut() else {
            return AnimationStatus::Idle;
        };
        match anim.tick() {
            AutoScaleStep::Continue(scale) => {
                self.set_scale(scale);
                AnimationStatus::Running
            }
            AutoScaleStep::Done(scale) => {
                self.auto_scale = None;
                self.clock.stop();
                self.set_scale(scale);
                log::debug!("auto-scale finished at {scale}");
                AnimationStatus::Finished
            }
        }
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            viewport: self.viewport,
            transform: self.transform,
            bounds: self.bounds(),
            auto_scale_target: self.auto_scale_target(),
            next_tick_deadline: self.next_tick_deadline(),
        }
    }
}

/// Debug snapshot of a [`TransformController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ControllerDebugInfo {
    /// Viewport the surface is clamped against.
    pub viewport: Viewport,
    /// Current surface transform.
    pub transform: SurfaceTransform,
    /// Current surface extent relative to the viewport edges.
    pub bounds: EdgeOffsets,
    /// Target of the in-flight animation.
    pub auto_scale_target: Option<f64>,
    /// When the next animation tick is due.
    pub next_tick_deadline: Option<u64>,
}
