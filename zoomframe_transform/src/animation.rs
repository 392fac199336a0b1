// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepped auto-scale animation.
//!
//! An [`AutoScale`] walks the scale towards a target by repeated
//! multiplication. It never overshoots: the tick that would cross the target
//! lands exactly on it instead. Time is supplied from outside, so the same
//! state machine runs under a frame clock or a test loop.

/// Outcome of advancing the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// No animation is in flight.
    Idle,
    /// The animation moved and has more ticks to run.
    Running,
    /// The animation reached its target during this call.
    Finished,
}

/// One tick of an [`AutoScale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AutoScaleStep {
    /// Intermediate scale; keep ticking.
    Continue(f64),
    /// Target reached; this is exactly the target scale.
    Done(f64),
}

/// Multiplicative walk from the current scale to a target scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScale {
    target: f64,
    step: f64,
    current: f64,
}

impl AutoScale {
    /// Starts a walk from `current` to `target`.
    ///
    /// The walk grows by `grow_step` if `current < target`, otherwise it
    /// shrinks by `shrink_step`.
    #[must_use]
    pub fn new(current: f64, target: f64, grow_step: f64, shrink_step: f64) -> Self {
        let step = if current < target {
            grow_step
        } else {
            shrink_step
        };
        Self {
            target,
            step,
            current,
        }
    }

    /// Target scale of this walk.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Per-tick multiplier.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Scale after the most recent tick.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Returns `true` if this walk increases the scale.
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.step > 1.0
    }

    /// Advances by one step.
    pub fn tick(&mut self) -> AutoScaleStep {
        self.current *= self.step;
        let short_of_target = if self.is_growing() {
            self.current < self.target
        } else {
            self.target < self.current
        };
        if short_of_target {
            AutoScaleStep::Continue(self.current)
        } else {
            self.current = self.target;
            AutoScaleStep::Done(self.target)
        }
    }
}

/// Fixed-interval deadline tracker for the animation ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickClock {
    interval_ms: u64,
    next_due: Option<u64>,
}

impl TickClock {
    /// Creates an idle clock ticking every `interval_ms`.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_due: None,
        }
    }

    /// Schedules the first tick one interval after `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Stops scheduling ticks.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Deadline of the next tick, if scheduled.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.next_due
    }

    /// Consumes one due tick at `now_ms`, scheduling the following one.
    ///
    /// Returns `false` when nothing is due yet.
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        match self.next_due {
            Some(due) if due <= now_ms => {
                self.next_due = Some(due.saturating_add(self.interval_ms));
                true
            }
            _ => false,
        }
    }
}
