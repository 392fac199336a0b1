// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch recognition: scale factor and focal point from two or more pointers.
//!
//! The *span* of the active pointers is twice their mean distance from the
//! centroid, which for two pointers is simply the distance between them. Each
//! update reports `span / previous_span` as the scale factor and the centroid
//! as the focus.
//!
//! A pinch only begins once the span has moved more than `pinch_span_slop`
//! away from where it was when the pointer set last changed. When a pointer
//! joins or leaves mid-pinch, the running pinch ends and (if at least two
//! pointers remain) immediately begins again from the new set, so the factor
//! never jumps.

use kurbo::Point;
use smallvec::SmallVec;

use crate::GestureConfig;
use crate::pointer::{PointerEvent, PointerPhase, centroid};

/// Transition reported by [`PinchDetector::on_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchEvent {
    /// A pinch started around `focus`.
    Begin {
        /// Centroid of the active pointers.
        focus: Point,
    },
    /// The span changed by `factor` around `focus`.
    Update {
        /// Ratio of the new span to the previous one.
        factor: f64,
        /// Centroid of the active pointers.
        focus: Point,
    },
    /// The pinch ended.
    End,
}

/// Pinch transitions produced by one event (at most an end and a restart).
pub type PinchEvents = SmallVec<[PinchEvent; 2]>;

/// Recognizes pinch gestures.
#[derive(Clone, Debug)]
pub struct PinchDetector {
    span_slop: f64,
    in_progress: bool,
    pointer_count: usize,
    initial_span: f64,
    prev_span: f64,
}

impl PinchDetector {
    /// Creates a detector using the span slop from `config`.
    #[must_use]
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            span_slop: config.pinch_span_slop,
            in_progress: false,
            pointer_count: 0,
            initial_span: 0.0,
            prev_span: 0.0,
        }
    }

    /// Returns `true` while a pinch is running.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Drops any running pinch without reporting an end.
    pub fn reset(&mut self) {
        self.in_progress = false;
        self.pointer_count = 0;
        self.initial_span = 0.0;
        self.prev_span = 0.0;
    }

    /// Feeds one event and returns the resulting transitions.
    pub fn on_event(&mut self, event: &PointerEvent) -> PinchEvents {
        let mut out = PinchEvents::new();

        if matches!(event.phase, PointerPhase::Up | PointerPhase::Cancel) {
            if self.in_progress {
                out.push(PinchEvent::End);
            }
            self.reset();
            return out;
        }

        let count = event.active().count();
        let Some(focus) = centroid(event.active().map(|p| p.position)) else {
            return out;
        };
        let span = if count >= 2 {
            let total: f64 = event.active().map(|p| p.position.distance(focus)).sum();
            2.0 * total / count as f64
        } else {
            0.0
        };

        let pointers_changed = count != self.pointer_count
            || matches!(
                event.phase,
                PointerPhase::Down | PointerPhase::PointerDown(_) | PointerPhase::PointerUp(_)
            );
        self.pointer_count = count;

        if pointers_changed {
            let was_in_progress = self.in_progress;
            if was_in_progress {
                out.push(PinchEvent::End);
                self.in_progress = false;
            }
            self.initial_span = span;
            self.prev_span = span;
            if was_in_progress && count >= 2 && span > 0.0 {
                self.in_progress = true;
                out.push(PinchEvent::Begin { focus });
            }
            return out;
        }

        if count < 2 || span <= 0.0 {
            return out;
        }

        if !self.in_progress {
            if (span - self.initial_span).abs() > self.span_slop {
                self.in_progress = true;
                self.prev_span = span;
                out.push(PinchEvent::Begin { focus });
            }
            return out;
        }

        let factor = span / self.prev_span;
        self.prev_span = span;
        out.push(PinchEvent::Update { factor, focus });
        out
    }
}
