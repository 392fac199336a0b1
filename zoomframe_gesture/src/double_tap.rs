// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition from raw pointer events.
//!
//! A *tap* is a single-pointer down/up that never wandered further than
//! `tap_slop` from where it landed and never saw a second pointer. A double
//! tap fires on the **down** of a second tap that lands within
//! `double_tap_slop` of the first and follows its up by a gap inside
//! `[double_tap_min_time_ms, double_tap_timeout_ms]`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use zoomframe_gesture::GestureConfig;
//! use zoomframe_gesture::double_tap::DoubleTapDetector;
//! use zoomframe_gesture::pointer::{PointerEvent, PointerPhase};
//!
//! let mut taps = DoubleTapDetector::new(&GestureConfig::default());
//! let at = (50.0, 50.0);
//!
//! assert_eq!(taps.on_event(&PointerEvent::new(PointerPhase::Down, 0).with_pointer(0, at)), None);
//! assert_eq!(taps.on_event(&PointerEvent::new(PointerPhase::Up, 60).with_pointer(0, at)), None);
//! let fired = taps.on_event(&PointerEvent::new(PointerPhase::Down, 160).with_pointer(0, at));
//! assert_eq!(fired, Some(Point::new(50.0, 50.0)));
//! ```

use kurbo::Point;

use crate::GestureConfig;
use crate::pointer::{PointerEvent, PointerPhase};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tap {
    position: Point,
    up_ms: u64,
}

/// Recognizes double taps.
#[derive(Clone, Debug)]
pub struct DoubleTapDetector {
    timeout_ms: u64,
    min_time_ms: u64,
    tap_slop: f64,
    double_tap_slop: f64,
    /// Landing point of the sequence in progress, while it still qualifies as a tap.
    candidate: Option<Point>,
    previous: Option<Tap>,
}

impl DoubleTapDetector {
    /// Creates a detector using the thresholds in `config`.
    #[must_use]
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            timeout_ms: config.double_tap_timeout_ms,
            min_time_ms: config.double_tap_min_time_ms,
            tap_slop: config.tap_slop,
            double_tap_slop: config.double_tap_slop,
            candidate: None,
            previous: None,
        }
    }

    /// Feeds one event; returns the first tap's position when a double tap fires.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<Point> {
        match event.phase {
            PointerPhase::Down => {
                let pos = event.primary()?;
                if let Some(first) = self.previous.take()
                    && self.is_second_tap(first, pos, event.time_ms)
                {
                    self.candidate = None;
                    return Some(first.position);
                }
                self.candidate = Some(pos);
                None
            }
            PointerPhase::Move => {
                if let (Some(start), Some(pos)) = (self.candidate, event.primary())
                    && start.distance(pos) > self.tap_slop
                {
                    self.candidate = None;
                }
                None
            }
            PointerPhase::Up => {
                self.previous = self.candidate.take().map(|position| Tap {
                    position,
                    up_ms: event.time_ms,
                });
                None
            }
            PointerPhase::PointerDown(_) => {
                self.candidate = None;
                None
            }
            PointerPhase::PointerUp(_) => None,
            PointerPhase::Cancel => {
                self.reset();
                None
            }
        }
    }

    /// Forgets any tap in progress or remembered.
    pub fn reset(&mut self) {
        self.candidate = None;
        self.previous = None;
    }

    fn is_second_tap(&self, first: Tap, pos: Point, down_ms: u64) -> bool {
        let Some(gap) = down_ms.checked_sub(first.up_ms) else {
            return false;
        };
        (self.min_time_ms..=self.timeout_ms).contains(&gap)
            && first.position.distance(pos) <= self.double_tap_slop
    }
}
