// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan tracking: centroid movement deltas under multi-touch.
//!
//! ## Usage
//!
//! 1) Feed every event to [`PanTracker::update`]; it returns the centroid
//!    movement since the previous event on `Move`.
//! 2) Whenever the number of pointers changes, the reference centroid is
//!    re-seeded without reporting movement, so a second finger landing does
//!    not make the surface jump.
//! 3) Call [`PanTracker::end`] when the sequence finishes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use zoomframe_gesture::pan::PanTracker;
//! use zoomframe_gesture::pointer::{PointerEvent, PointerPhase};
//!
//! let mut pan = PanTracker::default();
//!
//! pan.update(&PointerEvent::new(PointerPhase::Down, 0).with_pointer(0, (10.0, 20.0)));
//! let delta = pan.update(&PointerEvent::new(PointerPhase::Move, 16).with_pointer(0, (15.0, 25.0)));
//! assert_eq!(delta, Some(Vec2::new(5.0, 5.0)));
//!
//! // A second finger lands: no movement is reported for the centroid shift.
//! let down = PointerEvent::new(PointerPhase::PointerDown(1), 32)
//!     .with_pointer(0, (15.0, 25.0))
//!     .with_pointer(1, (115.0, 25.0));
//! assert_eq!(pan.update(&down), None);
//! ```

use kurbo::{Point, Vec2};

use crate::pointer::{PointerEvent, PointerPhase};

/// Tracks the pointer centroid across events.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanTracker {
    /// Centroid of the previous event.
    pub last_centroid: Option<Point>,
    /// Number of pointers in the previous event.
    pub last_pointer_count: usize,
}

impl PanTracker {
    /// Records `event` and returns the centroid movement for a `Move`.
    ///
    /// Returns `None` for other phases, for zero movement, for a changed
    /// pointer count, and for events without pointers.
    pub fn update(&mut self, event: &PointerEvent) -> Option<Vec2> {
        let count = event.pointer_count();
        let centroid = event.centroid();
        if count != self.last_pointer_count {
            self.last_centroid = centroid;
        }
        self.last_pointer_count = count;

        if event.phase != PointerPhase::Move {
            return None;
        }
        let current = centroid?;
        let delta = self.last_centroid.map(|last| current - last);
        self.last_centroid = Some(current);
        delta.filter(|d| *d != Vec2::ZERO)
    }

    /// Ends the sequence; the next event re-seeds the centroid.
    pub fn end(&mut self) {
        self.last_pointer_count = 0;
    }

    /// Returns `true` while at least one pointer is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.last_pointer_count > 0
    }
}
