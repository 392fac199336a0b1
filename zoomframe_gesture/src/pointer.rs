// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged pointer events, as delivered by the host.
//!
//! Every event carries *all* pointers in contact at that moment, including the
//! pointer that is lifting on [`PointerPhase::PointerUp`] and
//! [`PointerPhase::Up`]. [`PointerEvent::active`] skips the lifting pointer.

use kurbo::Point;
use smallvec::SmallVec;

/// Host-assigned identifier, stable for the lifetime of one contact.
pub type PointerId = u32;

/// What happened to the pointer set in a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// First pointer touched down.
    Down,
    /// An additional pointer touched down.
    PointerDown(PointerId),
    /// One or more pointers moved.
    Move,
    /// A pointer lifted while others remain down.
    PointerUp(PointerId),
    /// The last pointer lifted.
    Up,
    /// The host aborted the sequence.
    Cancel,
}

/// One contact point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Contact identifier.
    pub id: PointerId,
    /// Position in viewport coordinates.
    pub position: Point,
}

/// Pointers carried by one event. Inline up to four contacts.
pub type Pointers = SmallVec<[Pointer; 4]>;

/// A pointer event with its timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Kind of transition.
    pub phase: PointerPhase,
    /// All pointers in contact for this event.
    pub pointers: Pointers,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event with no pointers; add them with [`with_pointer`](Self::with_pointer).
    #[must_use]
    pub fn new(phase: PointerPhase, time_ms: u64) -> Self {
        Self {
            phase,
            pointers: Pointers::new(),
            time_ms,
        }
    }

    /// Adds a pointer.
    #[must_use]
    pub fn with_pointer(mut self, id: PointerId, position: impl Into<Point>) -> Self {
        self.pointers.push(Pointer {
            id,
            position: position.into(),
        });
        self
    }

    /// Number of pointers carried, including a lifting one.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Position of the first pointer.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.pointers.first().map(|p| p.position)
    }

    /// Mean position of every pointer carried, or `None` if there are none.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        centroid(self.pointers.iter().map(|p| p.position))
    }

    /// Pointers that remain in contact after this event.
    pub fn active(&self) -> impl Iterator<Item = &Pointer> + '_ {
        let lifting = match self.phase {
            PointerPhase::PointerUp(id) => Some(id),
            _ => None,
        };
        let ended = matches!(self.phase, PointerPhase::Up | PointerPhase::Cancel);
        self.pointers
            .iter()
            .filter(move |p| !ended && Some(p.id) != lifting)
    }
}

/// Arithmetic mean of `points`, or `None` for an empty iterator.
pub fn centroid(points: impl IntoIterator<Item = Point>) -> Option<Point> {
    let mut sum = (0.0, 0.0);
    let mut n = 0_u32;
    for p in points {
        sum.0 += p.x;
        sum.1 += p.y;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    let n = f64::from(n);
    Some(Point::new(sum.0 / n, sum.1 / n))
}
