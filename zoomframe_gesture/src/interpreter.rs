// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use zoomframe_transform::{SCALE_NORMAL, TransformController, ZoomConfig};

use crate::config::{GestureConfig, GestureConfigError};
use crate::double_tap::DoubleTapDetector;
use crate::pan::PanTracker;
use crate::pinch::{PinchDetector, PinchEvent};
use crate::pointer::{PointerEvent, PointerPhase};

/// Semantic gesture recognized from the pointer stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Two quick taps; `at` is where the first one landed.
    DoubleTap {
        /// Anchor point for the zoom.
        at: Point,
    },
    /// A pinch started; the pivot should move to `focus`.
    PinchBegin {
        /// Centroid of the pinching pointers.
        focus: Point,
    },
    /// The pinch span changed by `factor`.
    Pinch {
        /// Span ratio since the previous update.
        factor: f64,
        /// Centroid of the pinching pointers.
        focus: Point,
    },
    /// The pinch ended.
    PinchEnd,
    /// The pointer centroid moved.
    Pan {
        /// Movement since the previous event.
        delta: Vec2,
    },
    /// The last pointer lifted or the sequence was cancelled.
    Release,
}

/// Gestures recognized from a single event.
pub type Gestures = SmallVec<[Gesture; 4]>;

/// Next stop of the three-level double-tap cycle: normal → mid → max → normal.
#[must_use]
pub fn double_tap_target(scale: f64, config: &ZoomConfig) -> f64 {
    let mid = config.scale_mid();
    if scale < mid {
        mid
    } else if scale < config.scale_max {
        config.scale_max
    } else {
        SCALE_NORMAL
    }
}

/// Turns pointer events into [`Gesture`]s and applies them to a controller.
///
/// Per event, the double-tap detector runs first and swallows the event when
/// it fires. Otherwise the pinch detector sees the event, and pan tracking
/// runs afterwards on the same event, so a two-finger pinch also pans by the
/// movement of its centroid.
#[derive(Clone, Debug)]
pub struct GestureInterpreter {
    config: GestureConfig,
    double_tap: DoubleTapDetector,
    pinch: PinchDetector,
    pan: PanTracker,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureInterpreter {
    /// Creates an interpreter with the given thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            double_tap: DoubleTapDetector::new(&config),
            pinch: PinchDetector::new(&config),
            pan: PanTracker::default(),
        }
    }

    /// Creates an interpreter after checking `config`.
    pub fn try_new(config: GestureConfig) -> Result<Self, GestureConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Pointers counted in the previous event, zero between sequences.
    #[must_use]
    pub fn last_pointer_count(&self) -> usize {
        self.pan.last_pointer_count
    }

    /// Forgets all in-progress recognition.
    pub fn reset(&mut self) {
        self.double_tap.reset();
        self.pinch.reset();
        self.pan = PanTracker::default();
    }

    /// Classifies one event without touching any transform.
    pub fn handle(&mut self, event: &PointerEvent) -> Gestures {
        let mut out = Gestures::new();

        if let Some(at) = self.double_tap.on_event(event) {
            out.push(Gesture::DoubleTap { at });
            return out;
        }

        out.extend(self.pinch.on_event(event).into_iter().map(|p| match p {
            PinchEvent::Begin { focus } => Gesture::PinchBegin { focus },
            PinchEvent::Update { factor, focus } => Gesture::Pinch { factor, focus },
            PinchEvent::End => Gesture::PinchEnd,
        }));

        if let Some(delta) = self.pan.update(event) {
            out.push(Gesture::Pan { delta });
        }

        if matches!(event.phase, PointerPhase::Up | PointerPhase::Cancel) {
            self.pan.end();
            out.push(Gesture::Release);
        }
        out
    }

    /// Classifies one event and applies the result to `controller`.
    ///
    /// Returns the gestures that were recognized.
    pub fn dispatch(
        &mut self,
        event: &PointerEvent,
        controller: &mut TransformController,
    ) -> Gestures {
        let gestures = self.handle(event);
        for gesture in &gestures {
            apply(controller, *gesture, event.time_ms);
        }
        gestures
    }
}

/// Applies one gesture to `controller`; `now_ms` schedules double-tap animations.
pub fn apply(controller: &mut TransformController, gesture: Gesture, now_ms: u64) {
    match gesture {
        Gesture::DoubleTap { at } => {
            if controller.is_auto_scaling() {
                log::trace!("double tap at {at:?} ignored, auto-scale in flight");
                return;
            }
            let target = double_tap_target(controller.scale(), controller.config());
            controller.set_pivot(at);
            controller.start_auto_scale(target, now_ms);
        }
        Gesture::PinchBegin { focus } => controller.set_pivot(focus),
        Gesture::Pinch { factor, focus } => controller.apply_scale_factor(factor, focus),
        Gesture::PinchEnd => {}
        Gesture::Pan { delta } => {
            controller.apply_pan(delta);
        }
        Gesture::Release => controller.release(),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use zoomframe_transform::{TransformController, Viewport, ZoomConfig};

    use super::*;

    fn ev(phase: PointerPhase, t: u64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(phase, t).with_pointer(0, (x, y))
    }

    fn controller() -> TransformController {
        TransformController::new(ZoomConfig::default(), Viewport::new(800, 600))
    }

    #[test]
    fn target_cycles_through_three_levels() {
        let config = ZoomConfig::default();
        let mid = config.scale_mid();
        assert_eq!(double_tap_target(1.0, &config), mid);
        assert_eq!(double_tap_target(0.6, &config), mid);
        assert_eq!(double_tap_target(mid, &config), 3.0);
        assert_eq!(double_tap_target(2.9, &config), 3.0);
        assert_eq!(double_tap_target(3.0, &config), 1.0);
    }

    #[test]
    fn single_finger_drag_pans_then_releases() {
        let mut g = GestureInterpreter::default();
        assert!(g.handle(&ev(PointerPhase::Down, 0, 10.0, 10.0)).is_empty());
        assert_eq!(
            g.handle(&ev(PointerPhase::Move, 16, 30.0, 5.0)).as_slice(),
            &[Gesture::Pan {
                delta: Vec2::new(20.0, -5.0)
            }]
        );
        assert_eq!(
            g.handle(&ev(PointerPhase::Up, 32, 30.0, 5.0)).as_slice(),
            &[Gesture::Release]
        );
        assert_eq!(g.last_pointer_count(), 0);
    }

    #[test]
    fn double_tap_swallows_its_event() {
        let mut g = GestureInterpreter::default();
        g.handle(&ev(PointerPhase::Down, 0, 10.0, 10.0));
        g.handle(&ev(PointerPhase::Up, 50, 10.0, 10.0));
        let out = g.handle(&ev(PointerPhase::Down, 150, 12.0, 10.0));
        assert_eq!(
            out.as_slice(),
            &[Gesture::DoubleTap {
                at: Point::new(10.0, 10.0)
            }]
        );
        // The swallowed down never reached pan tracking.
        assert_eq!(g.last_pointer_count(), 0);
    }

    #[test]
    fn pinch_also_pans_by_centroid() {
        let mut g = GestureInterpreter::default();
        g.handle(&ev(PointerPhase::Down, 0, 100.0, 100.0));
        g.handle(
            &PointerEvent::new(PointerPhase::PointerDown(1), 10)
                .with_pointer(0, (100.0, 100.0))
                .with_pointer(1, (200.0, 100.0)),
        );
        let out = g.handle(
            &PointerEvent::new(PointerPhase::Move, 20)
                .with_pointer(0, (70.0, 110.0))
                .with_pointer(1, (250.0, 110.0)),
        );
        assert_eq!(
            out.as_slice(),
            &[
                Gesture::PinchBegin {
                    focus: Point::new(160.0, 110.0)
                },
                Gesture::Pan {
                    delta: Vec2::new(10.0, 10.0)
                },
            ]
        );
    }

    #[test]
    fn dispatch_pinch_then_release_snaps_to_normal() {
        let mut g = GestureInterpreter::default();
        let mut c = controller();
        let two = |phase, t, half: f64| {
            PointerEvent::new(phase, t)
                .with_pointer(0, (400.0 - half, 300.0))
                .with_pointer(1, (400.0 + half, 300.0))
        };
        g.dispatch(&ev(PointerPhase::Down, 0, 300.0, 300.0), &mut c);
        g.dispatch(&two(PointerPhase::PointerDown(1), 10, 100.0), &mut c);
        g.dispatch(&two(PointerPhase::Move, 20, 80.0), &mut c);
        g.dispatch(&two(PointerPhase::Move, 30, 56.0), &mut c);
        assert!((c.scale() - 0.7).abs() < 1e-12);
        g.dispatch(&two(PointerPhase::PointerUp(1), 40, 56.0), &mut c);
        g.dispatch(&ev(PointerPhase::Up, 50, 344.0, 300.0), &mut c);
        assert_eq!(c.scale(), 1.0);
    }

    #[test]
    fn double_tap_while_animating_is_ignored() {
        let mut c = controller();
        apply(&mut c, Gesture::DoubleTap { at: Point::new(100.0, 100.0) }, 0);
        assert!(c.is_auto_scaling());
        let target = c.auto_scale_target();
        let pivot = c.transform().pivot;

        apply(&mut c, Gesture::DoubleTap { at: Point::new(700.0, 500.0) }, 5);
        assert_eq!(c.auto_scale_target(), target);
        assert_eq!(c.transform().pivot, pivot);
    }
}
