// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use zoomframe_gesture::pointer::PointerEvent;
use zoomframe_gesture::{GestureConfig, GestureInterpreter, Gestures};
use zoomframe_transform::{
    AnimationStatus, SurfaceTransform, TransformController, Viewport, ZoomConfig,
};

use crate::error::FrameConfigError;

#[derive(Clone, Debug)]
struct Binding<S> {
    surface: S,
    controller: TransformController,
}

/// A viewport hosting one zoomable surface.
///
/// `ZoomFrame` is the piece a host wires into its view tree. It:
/// - Observes layout passes, binding the child surface the first time the
///   viewport is non-empty and a child exists.
/// - Resets the zoom when the viewport width changes (rotation).
/// - Routes pointer events through a [`GestureInterpreter`] into the bound
///   surface's [`TransformController`].
/// - Advances double-tap animations from the host's frame clock.
///
/// `S` is whatever handle the host uses for the surface (a texture id, a
/// video output, a widget key). It is stored, never inspected.
#[derive(Clone, Debug)]
pub struct ZoomFrame<S> {
    zoom_config: ZoomConfig,
    gestures: GestureInterpreter,
    viewport: Viewport,
    last_width: u32,
    binding: Option<Binding<S>>,
}

impl<S> Default for ZoomFrame<S> {
    fn default() -> Self {
        Self::new(ZoomConfig::default(), GestureConfig::default())
    }
}

impl<S> ZoomFrame<S> {
    /// Creates an empty frame; nothing is bound until the first layout.
    #[must_use]
    pub fn new(zoom_config: ZoomConfig, gesture_config: GestureConfig) -> Self {
        Self {
            zoom_config,
            gestures: GestureInterpreter::new(gesture_config),
            viewport: Viewport::default(),
            last_width: 0,
            binding: None,
        }
    }

    /// Creates an empty frame after validating both configurations.
    pub fn try_new(
        zoom_config: ZoomConfig,
        gesture_config: GestureConfig,
    ) -> Result<Self, FrameConfigError> {
        zoom_config.validate()?;
        gesture_config.validate()?;
        Ok(Self::new(zoom_config, gesture_config))
    }

    /// Handles a layout pass of `width` x `height` pixels.
    ///
    /// `child` is asked for the surface only while nothing is bound and the
    /// viewport is non-empty. Returns `true` if this call bound the surface.
    pub fn on_layout(&mut self, width: u32, height: u32, child: impl FnOnce() -> Option<S>) -> bool {
        self.viewport = Viewport::new(width, height);
        if let Some(binding) = self.binding.as_mut() {
            binding.controller.set_viewport(self.viewport);
            if self.last_width != 0 && self.last_width != width {
                log::debug!(
                    "viewport width {} -> {width}, resetting zoom",
                    self.last_width
                );
                binding.controller.reset_scale();
            }
        }
        self.last_width = width;

        if self.binding.is_some() || self.viewport.is_empty() {
            return false;
        }
        let Some(surface) = child() else {
            return false;
        };
        log::debug!("surface bound at {width}x{height}");
        self.binding = Some(Binding {
            surface,
            controller: TransformController::new(self.zoom_config, self.viewport),
        });
        true
    }

    /// Feeds one pointer event. Before a surface is bound this does nothing.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Gestures {
        let Some(binding) = self.binding.as_mut() else {
            log::trace!("{:?} before surface binding ignored", event.phase);
            return Gestures::new();
        };
        self.gestures.dispatch(event, &mut binding.controller)
    }

    /// Advances any running animation to `now_ms`.
    pub fn on_frame(&mut self, now_ms: u64) -> AnimationStatus {
        match self.binding.as_mut() {
            Some(binding) => binding.controller.advance(now_ms),
            None => AnimationStatus::Idle,
        }
    }

    /// Runs one animation tick immediately.
    pub fn step_animation(&mut self) -> AnimationStatus {
        match self.binding.as_mut() {
            Some(binding) => binding.controller.step_animation(),
            None => AnimationStatus::Idle,
        }
    }

    /// Returns `true` while the host should keep delivering frames.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.controller()
            .is_some_and(TransformController::is_auto_scaling)
    }

    /// When the next animation tick is due, if one is scheduled.
    #[must_use]
    pub fn next_frame_deadline(&self) -> Option<u64> {
        self.controller()
            .and_then(TransformController::next_tick_deadline)
    }

    /// Returns `true` while the scaled surface is larger than the viewport.
    ///
    /// Hosts nested in a scrolling container should keep pointer capture while
    /// this holds, so panning the surface does not scroll the container.
    #[must_use]
    pub fn wants_pointer_capture(&self) -> bool {
        let Some(controller) = self.controller() else {
            return false;
        };
        let rect = controller.transform().surface_rect(self.viewport);
        let size = self.viewport.size();
        rect.width() > size.width || rect.height() > size.height
    }

    /// Transform to apply to the surface, once bound.
    #[must_use]
    pub fn transform(&self) -> Option<SurfaceTransform> {
        self.controller().map(TransformController::transform)
    }

    /// The bound surface handle.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.binding.as_ref().map(|b| &b.surface)
    }

    /// Returns `true` once a surface has been bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// The controller of the bound surface.
    #[must_use]
    pub fn controller(&self) -> Option<&TransformController> {
        self.binding.as_ref().map(|b| &b.controller)
    }

    /// Mutable access to the controller of the bound surface.
    pub fn controller_mut(&mut self) -> Option<&mut TransformController> {
        self.binding.as_mut().map(|b| &mut b.controller)
    }

    /// Most recent viewport size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Tears down the binding and returns the surface handle.
    ///
    /// Gesture state and the remembered width are cleared, so a later layout
    /// binds a fresh surface at identity.
    pub fn detach(&mut self) -> Option<S> {
        self.gestures.reset();
        self.last_width = 0;
        self.viewport = Viewport::default();
        let binding = self.binding.take()?;
        log::debug!("surface detached");
        Some(binding.surface)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use zoomframe_gesture::pointer::{PointerEvent, PointerPhase};
    use zoomframe_gesture::{GestureConfig, GestureConfigError};
    use zoomframe_transform::{AnimationStatus, ZoomConfig};

    use super::ZoomFrame;
    use crate::FrameConfigError;

    fn bound() -> ZoomFrame<&'static str> {
        let mut frame = ZoomFrame::default();
        assert!(frame.on_layout(800, 600, || Some("video")));
        frame
    }

    #[test]
    fn binds_once_on_first_non_empty_layout() {
        let mut frame = ZoomFrame::<u32>::default();
        assert!(!frame.on_layout(0, 0, || Some(1)));
        assert!(!frame.on_layout(800, 600, || None));
        assert!(!frame.is_bound());
        assert!(frame.on_layout(800, 600, || Some(2)));
        assert!(!frame.on_layout(800, 600, || Some(3)));
        assert_eq!(frame.surface(), Some(&2));
    }

    #[test]
    fn events_before_binding_are_ignored() {
        let mut frame = ZoomFrame::<u32>::default();
        let down = PointerEvent::new(PointerPhase::Down, 0).with_pointer(0, (1.0, 1.0));
        assert!(frame.on_pointer_event(&down).is_empty());
        assert_eq!(frame.on_frame(100), AnimationStatus::Idle);
        assert_eq!(frame.step_animation(), AnimationStatus::Idle);
        assert_eq!(frame.transform(), None);
        assert!(!frame.needs_frame());
        assert!(!frame.wants_pointer_capture());
    }

    #[test]
    fn width_change_resets_zoom() {
        let mut frame = bound();
        let c = frame.controller_mut().unwrap();
        c.apply_scale_factor(2.5, Point::new(400.0, 300.0));
        assert!(frame.wants_pointer_capture());

        // Same width, different height: not a rotation.
        frame.on_layout(800, 500, || None);
        assert_eq!(frame.transform().unwrap().scale, 2.5);

        frame.on_layout(600, 800, || None);
        let t = frame.transform().unwrap();
        assert_eq!(t.scale, 1.0);
        assert!(t.bounds(frame.viewport()).covers(1e-9));
        assert!(!frame.wants_pointer_capture());
    }

    #[test]
    fn detach_returns_surface_and_allows_rebinding() {
        let mut frame = bound();
        frame.controller_mut().unwrap().set_scale(2.0);
        assert_eq!(frame.detach(), Some("video"));
        assert!(!frame.is_bound());
        assert_eq!(frame.detach(), None);

        // Re-attaching at a new width is a fresh binding, not a rotation.
        assert!(frame.on_layout(1024, 768, || Some("other")));
        assert_eq!(frame.transform().unwrap().scale, 1.0);
        assert_eq!(frame.surface(), Some(&"other"));
    }

    #[test]
    fn needs_frame_follows_animation() {
        let mut frame = bound();
        assert!(frame.controller_mut().unwrap().start_auto_scale(3.0, 0));
        assert!(frame.needs_frame());
        assert_eq!(frame.next_frame_deadline(), Some(16));
        while frame.on_frame(u64::MAX) == AnimationStatus::Running {}
        assert!(!frame.needs_frame());
        assert_eq!(frame.next_frame_deadline(), None);
    }

    #[test]
    fn unvalidated_inverted_limits_survive_a_double_tap() {
        let zoom = ZoomConfig {
            scale_min: 2.0,
            scale_max: 1.5,
            ..ZoomConfig::default()
        };
        let mut frame = ZoomFrame::new(zoom, GestureConfig::default());
        assert!(frame.on_layout(800, 600, || Some(())));

        let at = (400.0, 300.0);
        for (phase, t) in [
            (PointerPhase::Down, 0),
            (PointerPhase::Up, 50),
            (PointerPhase::Down, 150),
            (PointerPhase::Up, 200),
        ] {
            frame.on_pointer_event(&PointerEvent::new(phase, t).with_pointer(0, at));
        }
        assert!(frame.needs_frame());
        assert_eq!(frame.on_frame(10_000), AnimationStatus::Finished);
        let scale = frame.transform().unwrap().scale;
        assert!((1.5..=2.0).contains(&scale), "scale {scale}");
    }

    #[test]
    fn try_new_reports_the_bad_half() {
        let zoom = ZoomConfig {
            animation_tick_ms: 0,
            ..ZoomConfig::default()
        };
        assert!(matches!(
            ZoomFrame::<u8>::try_new(zoom, GestureConfig::default()),
            Err(FrameConfigError::Zoom(_))
        ));

        let gesture = GestureConfig {
            tap_slop: f64::NAN,
            ..GestureConfig::default()
        };
        assert!(matches!(
            ZoomFrame::<u8>::try_new(ZoomConfig::default(), gesture),
            Err(FrameConfigError::Gesture(GestureConfigError::Slop {
                name: "tap_slop",
                ..
            }))
        ));
        assert!(ZoomFrame::<u8>::try_new(ZoomConfig::default(), GestureConfig::default()).is_ok());
    }
}
