// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomframe: pinch, pan and double-tap zoom for one surface in a viewport.
//!
//! A [`ZoomFrame`] sits between a host view tree and a single child surface
//! (a video output, an image, a canvas). The host forwards three things:
//!
//! - Layout passes, via [`ZoomFrame::on_layout`]. The first non-empty layout
//!   with a child binds the surface; later width changes (device rotation)
//!   reset the zoom.
//! - Pointer events, via [`ZoomFrame::on_pointer_event`].
//! - Frame clock ticks, via [`ZoomFrame::on_frame`], while
//!   [`ZoomFrame::needs_frame`] is `true`.
//!
//! In return it exposes a [`SurfaceTransform`] to apply to the surface.
//!
//! The underlying pieces live in two smaller crates that can be used on their
//! own and are re-exported here:
//!
//! - [`zoomframe_transform`]: scale limits, pan clamping and auto-scale
//!   animation around a movable pivot.
//! - [`zoomframe_gesture`]: pointer-stream recognition of double taps,
//!   pinches and pans.
//!
//! ## Example
//!
//! ```rust
//! use zoomframe::pointer::{PointerEvent, PointerPhase};
//! use zoomframe::{ZoomConfig, ZoomFrame};
//!
//! let mut frame = ZoomFrame::<&str>::default();
//! assert!(frame.on_layout(800, 600, || Some("video")));
//!
//! // Double tap in the middle of the view.
//! for (phase, t) in [
//!     (PointerPhase::Down, 0),
//!     (PointerPhase::Up, 50),
//!     (PointerPhase::Down, 150),
//!     (PointerPhase::Up, 200),
//! ] {
//!     frame.on_pointer_event(&PointerEvent::new(phase, t).with_pointer(0, (400.0, 300.0)));
//! }
//!
//! let mut now = 200;
//! while frame.needs_frame() {
//!     now += 16;
//!     frame.on_frame(now);
//! }
//! assert_eq!(
//!     frame.transform().map(|t| t.scale),
//!     Some(ZoomConfig::default().scale_mid())
//! );
//! assert!(frame.wants_pointer_capture());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to `kurbo`.
//! - `libm`: `no_std` float math through `kurbo`.
//! - `serde`: derive `Serialize`/`Deserialize` for both configuration types.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod frame;

pub use error::FrameConfigError;
pub use frame::ZoomFrame;

pub use zoomframe_gesture::{
    Gesture, GestureConfig, GestureConfigError, GestureInterpreter, Gestures, pointer,
};
pub use zoomframe_transform::{
    AnimationStatus, ConfigError, SCALE_NORMAL, SurfaceTransform, TransformController, Viewport,
    ZoomConfig,
};
pub use zoomframe_gesture;
pub use zoomframe_transform;
