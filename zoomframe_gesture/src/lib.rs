// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomframe Gesture: pointer-stream recognition for a pan/zoom surface.
//!
//! This crate turns raw, tagged pointer events into the three gestures a
//! zoomable surface responds to. Each recognizer is a small state machine
//! that can also be used on its own:
//!
//! - [`double_tap`]: two quick taps in the same place
//! - [`pinch`]: scale factor and focal point from two or more pointers
//! - [`pan`]: centroid movement, re-seeded whenever the pointer count changes
//! - [`pointer`]: the event model all of them consume
//!
//! [`GestureInterpreter`] combines them in a fixed order and can apply the
//! result directly to a [`zoomframe_transform::TransformController`].
//!
//! ## Dispatch order
//!
//! For each event:
//!
//! 1. The double-tap detector runs. If it fires, the event is consumed and
//!    nothing else sees it.
//! 2. Otherwise the pinch detector sees the event.
//! 3. Pan tracking then runs on the same event, so pinching fingers that drift
//!    together also pan the surface.
//! 4. `Up` and `Cancel` finish with a [`Gesture::Release`], which snaps a shrunk
//!    surface back to normal scale.
//!
//! ## Example
//!
//! ```rust
//! use zoomframe_gesture::GestureInterpreter;
//! use zoomframe_gesture::pointer::{PointerEvent, PointerPhase};
//! use zoomframe_transform::{AnimationStatus, TransformController, Viewport, ZoomConfig};
//!
//! let mut controller = TransformController::new(ZoomConfig::default(), Viewport::new(800, 600));
//! let mut gestures = GestureInterpreter::default();
//!
//! let at = (400.0, 300.0);
//! for (phase, t) in [
//!     (PointerPhase::Down, 0),
//!     (PointerPhase::Up, 60),
//!     (PointerPhase::Down, 160),
//!     (PointerPhase::Up, 220),
//! ] {
//!     gestures.dispatch(&PointerEvent::new(phase, t).with_pointer(0, at), &mut controller);
//! }
//!
//! // The second tap started an animation towards the middle zoom level.
//! assert!(controller.is_auto_scaling());
//! while controller.step_animation() == AnimationStatus::Running {}
//! assert_eq!(controller.scale(), ZoomConfig::default().scale_mid());
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`GestureConfig`].
//!
//! This crate is `no_std`.

#![no_std]

mod config;
pub mod double_tap;
mod interpreter;
pub mod pan;
pub mod pinch;
pub mod pointer;

pub use config::{GestureConfig, GestureConfigError};
pub use interpreter::{Gesture, GestureInterpreter, Gestures, apply, double_tap_target};
