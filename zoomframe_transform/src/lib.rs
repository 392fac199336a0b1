// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomframe Transform: scale, translation and bounds for one zoomable surface.
//!
//! This crate holds the transform of a single surface that fills a viewport
//! and can be zoomed and panned. It focuses on:
//! - Uniform scale limits (`0.5..=3.0` by default).
//! - Keeping the surface covering the viewport whenever it is at or above
//!   normal scale.
//! - Re-anchoring the scale pivot without moving the surface on screen.
//! - A stepped auto-scale animation driven by an external clock.
//!
//! It does **not** interpret pointer input or render anything. Callers are
//! expected to:
//! - Feed pan deltas and pinch factors into [`TransformController`] (the
//!   `zoomframe_gesture` crate does this from raw pointer events).
//! - Call [`TransformController::advance`] from their frame clock while
//!   [`TransformController::is_auto_scaling`] is `true`.
//! - Copy [`SurfaceTransform`] onto their own rendering of the surface, or use
//!   [`SurfaceTransform::to_affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use zoomframe_transform::{TransformController, Viewport, ZoomConfig};
//!
//! let mut controller = TransformController::new(ZoomConfig::default(), Viewport::new(800, 600));
//!
//! // Pinch out around the view center.
//! controller.apply_scale_factor(2.0, Point::new(400.0, 300.0));
//! assert_eq!(controller.scale(), 2.0);
//!
//! // Panning is limited so no gap opens at the viewport edges.
//! let applied = controller.apply_pan(Vec2::new(1_000.0, 0.0));
//! assert_eq!(applied, Vec2::new(400.0, 0.0));
//! ```
//!
//! ## Animation example
//!
//! ```rust
//! use zoomframe_transform::{AnimationStatus, TransformController, Viewport, ZoomConfig};
//!
//! let mut controller = TransformController::new(ZoomConfig::default(), Viewport::new(800, 600));
//! assert!(controller.start_auto_scale(2.0, 0));
//!
//! // Drive it from a frame clock (milliseconds)...
//! let mut now = 0;
//! while controller.advance(now) != AnimationStatus::Finished {
//!     now += 16;
//! }
//! // ...and it lands exactly on the target.
//! assert_eq!(controller.scale(), 2.0);
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform; there is no rotation or skew.
//! - The surface is assumed to be the size of the viewport at normal scale.
//! - Below normal scale the surface may drift freely; hosts snap it back with
//!   [`TransformController::release`].
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
pub mod bounds;
mod config;
mod controller;
mod surface;

pub use animation::{AnimationStatus, AutoScale, AutoScaleStep, TickClock};
pub use bounds::{EdgeOffsets, Viewport};
pub use config::{ConfigError, SCALE_NORMAL, ZoomConfig};
pub use controller::{ControllerDebugInfo, TransformController};
pub use surface::SurfaceTransform;
