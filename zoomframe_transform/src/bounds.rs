// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport geometry and the two clamps that keep a zoomed surface covering it.
//!
//! Both clamps work on [`EdgeOffsets`]: the scaled surface expressed as signed
//! distances from the four viewport edges. A surface that fully covers the
//! viewport has `left <= 0`, `top <= 0`, `right >= 0`, `bottom >= 0`.

use kurbo::{Size, Vec2};

/// Pixel size of the container the surface lives in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport of the given pixel size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    ///
    /// No clamp is possible against an empty viewport.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Size as floating point, for geometry.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Scaled surface extent as signed offsets from the viewport's own edges.
///
/// `left`/`top` are the position of the surface's top-left corner; `right` and
/// `bottom` are how far the surface's far edges reach beyond the viewport's far
/// edges (negative when they fall short).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeOffsets {
    /// Offset of the surface's left edge from the viewport's left edge.
    pub left: f64,
    /// Offset of the surface's top edge from the viewport's top edge.
    pub top: f64,
    /// Offset of the surface's right edge from the viewport's right edge.
    pub right: f64,
    /// Offset of the surface's bottom edge from the viewport's bottom edge.
    pub bottom: f64,
}

impl EdgeOffsets {
    /// Computes the offsets of a surface the size of `viewport`, scaled by
    /// `scale`, whose top-left corner sits at `origin`.
    #[must_use]
    pub fn new(viewport: Viewport, scale: f64, origin: Vec2) -> Self {
        let size = viewport.size();
        Self {
            left: origin.x,
            top: origin.y,
            right: size.width * scale + origin.x - size.width,
            bottom: size.height * scale + origin.y - size.height,
        }
    }

    /// Returns `true` if no gap wider than `border` shows on any side.
    #[must_use]
    pub fn covers(&self, border: f64) -> bool {
        self.left <= border && self.top <= border && self.right >= -border && self.bottom >= -border
    }
}

/// Translation that pulls an over-extended edge back to the border after a
/// scale change.
///
/// Returns zero for an empty viewport.
#[must_use]
pub fn scale_correction(viewport: Viewport, edges: EdgeOffsets, border: f64) -> Vec2 {
    if viewport.is_empty() {
        return Vec2::ZERO;
    }
    let mut delta = Vec2::ZERO;
    if edges.left > border {
        delta.x = border - edges.left;
    }
    if edges.right < -border {
        delta.x = -border - edges.right;
    }
    if edges.top > border {
        delta.y = border - edges.top;
    }
    if edges.bottom < -border {
        delta.y = -border - edges.bottom;
    }
    delta
}

/// Limits a requested pan so no edge crosses the border in the disallowed
/// direction.
///
/// Each axis is handled on its own. Moving towards an edge that is already past
/// the border snaps it back exactly onto the border; moving away from it is
/// always allowed. Below normal scale, or against an empty viewport, the delta
/// passes through untouched.
#[must_use]
pub fn clamp_pan(
    viewport: Viewport,
    edges: EdgeOffsets,
    scale: f64,
    border: f64,
    delta: Vec2,
) -> Vec2 {
    if scale < crate::SCALE_NORMAL || viewport.is_empty() {
        return delta;
    }
    Vec2::new(
        clamp_axis(delta.x, edges.left, edges.right, border),
        clamp_axis(delta.y, edges.top, edges.bottom, border),
    )
}

fn clamp_axis(d: f64, near: f64, far: f64, border: f64) -> f64 {
    if d > 0.0 {
        if near > border || near + d > border {
            border - near
        } else {
            d
        }
    } else if d < 0.0 {
        if far < -border || far + d < -border {
            -border - far
        } else {
            d
        }
    } else {
        0.0
    }
}
