// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::bounds::{EdgeOffsets, Viewport};

/// Uniform scale, translation and pivot of the surface.
///
/// This is the tuple a host copies onto its rendering of the surface every
/// frame. Scaling happens around `pivot` (in the surface's own, untransformed
/// coordinates) and `translation` is applied afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    /// Uniform scale factor, applied to both axes.
    pub scale: f64,
    /// Translation applied after scaling, in viewport pixels.
    pub translation: Vec2,
    /// Point held fixed by the scale, in surface coordinates.
    pub pivot: Point,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl SurfaceTransform {
    /// Unscaled, untranslated surface with its pivot at the origin.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
        pivot: Point::ORIGIN,
    };

    /// Horizontal scale. Always equal to [`scale_y`](Self::scale_y).
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale
    }

    /// Vertical scale. Always equal to [`scale_x`](Self::scale_x).
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale
    }

    /// Surface-to-viewport matrix: scale about the pivot, then translate.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let pivot = self.pivot.to_vec2();
        Affine::translate(self.translation + pivot)
            * Affine::scale(self.scale)
            * Affine::translate(-pivot)
    }

    /// Where the surface's top-left corner lands in the viewport.
    ///
    /// This is the translation component of [`to_affine`](Self::to_affine).
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.translation + self.pivot.to_vec2() * (1.0 - self.scale)
    }

    /// Signed offsets of the scaled surface from the viewport edges.
    #[must_use]
    pub fn bounds(&self, viewport: Viewport) -> EdgeOffsets {
        EdgeOffsets::new(viewport, self.scale, self.origin())
    }

    /// The scaled surface as a rectangle in viewport coordinates.
    #[must_use]
    pub fn surface_rect(&self, viewport: Viewport) -> Rect {
        let origin = self.origin().to_point();
        Rect::from_origin_size(origin, viewport.size() * self.scale)
    }

    /// Maps a point in surface coordinates to viewport coordinates.
    #[must_use]
    pub fn surface_to_view_point(&self, pt: Point) -> Point {
        let origin = self.origin();
        Point::new(
            pt.x * self.scale + origin.x,
            pt.y * self.scale + origin.y,
        )
    }

    /// Maps a viewport point back into surface coordinates.
    ///
    /// Returns `None` if the scale is zero.
    #[must_use]
    pub fn view_to_surface_point(&self, pt: Point) -> Option<Point> {
        if self.scale == 0.0 {
            return None;
        }
        let origin = self.origin();
        Some(Point::new(
            (pt.x - origin.x) / self.scale,
            (pt.y - origin.y) / self.scale,
        ))
    }
}
