// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carta View 2D: the map viewer's pan/zoom transform.
//!
//! [`Viewport`] tracks a pan offset and a uniform zoom factor and maps
//! world-space (map model) coordinates into view/device (pixel) coordinates:
//!
//! ```text
//! view = world * DISPLAY_SCALE * zoom + pan
//! ```
//!
//! [`DISPLAY_SCALE`] is a fixed magnification matching the map's coordinate
//! units to pixel-sized units, applied independently of user zoom. Zoom is
//! floored at [`MIN_ZOOM`] after every adjustment; panning accumulates
//! additively and is unconstrained.
//!
//! Rendering and hit-testing must read the same viewport snapshot within one
//! frame or input event; this crate only provides the conversion, callers own
//! the snapshot discipline.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use carta_view2d::Viewport;
//!
//! let view = Viewport::new();
//! // Default zoom is 2, so model (0.5, 0.5) lands at pixel (10, 10).
//! let pt = view.world_to_view_point(Point::new(0.5, 0.5));
//! assert_eq!(pt, Point::new(10.0, 10.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Affine, Point, Vec2};

/// Fixed world-units-to-pixels magnification applied independently of zoom.
pub const DISPLAY_SCALE: f64 = 10.0;

/// Lower bound on the zoom factor; also the initial zoom.
pub const MIN_ZOOM: f64 = 2.0;

/// Pan/zoom camera over the map plane.
///
/// Tracks the pan offset (view-space pixels) and the uniform zoom factor, and
/// keeps the world↔view affine pair in sync with them.
#[derive(Clone, Debug)]
pub struct Viewport {
    pan: Vec2,
    zoom: f64,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport at zero pan and the initial zoom of [`MIN_ZOOM`].
    #[must_use]
    pub fn new() -> Self {
        let mut vp = Self {
            pan: Vec2::ZERO,
            zoom: MIN_ZOOM,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the current pan offset in view pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Pans the view by a delta in view/device pixels.
    ///
    /// Panning is unconstrained; deltas accumulate additively.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan += delta;
        self.rebuild_transforms();
    }

    /// Sets the zoom factor, flooring it at [`MIN_ZOOM`].
    pub fn set_zoom(&mut self, zoom: f64) {
        let floored = zoom.max(MIN_ZOOM);
        if floored == self.zoom {
            return;
        }
        self.zoom = floored;
        self.rebuild_transforms();
    }

    /// Adjusts the zoom additively (wheel input), flooring the result.
    ///
    /// Underflow is not an error; a request below the floor silently clamps.
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.zoom + delta);
    }

    /// Converts a world-space point into view/device pixels.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view/device-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    fn rebuild_transforms(&mut self) {
        let scale = DISPLAY_SCALE * self.zoom;
        self.world_to_view = Affine::translate(self.pan) * Affine::scale(scale);
        self.view_to_world = self.world_to_view.inverse();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{MIN_ZOOM, Viewport};

    #[test]
    fn default_transform_matches_the_display_scale() {
        let vp = Viewport::new();
        assert_eq!(vp.zoom(), MIN_ZOOM);
        assert_eq!(
            vp.world_to_view_point(Point::new(0.5, 0.5)),
            Point::new(10.0, 10.0)
        );
    }

    #[test]
    fn pan_accumulates_additively_and_unbounded() {
        let mut vp = Viewport::new();
        vp.pan_by_view(Vec2::new(5.0, -3.0));
        vp.pan_by_view(Vec2::new(-1e6, 2.0));
        assert_eq!(vp.pan(), Vec2::new(5.0 - 1e6, -1.0));

        let pt = vp.world_to_view_point(Point::ORIGIN);
        assert_eq!(pt, Point::new(5.0 - 1e6, -1.0));
    }

    #[test]
    fn zoom_never_drops_below_the_floor() {
        let mut vp = Viewport::new();
        for _ in 0..20 {
            vp.zoom_by(-2.0);
        }
        assert_eq!(vp.zoom(), MIN_ZOOM);

        vp.set_zoom(-100.0);
        assert_eq!(vp.zoom(), MIN_ZOOM);
    }

    #[test]
    fn zoom_scales_about_the_view_origin() {
        let mut vp = Viewport::new();
        vp.zoom_by(2.0);
        assert_eq!(vp.zoom(), 4.0);
        assert_eq!(
            vp.world_to_view_point(Point::new(1.0, 1.0)),
            Point::new(40.0, 40.0)
        );
    }

    #[test]
    fn world_view_roundtrip() {
        let mut vp = Viewport::new();
        vp.pan_by_view(Vec2::new(17.0, -4.5));
        vp.zoom_by(6.0);

        let world = Point::new(3.25, -8.5);
        let back = vp.view_to_world_point(vp.world_to_view_point(world));
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }
}
