// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carta Hit: resolves a view-space point to the region containing it.
//!
//! [`locate`] scans a candidate slice of regions in stored order. For each
//! candidate it resolves the closed boundary loop (a leaf's own loop, or the
//! synthesized outline of a composite), transforms it through the
//! [`Viewport`], and tests containment with kurbo's winding-number test. The
//! first containing region wins; overlapping candidates (which valid data
//! never produces) therefore resolve to the earliest in stored order.
//!
//! A miss is not an error: the result's `hit` is simply `None`, distinct from
//! every valid index. A candidate whose boundary fails to synthesize is
//! skipped — its error is collected so callers can report it — and never
//! prevents later siblings from being hit.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use carta_region::{Region, RegionInfo, SequenceColors};
//! use carta_view2d::Viewport;
//!
//! let mut colors = SequenceColors::default();
//! let square = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let region = Region::leaf(RegionInfo::named("A"), square, &mut colors).unwrap();
//!
//! // Model (0.5, 0.5) sits at pixel (10, 10) under the default viewport.
//! let outcome = carta_hit::locate(Point::new(10.0, 10.0), &[region], &Viewport::new());
//! assert_eq!(outcome.hit, Some(0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Shape};

use carta_region::{Region, ResolveError};
use carta_view2d::Viewport;

/// Result of a [`locate`] scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocateOutcome {
    /// Index of the first containing candidate, or `None` on a miss.
    pub hit: Option<usize>,
    /// Candidates skipped because their boundary failed to synthesize.
    pub skipped: Vec<ResolveError>,
}

/// Finds the first candidate region containing the given view-space point.
///
/// Candidates are scanned in stored order; the viewport must be the same
/// snapshot used to render the frame the point was picked on.
#[must_use]
pub fn locate(view_pt: Point, candidates: &[Region], viewport: &Viewport) -> LocateOutcome {
    let mut skipped = Vec::new();
    for (index, region) in candidates.iter().enumerate() {
        let boundary = match region.resolve_boundary() {
            Ok(boundary) => boundary,
            Err(err) => {
                skipped.push(err);
                continue;
            }
        };
        let view_loop = view_boundary(&boundary, viewport);
        if polygon_contains(&view_loop, view_pt) {
            return LocateOutcome {
                hit: Some(index),
                skipped,
            };
        }
    }
    LocateOutcome { hit: None, skipped }
}

/// Transforms a model-space loop into view space.
#[must_use]
pub fn view_boundary(boundary: &[Point], viewport: &Viewport) -> Vec<Point> {
    boundary
        .iter()
        .map(|&pt| viewport.world_to_view_point(pt))
        .collect()
}

/// Tests whether a closed polygon loop contains a point.
///
/// Uses kurbo's nonzero winding rule over the implied closed polygon. For the
/// simple, non-self-intersecting loops the region invariant guarantees, this
/// agrees with the even-odd rule.
#[must_use]
pub fn polygon_contains(loop_pts: &[Point], pt: Point) -> bool {
    if loop_pts.len() < 3 {
        return false;
    }
    polygon_path(loop_pts).contains(pt)
}

fn polygon_path(loop_pts: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(loop_pts[0]);
    for &p in &loop_pts[1..] {
        path.line_to(p);
    }
    path.close_path();
    path
}
