// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carta Outline: outer-boundary synthesis over constituency polygons.
//!
//! Given the closed coordinate loops of a composite region's constituencies,
//! this crate derives the single closed loop that outlines their union. The
//! constituencies are assumed to tile the region: along every internal border
//! two neighbours contribute the same segment with reversed endpoints, and the
//! union has no holes.
//!
//! The synthesis runs in three steps:
//! 1. Decompose every loop into its consecutive (cyclic) edges.
//! 2. Cancel every pair of edges that are reverse-direction duplicates of each
//!    other. These are the shared internal borders; only outer-boundary edges
//!    survive.
//! 3. Chain the survivors end-to-start into one ordered cyclic sequence and
//!    return its vertex sequence.
//!
//! Matching is by **exact** endpoint equality, never by distance. The data
//! producer guarantees that shared borders coincide coordinate-for-coordinate;
//! an input where they do not (or where the constituencies leave a gap) is
//! malformed, and synthesis reports a [`BoundaryError`] instead of returning a
//! truncated or self-crossing loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use carta_outline::outer_boundary;
//!
//! // A 2x1 rectangle split down the middle into two unit squares.
//! let left = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let right = vec![
//!     Point::new(1.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(2.0, 1.0),
//!     Point::new(1.0, 1.0),
//! ];
//!
//! let outline = outer_boundary(&[left, right]).unwrap();
//! // The shared border (1,0)-(1,1) cancels; six vertices remain.
//! assert_eq!(outline.len(), 6);
//! ```
//!
//! Coordinates are assumed to be finite (no NaNs or infinities).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;

/// A directed edge between two loop vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Edge {
    start: Point,
    end: Point,
}

impl Edge {
    const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// Lookup key for exact endpoint matching.
///
/// Keys compare by the bit patterns of the coordinates, with `-0.0` normalized
/// to `0.0` so that bit equality coincides with `==` on the values the data
/// producer can actually emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct EdgeKey(u64, u64, u64, u64);

impl EdgeKey {
    fn of(edge: Edge) -> Self {
        Self(
            coord_bits(edge.start.x),
            coord_bits(edge.start.y),
            coord_bits(edge.end.x),
            coord_bits(edge.end.y),
        )
    }
}

fn coord_bits(v: f64) -> u64 {
    if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() }
}

/// Error produced when constituency loops do not synthesize into one closed
/// outer boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundaryError {
    /// No loops were supplied, or a supplied loop had fewer than three vertices.
    DegenerateInput {
        /// Number of loops supplied.
        loops: usize,
        /// Vertex count of the offending loop, if one was degenerate.
        short_loop: Option<usize>,
    },
    /// Every edge cancelled, so the constituencies enclose no area at all.
    NoSurvivingEdges,
    /// Chaining could not find an edge continuing from `at`.
    ///
    /// This is the signature of a gap between constituencies or of a shared
    /// border whose coordinates do not match exactly on both sides.
    NoNextEdge {
        /// Endpoint with no continuation.
        at: Point,
        /// Edges placed into the chain so far.
        placed: usize,
        /// Edges still waiting in the pool.
        remaining: usize,
    },
    /// All edges were consumed but the chain's last endpoint does not return
    /// to its first, so the survivors form more than one loop.
    UnclosedChain {
        /// First vertex of the chain.
        first: Point,
        /// Final endpoint reached.
        last: Point,
    },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInput { loops, short_loop } => match short_loop {
                Some(len) => write!(f, "constituency loop has only {len} vertices"),
                None => write!(f, "cannot synthesize a boundary from {loops} loops"),
            },
            Self::NoSurvivingEdges => {
                write!(f, "all edges cancelled; constituencies enclose no area")
            }
            Self::NoNextEdge {
                at,
                placed,
                remaining,
            } => write!(
                f,
                "no edge continues from ({}, {}) after {placed} placed ({remaining} unplaced); \
                 constituencies leave a gap or a shared border does not match exactly",
                at.x, at.y
            ),
            Self::UnclosedChain { first, last } => write!(
                f,
                "boundary chain runs from ({}, {}) but ends at ({}, {}); \
                 surviving edges form more than one loop",
                first.x, first.y, last.x, last.y
            ),
        }
    }
}

impl core::error::Error for BoundaryError {}

/// Synthesizes the outer boundary of the union of the given closed loops.
///
/// Each loop is an ordered vertex sequence; the closing edge from the last
/// vertex back to the first is implied. On success the returned loop is the
/// ordered vertex sequence of the union's outer boundary, with one vertex per
/// surviving edge and the closing edge again implied.
///
/// The winding direction of the result follows the first surviving edge of the
/// first loop and is otherwise unspecified.
///
/// # Errors
///
/// Returns a [`BoundaryError`] when the input is degenerate or when the
/// surviving edges do not chain into exactly one closed loop. See the crate
/// docs for the exact-equality matching precondition.
pub fn outer_boundary<L: AsRef<[Point]>>(loops: &[L]) -> Result<Vec<Point>, BoundaryError> {
    let survivors = surviving_edges(loops)?;
    chain(survivors)
}

/// Decomposes the loops into cyclic edges and cancels reversed duplicates.
///
/// Survivors keep their decomposition order, so chaining is deterministic.
fn surviving_edges<L: AsRef<[Point]>>(loops: &[L]) -> Result<Vec<Edge>, BoundaryError> {
    if loops.is_empty() {
        return Err(BoundaryError::DegenerateInput {
            loops: 0,
            short_loop: None,
        });
    }

    // Slots preserve insertion order; `live` maps a directed edge key to the
    // slots currently holding that exact edge.
    let mut slots: Vec<Option<Edge>> = Vec::new();
    let mut live: HashMap<EdgeKey, Vec<usize>> = HashMap::new();

    for loop_pts in loops {
        let pts = loop_pts.as_ref();
        if pts.len() < 3 {
            return Err(BoundaryError::DegenerateInput {
                loops: loops.len(),
                short_loop: Some(pts.len()),
            });
        }
        for i in 0..pts.len() {
            let edge = Edge {
                start: pts[i],
                end: pts[(i + 1) % pts.len()],
            };
            let rev_key = EdgeKey::of(edge.reversed());
            if let Some(bucket) = live.get_mut(&rev_key)
                && let Some(slot) = bucket.pop()
            {
                // Shared internal border: drop both halves of the pair.
                slots[slot] = None;
                continue;
            }
            let slot = slots.len();
            slots.push(Some(edge));
            live.entry(EdgeKey::of(edge)).or_default().push(slot);
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Orders the surviving edges into one closed chain and returns its vertices.
fn chain(mut pool: Vec<Edge>) -> Result<Vec<Point>, BoundaryError> {
    if pool.is_empty() {
        return Err(BoundaryError::NoSurvivingEdges);
    }

    let first = pool.remove(0);
    let mut ordered = Vec::with_capacity(pool.len() + 1);
    ordered.push(first);

    while !pool.is_empty() {
        let tail = ordered.last().map(|e| e.end).unwrap_or(first.start);
        let next = pool.iter().position(|e| e.start == tail).map(|i| (i, false));
        let next = next.or_else(|| pool.iter().position(|e| e.end == tail).map(|i| (i, true)));
        match next {
            Some((i, reverse)) => {
                let edge = pool.remove(i);
                ordered.push(if reverse { edge.reversed() } else { edge });
            }
            None => {
                return Err(BoundaryError::NoNextEdge {
                    at: tail,
                    placed: ordered.len(),
                    remaining: pool.len(),
                });
            }
        }
    }

    let last = ordered.last().map(|e| e.end).unwrap_or(first.start);
    if last != first.start {
        return Err(BoundaryError::UnclosedChain {
            first: first.start,
            last,
        });
    }

    Ok(ordered.into_iter().map(|e| e.start).collect())
}
