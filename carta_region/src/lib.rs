// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carta Region: the map viewer's region tree.
//!
//! A [`Region`] is a named political or geographic entity. It is either a
//! **leaf** carrying its own closed coordinate loop, or a **composite**
//! subdivided into child regions (its constituencies) and carrying no
//! coordinates of its own. The two cases are a tagged variant,
//! [`RegionBody`], so every call site that resolves coordinates handles both
//! exhaustively.
//!
//! The tree is a strict ownership hierarchy: each child is owned by exactly
//! one parent, and the whole tree is immutable after load. Construction
//! validates the payload (a leaf loop needs at least three vertices, a
//! composite needs at least one child) so the runtime never sees a region
//! violating the leaf-XOR-composite invariant.
//!
//! Boundary resolution is a pure function of the tree:
//! [`Region::resolve_boundary`] returns a leaf's loop as a fresh copy callers
//! may mutate freely, and derives a composite's outer boundary from its
//! children on every call via [`carta_outline`]. Nothing is cached.
//!
//! Display colors default through the injected [`ColorSource`] capability
//! rather than ambient global randomness, so color assignment is
//! deterministic under a seeded source.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use carta_region::{Region, RegionInfo, SequenceColors};
//!
//! let mut colors = SequenceColors::default();
//! let square = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//!
//! let info = RegionInfo::named("Westhaven").with_prefix("Duchy of ");
//! let region = Region::leaf(info, square.clone(), &mut colors).unwrap();
//!
//! assert_eq!(region.display_name(), "Duchy of Westhaven");
//! assert_eq!(region.resolve_boundary().unwrap(), square);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod region;

pub use color::{ColorSource, SequenceColors};
#[cfg(feature = "rand")]
pub use color::RngColors;
pub use region::{MapData, Region, RegionBody, RegionError, RegionInfo, ResolveError};
