// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carta Viewer: the interactive session tying the map core together.
//!
//! This crate is the std-side glue between an embedding shell (window, event
//! loop, drawing primitive — all external) and the headless core crates. It
//! consumes discrete [`InputEvent`]s, mutates the view and navigation state,
//! and produces per-frame [`RenderPolygon`] batches for the shell to rasterize.
//!
//! The session is single-threaded and event-driven: the embedding loop feeds
//! events through [`Session::handle_event`] synchronously, then calls
//! [`Session::frame`] once per tick. Hit testing and rendering read the same
//! viewport snapshot, so a click always resolves against what was drawn.
//!
//! Regions whose boundary fails to synthesize are skipped with a warning and
//! never abort the frame; their siblings render and hit-test normally.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use carta_region::{MapData, Region, RegionInfo, SequenceColors};
//! use carta_viewer::{InputEvent, EventOutcome, Session};
//!
//! let mut colors = SequenceColors::default();
//! let square = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let country = Region::leaf(RegionInfo::named("Atria"), square, &mut colors).unwrap();
//! let mut session = Session::new(MapData::new(vec![country]));
//!
//! // Model (0.5, 0.5) sits at pixel (10, 10) under the initial view.
//! let outcome = session.handle_event(InputEvent::Click(Point::new(10.0, 10.0)));
//! match outcome {
//!     EventOutcome::Clicked(click) => assert_eq!(click.selected.as_deref(), Some("Atria")),
//!     _ => unreachable!(),
//! }
//! ```

mod event;
mod session;

pub use event::{DragPan, InputEvent};
pub use session::{BACKGROUND, ClickOutcome, EventOutcome, RenderPolygon, STROKE, Session, ZOOM_STEP};
