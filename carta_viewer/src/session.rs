// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive session: event handling and the per-frame render pass.

use kurbo::Point;
use peniko::Color;

use carta_hit::LocateOutcome;
use carta_nav::{ClickTransition, Navigator};
use carta_region::MapData;
use carta_view2d::Viewport;

use crate::event::{DragPan, InputEvent};

/// Clear color for the map canvas, for the embedding shell.
pub const BACKGROUND: Color = Color::from_rgb8(31, 128, 128);

/// Outline color for region boundaries.
pub const STROKE: Color = Color::BLACK;

/// Zoom change per wheel notch.
pub const ZOOM_STEP: f64 = 2.0;

/// What handling an event did.
#[derive(Clone, Debug, PartialEq)]
pub enum EventOutcome {
    /// Nothing observable changed (for example, a stray pan-move).
    None,
    /// The viewport changed; the next frame will draw differently.
    ViewChanged,
    /// A click resolved against the current level.
    Clicked(ClickOutcome),
}

/// Resolution of a click.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickOutcome {
    /// Composed display name of the newly selected region, or `None` when the
    /// click missed and the view reset to the top level.
    pub selected: Option<String>,
}

/// One filled, outlined polygon for the drawing primitive.
#[derive(Clone, Debug)]
pub struct RenderPolygon {
    /// Closed boundary loop in view/device pixels (closing edge implied).
    pub boundary: Vec<Point>,
    /// Fill color (the region's display color).
    pub fill: Color,
    /// Outline color.
    pub stroke: Color,
}

/// Interactive viewer session over a loaded map.
///
/// Owns the region tree (read-only after construction), the pan/zoom
/// [`Viewport`], and the drill-down [`Navigator`]. All mutation happens on the
/// embedding event loop's thread; nothing here blocks or suspends.
#[derive(Debug)]
pub struct Session {
    map: MapData,
    viewport: Viewport,
    nav: Navigator,
    drag: DragPan,
}

impl Session {
    /// Creates a session at the top-level view with the default viewport.
    #[must_use]
    pub fn new(map: MapData) -> Self {
        Self {
            map,
            viewport: Viewport::new(),
            nav: Navigator::new(),
            drag: DragPan::default(),
        }
    }

    /// Returns the loaded map.
    #[must_use]
    pub fn map(&self) -> &MapData {
        &self.map
    }

    /// Returns the current viewport snapshot.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the navigation state.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// Processes one input event synchronously.
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::PanStart(pos) => {
                self.drag.start(pos);
                EventOutcome::None
            }
            InputEvent::PanMove(pos) => match self.drag.update(pos) {
                Some(delta) => {
                    self.viewport.pan_by_view(delta);
                    EventOutcome::ViewChanged
                }
                None => EventOutcome::None,
            },
            InputEvent::PanEnd => {
                self.drag.end();
                EventOutcome::None
            }
            InputEvent::ZoomDelta(amount) => {
                self.viewport.zoom_by(amount * ZOOM_STEP);
                EventOutcome::ViewChanged
            }
            InputEvent::Click(pos) => EventOutcome::Clicked(self.click(pos)),
        }
    }

    /// Produces the render batch for the current frame: the candidate level's
    /// regions as filled, outlined polygons in view space.
    ///
    /// Regions whose boundary fails to synthesize are skipped with a warning;
    /// their siblings still render.
    #[must_use]
    pub fn frame(&self) -> Vec<RenderPolygon> {
        let level = self.nav.candidates(&self.map);
        let mut batch = Vec::with_capacity(level.len());
        for region in level {
            match region.resolve_boundary() {
                Ok(boundary) => batch.push(RenderPolygon {
                    boundary: carta_hit::view_boundary(&boundary, &self.viewport),
                    fill: region.color(),
                    stroke: STROKE,
                }),
                Err(err) => {
                    tracing::warn!(region = %err.region, %err, "skipping unrenderable region");
                }
            }
        }
        batch
    }

    fn click(&mut self, pos: Point) -> ClickOutcome {
        let level = self.nav.candidates(&self.map);
        let LocateOutcome { hit, skipped } = carta_hit::locate(pos, level, &self.viewport);
        for err in &skipped {
            tracing::warn!(region = %err.region, %err, "skipping region during hit test");
        }
        match self.nav.click(hit) {
            ClickTransition::Descended(_) => {
                let selected = self.nav.selected(&self.map).map(|r| r.display_name());
                if let Some(name) = &selected {
                    tracing::info!(name = %name, "region selected");
                }
                ClickOutcome { selected }
            }
            ClickTransition::Reset => {
                tracing::info!("selection cleared");
                ClickOutcome { selected: None }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use carta_region::{MapData, Region, RegionInfo, SequenceColors};

    use super::{EventOutcome, InputEvent, Session};

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn single_square_session() -> Session {
        let mut colors = SequenceColors::default();
        let country = Region::leaf(
            RegionInfo::named("Atria"),
            pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
            &mut colors,
        )
        .unwrap();
        Session::new(MapData::new(vec![country]))
    }

    #[test]
    fn pan_drag_moves_the_viewport() {
        let mut session = single_square_session();

        assert_eq!(
            session.handle_event(InputEvent::PanStart(Point::new(100.0, 100.0))),
            EventOutcome::None
        );
        assert_eq!(
            session.handle_event(InputEvent::PanMove(Point::new(110.0, 95.0))),
            EventOutcome::ViewChanged
        );
        assert_eq!(session.viewport().pan(), kurbo::Vec2::new(10.0, -5.0));

        session.handle_event(InputEvent::PanEnd);
        assert_eq!(
            session.handle_event(InputEvent::PanMove(Point::new(200.0, 200.0))),
            EventOutcome::None,
            "moves after pan-end must not pan"
        );
    }

    #[test]
    fn wheel_zoom_steps_and_clamps() {
        let mut session = single_square_session();

        session.handle_event(InputEvent::ZoomDelta(1.0));
        assert_eq!(session.viewport().zoom(), 4.0);

        for _ in 0..10 {
            session.handle_event(InputEvent::ZoomDelta(-1.0));
        }
        assert_eq!(session.viewport().zoom(), carta_view2d::MIN_ZOOM);
    }

    #[test]
    fn frame_renders_the_current_level() {
        let session = single_square_session();
        let batch = session.frame();
        assert_eq!(batch.len(), 1);
        // Initial view: zoom 2, scale 10, no pan.
        assert_eq!(batch[0].boundary[2], Point::new(20.0, 20.0));
        assert_eq!(batch[0].stroke.to_rgba8(), super::STROKE.to_rgba8());
    }

    #[test]
    fn click_hit_reports_the_display_name() {
        let mut session = single_square_session();
        let outcome = session.handle_event(InputEvent::Click(Point::new(10.0, 10.0)));
        let EventOutcome::Clicked(click) = outcome else {
            panic!("click event must produce a click outcome");
        };
        assert_eq!(click.selected.as_deref(), Some("Atria"));
        assert_eq!(session.navigator().depth(), 1);
    }

    #[test]
    fn click_miss_resets_to_top_level() {
        let mut session = single_square_session();
        session.handle_event(InputEvent::Click(Point::new(10.0, 10.0)));

        let outcome = session.handle_event(InputEvent::Click(Point::new(-100.0, -100.0)));
        let EventOutcome::Clicked(click) = outcome else {
            panic!("click event must produce a click outcome");
        };
        assert!(click.selected.is_none());
        assert!(session.navigator().is_root());
    }
}
