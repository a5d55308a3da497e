// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete input events and the pan-drag tracker.

use kurbo::{Point, Vec2};

/// A discrete input event from the embedding shell, in view/device pixels.
///
/// The shell owns raw windowing events; it translates the gestures the viewer
/// cares about (middle-drag panning, wheel zoom, left click) into these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pan drag began at this position.
    PanStart(Point),
    /// Pointer moved to this position while a pan drag is active.
    PanMove(Point),
    /// Pan drag ended.
    PanEnd,
    /// Signed wheel amount; positive zooms in.
    ZoomDelta(f64),
    /// Primary click at this position.
    Click(Point),
}

/// Tracks an active pan drag and yields per-move deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragPan {
    last: Option<Point>,
}

impl DragPan {
    /// Begins a drag at the given position.
    pub fn start(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Records a move, returning the delta since the previous position.
    ///
    /// Returns `None` when no drag is active (stray moves are ignored).
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragPan;

    #[test]
    fn deltas_are_relative_to_the_previous_move() {
        let mut drag = DragPan::default();
        drag.start(Point::new(10.0, 20.0));

        assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(drag.update(Point::new(12.0, 25.0)), Some(Vec2::new(-3.0, 0.0)));
    }

    #[test]
    fn moves_without_an_active_drag_are_ignored() {
        let mut drag = DragPan::default();
        assert_eq!(drag.update(Point::new(5.0, 5.0)), None);

        drag.start(Point::new(0.0, 0.0));
        drag.end();
        assert!(!drag.is_panning());
        assert_eq!(drag.update(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn restarting_a_drag_rebases_the_deltas() {
        let mut drag = DragPan::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(10.0, 10.0));

        drag.start(Point::new(100.0, 100.0));
        assert_eq!(
            drag.update(Point::new(103.0, 99.0)),
            Some(Vec2::new(3.0, -1.0))
        );
    }
}
