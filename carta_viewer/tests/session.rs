// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the `carta_viewer` session: clicks drill through a
//! composite country, misses reset, and the render pass always shows the
//! current level under the live viewport.

use kurbo::Point;

use carta_region::{MapData, Region, RegionInfo, SequenceColors};
use carta_viewer::{EventOutcome, InputEvent, Session};

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// A single country "Rhone" made of constituencies A (left) and B (right),
/// forming a 2x1 rectangle split down the middle.
fn split_country_session() -> Session {
    let mut colors = SequenceColors::default();
    let a = Region::leaf(
        RegionInfo::named("A"),
        pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
        &mut colors,
    )
    .unwrap();
    let b = Region::leaf(
        RegionInfo::named("B"),
        pts(&[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]),
        &mut colors,
    )
    .unwrap();
    let country = Region::composite(
        RegionInfo::named("Rhone").with_prefix("Kingdom of "),
        vec![a, b],
        &mut colors,
    )
    .unwrap();
    Session::new(MapData::new(vec![country]))
}

fn click(session: &mut Session, x: f64, y: f64) -> Option<String> {
    match session.handle_event(InputEvent::Click(Point::new(x, y))) {
        EventOutcome::Clicked(outcome) => outcome.selected,
        other => panic!("expected a click outcome, got {other:?}"),
    }
}

#[test]
fn clicks_drill_into_the_country_then_its_constituency() {
    let mut session = split_country_session();

    // Initial view: zoom 2, scale 10. Model (0.5, 0.5), inside A and hence
    // inside the synthesized country outline, lands at pixel (10, 10).
    let name = click(&mut session, 10.0, 10.0);
    assert_eq!(name.as_deref(), Some("Kingdom of Rhone"));
    assert_eq!(session.navigator().depth(), 1);

    // Now the candidates are [A, B]; the same pixel is inside A.
    let name = click(&mut session, 10.0, 10.0);
    assert_eq!(name.as_deref(), Some("A"));
    assert_eq!(session.navigator().depth(), 2);

    // A is a leaf, so its candidate level is empty; clicking again misses
    // and resets to the top-level view.
    let name = click(&mut session, 10.0, 10.0);
    assert!(name.is_none());
    assert!(session.navigator().is_root());
}

#[test]
fn click_outside_every_candidate_resets() {
    let mut session = split_country_session();

    click(&mut session, 10.0, 10.0);
    assert_eq!(session.navigator().depth(), 1);

    // Far outside the 2x1 rectangle (which spans pixels 0..40 x 0..20).
    let name = click(&mut session, 300.0, 300.0);
    assert!(name.is_none());
    assert!(session.navigator().is_root());
}

#[test]
fn top_level_frame_draws_the_synthesized_country_outline() {
    let session = split_country_session();
    let batch = session.frame();

    assert_eq!(batch.len(), 1, "root level draws one country");
    // Six surviving edges: the shared border between A and B cancelled.
    assert_eq!(batch[0].boundary.len(), 6);

    // All vertices are scaled by 20 (zoom 2 * scale 10) with no pan; the
    // rectangle's far corner is model (2, 1) -> pixel (40, 20).
    assert!(batch[0]
        .boundary
        .iter()
        .any(|&p| p == Point::new(40.0, 20.0)));
}

#[test]
fn drilled_frame_draws_the_constituencies() {
    let mut session = split_country_session();
    click(&mut session, 10.0, 10.0);

    let batch = session.frame();
    assert_eq!(batch.len(), 2, "country level draws both constituencies");
    assert_eq!(batch[0].boundary.len(), 4);
    assert_eq!(batch[1].boundary.len(), 4);
}

#[test]
fn hit_testing_follows_the_panned_view() {
    let mut session = split_country_session();

    session.handle_event(InputEvent::PanStart(Point::new(0.0, 0.0)));
    session.handle_event(InputEvent::PanMove(Point::new(100.0, 100.0)));
    session.handle_event(InputEvent::PanEnd);

    // The old click position no longer hits; the panned one does.
    assert!(click(&mut session, 10.0, 10.0).is_none());
    assert_eq!(
        click(&mut session, 110.0, 110.0).as_deref(),
        Some("Kingdom of Rhone")
    );
}

#[test]
fn broken_composite_never_hides_its_siblings() {
    let mut colors = SequenceColors::default();
    // Constituencies with a gap: synthesis for "Gapland" always fails.
    let p = Region::leaf(
        RegionInfo::named("P"),
        pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
        &mut colors,
    )
    .unwrap();
    let q = Region::leaf(
        RegionInfo::named("Q"),
        pts(&[(5.0, 0.0), (6.0, 0.0), (6.0, 1.0), (5.0, 1.0)]),
        &mut colors,
    )
    .unwrap();
    let gapland =
        Region::composite(RegionInfo::named("Gapland"), vec![p, q], &mut colors).unwrap();
    let solid = Region::leaf(
        RegionInfo::named("Solid"),
        pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
        &mut colors,
    )
    .unwrap();
    let mut session = Session::new(MapData::new(vec![gapland, solid]));

    // Rendering skips Gapland but still draws Solid.
    assert_eq!(session.frame().len(), 1);

    // Hit testing skips Gapland and resolves Solid behind it.
    let name = click(&mut session, 10.0, 10.0);
    assert_eq!(name.as_deref(), Some("Solid"));
}
