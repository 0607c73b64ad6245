use super::*;
use crate::geo::GeoPoint;

fn tap(lat: f64, lng: f64) -> Event {
    Event::Tap(GeoPoint::new(lat, lng))
}

fn session_with_areas(n: usize) -> Session {
    let mut s = Session::new();
    for k in 0..n {
        let base = k as f64 * 0.1;
        s.apply(Event::BeginDrawing).unwrap();
        s.apply(tap(base, base)).unwrap();
        s.apply(tap(base, base + 0.001)).unwrap();
        s.apply(tap(base + 0.001, base + 0.001)).unwrap();
        s.apply(Event::FinishDrawing).unwrap();
        s.apply(Event::SaveArea {
            name: format!("area {k}"),
        })
        .unwrap();
    }
    s
}

#[test]
fn draw_name_save_stores_open_ring() {
    let mut s = Session::new();
    s.apply(Event::BeginDrawing).unwrap();
    s.apply(tap(0.0, 0.0)).unwrap();
    s.apply(tap(0.0, 0.001)).unwrap();
    s.apply(tap(0.001, 0.001)).unwrap();
    s.apply(Event::FinishDrawing).unwrap();
    assert!(matches!(s.mode(), Mode::Naming { .. }));

    let effect = s
        .apply(Event::SaveArea {
            name: "back lot".into(),
        })
        .unwrap();
    assert_eq!(effect, Effect::AreaSaved(0));
    assert!(matches!(s.mode(), Mode::Idle));

    let area = &s.areas()[0];
    assert_eq!(area.name, "back lot");
    // exactly the tapped points, not closed
    assert_eq!(area.ring.len(), 3);
    assert_ne!(area.ring.first(), area.ring.last());
    assert!(s.area_square_feet(0).unwrap() > 0.0);
}

#[test]
fn finish_with_too_few_points_is_rejected_visibly() {
    let mut s = Session::new();
    s.apply(Event::BeginDrawing).unwrap();
    s.apply(tap(0.0, 0.0)).unwrap();
    s.apply(tap(0.0, 0.001)).unwrap();
    let err = s.apply(Event::FinishDrawing).unwrap_err();
    assert_eq!(err, Rejection::InsufficientPoints { have: 2 });
    // message is user-facing, state stays in drawing
    assert!(err.to_string().contains("at least 3 points"));
    assert!(matches!(s.mode(), Mode::Drawing { ring } if ring.len() == 2));
}

#[test]
fn cancel_naming_discards_pending_ring() {
    let mut s = Session::new();
    s.apply(Event::BeginDrawing).unwrap();
    s.apply(tap(0.0, 0.0)).unwrap();
    s.apply(tap(0.0, 0.001)).unwrap();
    s.apply(tap(0.001, 0.001)).unwrap();
    s.apply(Event::FinishDrawing).unwrap();
    s.apply(Event::CancelNaming).unwrap();
    assert!(matches!(s.mode(), Mode::Idle));
    assert!(s.areas().is_empty());
}

#[test]
fn taps_outside_drawing_are_ignored() {
    let mut s = Session::new();
    assert_eq!(s.apply(tap(1.0, 1.0)).unwrap(), Effect::None);
    assert!(matches!(s.mode(), Mode::Idle));
}

#[test]
fn begin_while_active_is_rejected() {
    let mut s = Session::new();
    s.apply(Event::BeginDrawing).unwrap();
    assert_eq!(
        s.apply(Event::BeginDrawing).unwrap_err(),
        Rejection::AlreadyActive
    );
}

#[test]
fn empty_name_is_permitted() {
    let mut s = Session::new();
    s.apply(Event::BeginDrawing).unwrap();
    s.apply(tap(0.0, 0.0)).unwrap();
    s.apply(tap(0.0, 0.001)).unwrap();
    s.apply(tap(0.001, 0.001)).unwrap();
    s.apply(Event::FinishDrawing).unwrap();
    s.apply(Event::SaveArea { name: String::new() }).unwrap();
    assert_eq!(s.areas()[0].name, "");
}

#[test]
fn select_frames_camera_and_highlights() {
    let mut s = session_with_areas(2);
    let effect = s.apply(Event::Select(1)).unwrap();
    assert_eq!(s.selected(), Some(1));
    match effect {
        Effect::FrameCamera(region) => {
            assert!(region.span_lat >= 0.01);
            assert!(region.span_lng >= 0.01);
            assert!((region.center.latitude - 0.1005).abs() < 1e-9);
        }
        other => panic!("expected FrameCamera, got {other:?}"),
    }
    assert_eq!(
        s.apply(Event::Select(5)).unwrap_err(),
        Rejection::NoSuchArea { index: 5 }
    );
}

#[test]
fn delete_renumbers_and_clears_highlight() {
    let mut s = session_with_areas(3);
    s.apply(Event::Select(1)).unwrap();
    s.apply(Event::Delete(1)).unwrap();
    assert_eq!(s.areas().len(), 2);
    assert_eq!(s.areas()[0].name, "area 0");
    assert_eq!(s.areas()[1].name, "area 2");
    assert_eq!(s.selected(), None);
}

#[test]
fn delete_below_highlight_keeps_following_the_same_area() {
    let mut s = session_with_areas(3);
    s.apply(Event::Select(2)).unwrap();
    s.apply(Event::Delete(0)).unwrap();
    assert_eq!(s.selected(), Some(1));
    assert_eq!(s.areas()[1].name, "area 2");
}

#[test]
fn delete_works_mid_drawing() {
    let mut s = session_with_areas(2);
    s.apply(Event::BeginDrawing).unwrap();
    s.apply(tap(5.0, 5.0)).unwrap();
    s.apply(Event::Delete(0)).unwrap();
    assert_eq!(s.areas().len(), 1);
    assert!(matches!(s.mode(), Mode::Drawing { ring } if ring.len() == 1));
}

#[test]
fn rejected_events_leave_session_untouched() {
    let mut s = session_with_areas(1);
    let before = s.areas().to_vec();
    assert!(s.apply(Event::FinishDrawing).is_err());
    assert!(s.apply(Event::SaveArea { name: "x".into() }).is_err());
    assert!(s.apply(Event::Delete(9)).is_err());
    assert_eq!(s.areas(), &before[..]);
    assert!(matches!(s.mode(), Mode::Idle));
}
