// Host-side tests for the drag/wheel orbit mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

mod orbit {
    include!("../src/events/orbit.rs");
}

use orbit::*;
use std::f32::consts::TAU;
use tree_core::OrbitCamera;

#[test]
fn only_the_dragging_pointer_moves_the_view() {
    let mut drag = DragTracker::default();
    assert_eq!(drag.move_to(1, 10.0, 10.0), None);

    drag.begin(1, 100.0, 50.0);
    assert!(drag.is_active());
    assert_eq!(drag.move_to(2, 400.0, 400.0), None);
    assert_eq!(drag.move_to(1, 110.0, 45.0), Some([10.0, -5.0]));
    assert_eq!(drag.move_to(1, 110.0, 45.0), Some([0.0, 0.0]));

    drag.end(2);
    assert!(drag.is_active());
    drag.end(1);
    assert!(!drag.is_active());
    assert_eq!(drag.move_to(1, 200.0, 45.0), None);
}

#[test]
fn full_height_drag_is_one_turn() {
    let (d_azimuth, d_elevation) = orbit_delta([800.0, 0.0], 800.0);
    assert!((d_azimuth + TAU).abs() < 1e-5);
    assert_eq!(d_elevation, 0.0);

    let (_, up) = orbit_delta([0.0, 100.0], 800.0);
    assert!(up > 0.0);
    // zero-height canvas does not divide by zero
    let (a, e) = orbit_delta([1.0, 1.0], 0.0);
    assert!(a.is_finite() && e.is_finite());
}

#[test]
fn wheel_zooms_out_and_in_within_limits() {
    assert!(zoom_factor(120.0) > 1.0);
    assert!(zoom_factor(-3.0) < 1.0);
    assert_eq!(zoom_factor(0.0), 1.0);

    let mut cam = OrbitCamera::new(35.0);
    cam.zoom_by(zoom_factor(-100.0));
    assert!(cam.distance() < 35.0);
    for _ in 0..200 {
        cam.zoom_by(zoom_factor(100.0));
    }
    assert_eq!(cam.distance(), 60.0);
}

#[test]
fn dragging_down_raises_the_camera() {
    let mut cam = OrbitCamera::new(35.0);
    let (d_azimuth, d_elevation) = orbit_delta([0.0, 80.0], 800.0);
    cam.orbit_by(d_azimuth, d_elevation);
    assert!(cam.eye().y > 0.0);
    assert!((cam.eye().length() - 35.0).abs() < 1e-3);
}
