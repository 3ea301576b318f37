// Host-side tests for the blob point-field simulation.

use folio_core::constants::*;
use folio_core::{view_point, BlobConfig, BlobField, PointerField};
use glam::DVec2;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn make_field() -> BlobField {
    BlobField::new(BlobConfig::default())
}

#[test]
fn new_field_rests_on_the_anchor_circle() {
    let field = make_field();
    assert_eq!(field.points().len(), BLOB_POINT_COUNT);
    let step = std::f64::consts::TAU / BLOB_POINT_COUNT as f64;
    for (i, pt) in field.points().iter().enumerate() {
        let r = (pt.pos - BLOB_CENTER).length();
        assert!((r - BLOB_RADIUS).abs() < 1e-9, "point {i} off the circle: r = {r}");
        assert_eq!(pt.vel, DVec2::ZERO);
        assert_eq!(pt.pos, pt.origin);
        assert!((pt.angle - i as f64 * step).abs() < 1e-12, "bad ring angle at {i}");
    }
}

#[test]
fn points_stay_near_their_origins_without_a_pointer() {
    let mut field = make_field();
    let mut max_dev: f64 = 0.0;
    for frame in 0..10_000 {
        field.tick(frame as f64 * FRAME_MS, None);
        for pt in field.points() {
            let dev = (pt.pos - pt.origin).length();
            assert!(dev.is_finite());
            max_dev = max_dev.max(dev);
        }
    }
    // Drift offsets the rest position by at most the amplitude per axis and
    // the spring is well below resonance, so 4x amplitude is generous.
    let bound = 4.0 * DRIFT_AMPLITUDE;
    assert!(max_dev < bound, "max deviation {max_dev} exceeded {bound}");
    assert!(max_dev > 1.0, "blob should visibly breathe, got {max_dev}");
}

#[test]
fn velocities_settle_into_the_drift_rhythm() {
    let mut field = make_field();
    for frame in 0..2_000 {
        field.tick(frame as f64 * FRAME_MS, None);
    }
    for pt in field.points() {
        let speed = pt.vel.length();
        assert!(speed < 5.0, "velocity still hot after warmup: {speed}");
    }
}

#[test]
fn identical_tick_sequences_are_deterministic() {
    let mut a = make_field();
    let mut b = make_field();
    for frame in 0..500 {
        let now_ms = frame as f64 * FRAME_MS;
        let pointer = (frame % 3 == 0).then_some(DVec2::new(400.0, 450.0));
        a.tick(now_ms, pointer);
        b.tick(now_ms, pointer);
    }
    for (pa, pb) in a.points().iter().zip(b.points()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
    }
}

#[test]
fn pointer_pushes_the_nearest_point_away() {
    let mut field = make_field();
    // pointer just above ring point 0, so repulsion lands on the y axis
    // where the drift term is zero at t = 0
    let pointer = field.points()[0].pos - DVec2::new(0.0, 10.0);
    field.tick(0.0, Some(pointer));
    let pt = &field.points()[0];
    assert!(pt.vel.y > 0.0, "velocity should point away from the pointer");
}

#[test]
fn repulsion_weakens_with_distance() {
    let kick = |offset: f64| {
        let mut field = make_field();
        let pointer = field.points()[0].pos - DVec2::new(0.0, offset);
        field.tick(0.0, Some(pointer));
        field.points()[0].vel.y
    };
    let near = kick(10.0);
    let far = kick(200.0);
    assert!(
        near > far && far > 0.0,
        "kick should fade with distance: near {near}, far {far}"
    );
}

#[test]
fn pointer_outside_influence_radius_changes_nothing() {
    let mut with = make_field();
    let mut without = make_field();
    let far = BLOB_CENTER + DVec2::new(BLOB_RADIUS + POINTER_INFLUENCE_RADIUS + 200.0, 0.0);
    for frame in 0..100 {
        let now_ms = frame as f64 * FRAME_MS;
        with.tick(now_ms, Some(far));
        without.tick(now_ms, None);
    }
    for (pa, pb) in with.points().iter().zip(without.points()) {
        assert_eq!(pa.pos, pb.pos);
    }
}

#[test]
fn zero_point_field_is_inert() {
    let mut field = BlobField::new(BlobConfig {
        point_count: 0,
        ..BlobConfig::default()
    });
    field.tick(16.0, Some(DVec2::ZERO));
    assert!(field.points().is_empty());
}

#[test]
fn pointer_goes_idle_after_the_timeout() {
    let mut pointer = PointerField::default();
    assert!(!pointer.active(0.0), "fresh pointer must be idle");
    assert_eq!(pointer.sample(0.0), None);

    pointer.record(DVec2::new(100.0, 200.0), 5_000.0);
    assert!(pointer.active(5_000.0));
    assert!(pointer.active(5_000.0 + POINTER_IDLE_MS - 1.0));
    assert!(!pointer.active(5_000.0 + POINTER_IDLE_MS));
    assert_eq!(pointer.sample(5_500.0), Some(DVec2::new(100.0, 200.0)));
}

#[test]
fn each_move_rearms_the_idle_deadline() {
    let mut pointer = PointerField::default();
    pointer.record(DVec2::ZERO, 0.0);
    pointer.record(DVec2::new(5.0, 5.0), 900.0);
    assert!(pointer.active(1_500.0), "second move must extend the deadline");
    assert!(!pointer.active(900.0 + POINTER_IDLE_MS));
}

#[test]
fn view_point_rescales_css_pixels_to_view_units() {
    let extent = DVec2::new(1000.0, 1000.0);
    let p = view_point(DVec2::new(250.0, 100.0), DVec2::new(500.0, 500.0), extent);
    assert_eq!(p, DVec2::new(500.0, 200.0));
    // non-square surfaces scale each axis independently
    let q = view_point(DVec2::new(400.0, 150.0), DVec2::new(800.0, 300.0), extent);
    assert_eq!(q, DVec2::new(500.0, 500.0));
}

#[test]
fn view_point_degenerate_surface_maps_to_centre() {
    assert_eq!(
        view_point(DVec2::new(10.0, 10.0), DVec2::ZERO, VIEW_EXTENT),
        VIEW_EXTENT * 0.5
    );
    assert_eq!(
        view_point(DVec2::ZERO, DVec2::new(100.0, 0.0), VIEW_EXTENT),
        VIEW_EXTENT * 0.5
    );
}
