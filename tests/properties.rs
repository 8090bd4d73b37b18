use approx::assert_relative_eq;
use planar::prelude::*;
use planar::{logging, GeometryError};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn test_random_corners_are_normalized() {
    logging::init();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1000 {
        let r = Rectangle::new(
            rng.gen_range(-1e6..1e6),
            rng.gen_range(-1e6..1e6),
            rng.gen_range(-1e6..1e6),
            rng.gen_range(-1e6..1e6),
        );
        assert!(r.min_x() <= r.max_x());
        assert!(r.min_y() <= r.max_y());
        assert!(r.width() >= 0.0 && r.height() >= 0.0 && r.area() >= 0.0);

        let moved = r.translated(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        assert!(moved.min_x() <= moved.max_x() && moved.min_y() <= moved.max_y());

        let scaled = r.scaled_origin(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
        assert!(scaled.min_x() <= scaled.max_x() && scaled.min_y() <= scaled.max_y());
    }
}

#[test]
fn test_intersection_exists_iff_intersects() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..500 {
        let a = Point::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))
            .make_rect(rng.gen_range(0.0..4.0), rng.gen_range(0.0..4.0));
        let b = Point::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))
            .make_rect(rng.gen_range(0.0..4.0), rng.gen_range(0.0..4.0));

        assert_eq!(a.intersects(&b), a.intersection(&b).is_some());
        assert_eq!(a.intersects(&b), b.intersects(&a));
        if let Some(overlap) = a.intersection(&b) {
            assert!(a.contains(&overlap) && b.contains(&overlap));
        }
        let u = a.union(&b);
        assert!(u.contains(&a) && u.contains(&b));
    }
}

#[test]
fn test_translation_by_zero_is_identical() {
    let r = Rectangle::new(0.0, 0.0, 4.0, 4.0);
    assert!(r.translated(0.0, 0.0).identical_to(&r));

    let moved = r.translated(2.0, 2.0);
    assert!(moved.identical_to(&Rectangle::new(2.0, 2.0, 6.0, 6.0)));
    assert!(r.identical_to(&Rectangle::new(0.0, 0.0, 4.0, 4.0)));
}

#[test]
fn test_scaled_center_keeps_center() {
    let r = Rectangle::new(0.3, -1.7, 2.9, 4.1);
    let (cx, cy) = r.center();
    let (sx, sy) = r.scaled_center(1.5, 0.25).center();
    assert_relative_eq!(cx, sx, epsilon = 1e-12);
    assert_relative_eq!(cy, sy, epsilon = 1e-12);
    assert_relative_eq!(r.scaled_center(1.5, 0.25).width(), r.width() * 1.5, epsilon = 1e-12);
}

#[test]
fn test_point_corners_round_trip_into_rectangle() {
    let r = Rectangle::new(-1.0, -2.0, 3.0, 5.0);
    let rebuilt = Point::bottom_left(&r).point_to_rect(&Point::top_right(&r));
    assert!(rebuilt.identical_to(&r));
    let rebuilt = Rectangle::from_corners(Point::top_left(&r), Point::bottom_right(&r));
    assert!(rebuilt.identical_to(&r));
    assert!(r.contains_point(&Point::centre(&r)));
}

#[test]
fn test_lookup_errors_for_both_types() {
    let r = Rectangle::default();
    let p = Point::default();

    assert!(matches!(r.attribute("radius"), Err(GeometryError::NotFound { .. })));
    assert!(matches!(p.attribute("z"), Err(GeometryError::NotFound { .. })));
    for name in Rectangle::ATTRIBUTES {
        assert!(matches!(r.set_attribute(name, 1.0), Err(GeometryError::Immutable { .. })));
    }
    for name in Point::ATTRIBUTES {
        assert!(matches!(p.set_attribute(name, 1.0), Err(GeometryError::Immutable { .. })));
    }
}

#[cfg(feature = "bytemuck")]
#[test]
fn test_points_cast_to_raw_coordinates() {
    let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
    let raw: &[f64] = bytemuck::cast_slice(&points);
    assert_eq!(raw, &[1.0, 2.0, 3.0, 4.0]);

    let rects = [Rectangle::new(3.0, 4.0, 1.0, 2.0)];
    let raw: &[f64] = bytemuck::cast_slice(&rects);
    assert_eq!(raw, &[1.0, 2.0, 3.0, 4.0]);
}
