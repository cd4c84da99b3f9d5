// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use super::assert_close;
use crate::coordinate::LonLat;
use crate::small_circle::SmallCircleOnSphere;
use crate::sphere::great_circle_distance;

#[test]
fn angular_radius_uses_chord_formula() {
    let circle = SmallCircleOnSphere::new(1.0, LonLat::new(0.0, 0.0), 1.0);
    assert_close(circle.angular_radius(), 2.0 * 0.5_f64.asin(), 1e-15);
}

#[test]
fn small_radius_is_close_to_linear_ratio() {
    let circle = SmallCircleOnSphere::new(31.8, LonLat::from_degrees(13.4, 52.5), 6_371_000.0);
    assert_close(circle.angular_radius(), 31.8 / 6_371_000.0, 1e-15);
}

#[test]
fn points_lie_on_circle() {
    let center = LonLat::from_degrees(-122.2585, 37.7944);
    let circle = SmallCircleOnSphere::new(5e-6, center, 1.0);
    for bearing in [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
        let p = circle.point_at(bearing);
        assert_close(great_circle_distance(center, p), circle.angular_radius(), 1e-13);
    }
}

#[test]
fn degree_variant_matches_radian_variant() {
    let circle = SmallCircleOnSphere::new(50.0, LonLat::from_degrees(2.35, 48.85), 6_371_000.0);
    let radians = circle.point_at(0.4);
    let degrees = circle.point_at_degrees(0.4);
    assert_close(degrees.longitude, radians.lon.to_degrees(), 1e-12);
    assert_close(degrees.latitude, radians.lat.to_degrees(), 1e-12);
}

#[test]
fn radius_beyond_sphere_domain_is_nan() {
    let circle = SmallCircleOnSphere::new(2.5, LonLat::new(0.0, 0.0), 1.0);
    assert!(circle.angular_radius().is_nan());
    assert!(!circle.point_at(0.0).is_finite());
}
