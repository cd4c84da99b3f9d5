// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use super::assert_close;
use crate::coordinate::LonLat;
use crate::sphere::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn bearing_points_north_and_east() {
    let origin = LonLat::new(0.0, 0.0);
    assert_close(great_circle_bearing(origin, LonLat::new(0.0, 0.01)), 0.0, 1e-12);
    assert_close(great_circle_bearing(origin, LonLat::new(0.01, 0.0)), FRAC_PI_2, 1e-12);
    assert_close(great_circle_bearing(origin, LonLat::new(-0.01, 0.0)), -FRAC_PI_2, 1e-12);
}

#[test]
fn angle_between_wraps_across_pi() {
    assert_close(angle_between(PI - 0.1, -PI + 0.1), 0.2, 1e-12);
    assert_close(angle_between(-PI + 0.1, PI - 0.1), -0.2, 1e-12);
    assert_close(angle_between(0.1, -0.1), -0.2, 1e-12);
    assert_close(angle_between(0.0, 3.0 * TAU + 0.5), 0.5, 1e-12);
}

#[test]
fn angle_between_half_turn_is_negative_pi() {
    assert_eq!(angle_between(0.0, PI), -PI);
}

#[test]
fn distance_along_equator() {
    let d = great_circle_distance(LonLat::new(0.0, 0.0), LonLat::new(FRAC_PI_2, 0.0));
    assert_close(d, FRAC_PI_2, 1e-12);
}

#[test]
fn distance_is_symmetric() {
    let a = LonLat::from_degrees(-122.2585, 37.7944);
    let b = LonLat::from_degrees(-122.2580, 37.7950);
    assert_close(great_circle_distance(a, b), great_circle_distance(b, a), 1e-15);
    assert_eq!(great_circle_distance(a, a), 0.0);
}

#[test]
fn small_circle_point_is_periodic() {
    let center = LonLat::from_degrees(-122.2585, 37.7944);
    for step in 0..16 {
        let bearing = f64::from(step) * TAU / 16.0 - PI;
        let p = point_on_small_circle(bearing, 1e-5, center);
        let q = point_on_small_circle(bearing + TAU, 1e-5, center);
        assert_close(p.lon, q.lon, 1e-12);
        assert_close(p.lat, q.lat, 1e-12);
    }
}

#[test]
fn small_circle_point_keeps_radius_and_bearing() {
    let center = LonLat::from_degrees(13.4050, 52.5200);
    let radius = 2e-5;
    for bearing in [-2.5, -1.0, 0.0, 0.7, 2.0, 3.0] {
        let p = point_on_small_circle(bearing, radius, center);
        assert_close(great_circle_distance(center, p), radius, 1e-12);
        assert_close(angle_between(bearing, great_circle_bearing(center, p)), 0.0, 1e-8);
    }
}

#[test]
fn negative_radius_walks_backwards() {
    let center = LonLat::new(0.0, 0.0);
    let p = point_on_small_circle(0.0, -0.01, center);
    assert_close(p.lat, -0.01, 1e-12);
    assert_close(p.lon, 0.0, 1e-12);
}

#[test]
fn unit_vector_round_trip() {
    let p = LonLat::from_degrees(-122.2585, 37.7944);
    let v = lon_lat_to_unit_vector(p);
    assert_close(norm(v), 1.0, 1e-15);
    let back = unit_vector_to_lon_lat(v);
    assert_close(back.lon, p.lon, 1e-14);
    assert_close(back.lat, p.lat, 1e-14);
}

#[test]
fn scaled_vector_points_at_same_coordinate() {
    let p = LonLat::from_degrees(151.2, -33.9);
    let v = lon_lat_to_unit_vector(p);
    let back = unit_vector_to_lon_lat([v[0] * 0.3, v[1] * 0.3, v[2] * 0.3]);
    assert_close(back.lon, p.lon, 1e-14);
    assert_close(back.lat, p.lat, 1e-14);
}

#[test]
fn cross_product_is_orthogonal() {
    let a = [1.0, 2.0, 3.0];
    let b = [-2.0, 0.5, 4.0];
    let c = cross_product(a, b);
    assert_close(dot_product(a, c), 0.0, 1e-12);
    assert_close(dot_product(b, c), 0.0, 1e-12);
    assert_eq!(cross_product([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
}

#[test]
fn projection_removes_normal_component() {
    assert_eq!(project_onto_plane([1.0, 1.0, 1.0], [0.0, 0.0, 5.0]), [1.0, 1.0, 0.0]);
    let projected = project_onto_plane([0.3, -0.2, 0.9], [1.0, 2.0, -1.0]);
    assert_close(dot_product(projected, [1.0, 2.0, -1.0]), 0.0, 1e-12);
}

#[test]
fn projection_onto_zero_normal_is_nan() {
    let projected = project_onto_plane([1.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    assert!(projected.iter().all(|c| c.is_nan()));
}
