// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Trigonometry on the unit sphere.
//!
//! Bearings are measured clockwise from north, distances are central angles
//! in radians. Multiply a distance by the sphere radius to get meters.

use crate::coordinate::LonLat;
use std::f64::consts::{PI, TAU};

/// Cartesian vector, `[x, y, z]`.
pub type Vec3 = [f64; 3];

/// Returns the point at `angular_radius` from `center` in direction `bearing`.
///
/// Evaluated for every bearing this traces the small circle of that angular
/// radius around `center`. The result is periodic in `bearing` with period
/// `2π`. A negative radius walks in the opposite direction.
///
/// # Arguments
///
/// * `bearing` - Direction at `center`, radians clockwise from north.
/// * `angular_radius` - Central angle between `center` and the result.
/// * `center` - Starting point.
pub fn point_on_small_circle(bearing: f64, angular_radius: f64, center: LonLat) -> LonLat {
    let (sin_lat_c, cos_lat_c) = center.lat.sin_cos();
    let (sin_r, cos_r) = angular_radius.sin_cos();
    let lat = (sin_lat_c * cos_r + cos_lat_c * sin_r * bearing.cos()).asin();
    let lon = center.lon
        + (bearing.sin() * sin_r * cos_lat_c).atan2(cos_r - sin_lat_c * lat.sin());
    LonLat { lon, lat }
}

/// Initial bearing of the great circle from `from` to `to`, in `(-π, π]`.
pub fn great_circle_bearing(from: LonLat, to: LonLat) -> f64 {
    let d_lon = to.lon - from.lon;
    let y = d_lon.sin() * to.lat.cos();
    let x = from.lat.cos() * to.lat.sin() - from.lat.sin() * to.lat.cos() * d_lon.cos();
    y.atan2(x)
}

/// Signed shortest rotation from `a` to `b`, normalized to `[-π, π)`.
///
/// Uses a floored modulo, so `angle_between(a, b)` is continuous when either
/// angle crosses `±π`.
pub fn angle_between(a: f64, b: f64) -> f64 {
    (b - a + PI).rem_euclid(TAU) - PI
}

/// Haversine distance between two points, radians.
pub fn great_circle_distance(p1: LonLat, p2: LonLat) -> f64 {
    let half_d_lat = (p2.lat - p1.lat) / 2.0;
    let half_d_lon = (p2.lon - p1.lon) / 2.0;
    let h = half_d_lat.sin().powi(2) + p1.lat.cos() * p2.lat.cos() * half_d_lon.sin().powi(2);
    2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt())
}

/// Unit vector pointing at `p`.
#[inline]
pub fn lon_lat_to_unit_vector(p: LonLat) -> Vec3 {
    let (sin_lat, cos_lat) = p.lat.sin_cos();
    let (sin_lon, cos_lon) = p.lon.sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}

/// Longitude and latitude of the direction `v` points at. The length of `v`
/// doesn't matter.
#[inline]
pub fn unit_vector_to_lon_lat(v: Vec3) -> LonLat {
    LonLat {
        lon: v[1].atan2(v[0]),
        lat: v[2].atan2(v[0].hypot(v[1])),
    }
}

#[inline]
pub fn dot_product(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross_product(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Euclidean norm of a vector.
#[inline]
pub fn norm(a: Vec3) -> f64 {
    dot_product(a, a).sqrt()
}

/// Removes the component along `plane_normal` from `point`.
///
/// The normal is normalized first, it may have any length. The result lies in
/// the plane through the origin perpendicular to the normal; it is not
/// rescaled onto the unit sphere. A zero normal yields NaN components.
pub fn project_onto_plane(point: Vec3, plane_normal: Vec3) -> Vec3 {
    let length = norm(plane_normal);
    let n = [
        plane_normal[0] / length,
        plane_normal[1] / length,
        plane_normal[2] / length,
    ];
    let d = dot_product(point, n);
    [point[0] - d * n[0], point[1] - d * n[1], point[2] - d * n[2]]
}
