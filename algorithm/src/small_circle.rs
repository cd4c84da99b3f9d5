// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::coordinate::LonLat;
use crate::sphere::point_on_small_circle;
use common::position::Position;

/// A circle on the surface of a sphere, given by its center and linear radius.
///
/// The angular radius is derived from the chord formula
/// `2 * asin(linear / sphere / 2)`, which is only defined while
/// `linear_radius_meters / sphere_radius_meters <= 2`. No bounds are checked
/// here: outside that range the angular radius and every point on the circle
/// are NaN. Whoever builds a circle validates its parameters.
///
/// The track keeps its curve circles on a unit sphere, passing central angles
/// as "meters" and `1.0` as the sphere radius.
///
/// # Example
///
/// ```rust
/// use algorithm::{coordinate::LonLat, SmallCircleOnSphere};
///
/// let circle = SmallCircleOnSphere::new(100.0, LonLat::from_degrees(13.4, 52.5), 6_371_000.0);
/// let north = circle.point_at(0.0);
/// assert!(north.lat > circle.center().lat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmallCircleOnSphere {
    center: LonLat,
    linear_radius_meters: f64,
    sphere_radius_meters: f64,
    angular_radius: f64,
}

impl SmallCircleOnSphere {
    pub fn new(linear_radius_meters: f64, center: LonLat, sphere_radius_meters: f64) -> Self {
        let linear_radius = linear_radius_meters / sphere_radius_meters;
        SmallCircleOnSphere {
            center,
            linear_radius_meters,
            sphere_radius_meters,
            angular_radius: (linear_radius / 2.0).asin() * 2.0,
        }
    }

    pub fn center(&self) -> LonLat {
        self.center
    }

    pub fn linear_radius_meters(&self) -> f64 {
        self.linear_radius_meters
    }

    pub fn sphere_radius_meters(&self) -> f64 {
        self.sphere_radius_meters
    }

    /// Central angle between the center and any point on the circle.
    pub fn angular_radius(&self) -> f64 {
        self.angular_radius
    }

    /// Point on the circle in direction `bearing` from the center, radians.
    pub fn point_at(&self, bearing: f64) -> LonLat {
        point_on_small_circle(bearing, self.angular_radius, self.center)
    }

    /// Same as [`point_at`](Self::point_at), in decimal degrees.
    pub fn point_at_degrees(&self, bearing: f64) -> Position {
        self.point_at(bearing).to_position()
    }
}
