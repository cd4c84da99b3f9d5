// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Mean radius of the spherical earth model in meters.
pub const EARTH_AVERAGE_RADIUS_METERS: f64 = 6_371_000.0;

/// Lane width of a standard athletics track in meters.
pub const STANDARD_LANE_WIDTH_METERS: f64 = 1.22;

/// Describes an oval running track placed on a sphere.
///
/// The description is plain data: nothing is validated here. The geometry
/// engine checks it once when a track is built from it.
///
/// # Fields
///
/// - `sphere_radius_meters` – Radius of the sphere the track lies on.
/// - `straight_length_meters` – Length of one straight, not both combined.
/// - `track_length_meters` – Perimeter of the innermost (reference) lane.
/// - `lane_width_meters` – Distance between two neighbouring lanes.
/// - `lane_number` – 1-indexed lane the positions are fitted onto.
/// - `center` – Center of the oval in decimal degrees.
/// - `angle` – Bearing of the long axis at the center, radians.
///
/// # Example
///
/// ```rust
/// use common::{position::Position, track_description::TrackDescription};
///
/// let json = r#"{
///     "straight_length_meters": 100.0,
///     "track_length_meters": 400.0,
///     "center": { "latitude": 37.7944, "longitude": -122.2585 },
///     "angle": -0.73
/// }"#;
/// let desc = TrackDescription::from_json(json).unwrap();
/// assert_eq!(desc.lane_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDescription {
    #[serde(default = "default_sphere_radius")]
    pub sphere_radius_meters: f64,
    pub straight_length_meters: f64,
    pub track_length_meters: f64,
    #[serde(default = "default_lane_width")]
    pub lane_width_meters: f64,
    #[serde(default = "default_lane_number")]
    pub lane_number: u32,
    pub center: Position,
    pub angle: f64,
}

fn default_sphere_radius() -> f64 {
    EARTH_AVERAGE_RADIUS_METERS
}

fn default_lane_width() -> f64 {
    STANDARD_LANE_WIDTH_METERS
}

fn default_lane_number() -> u32 {
    1
}

impl TrackDescription {
    /// Creates a description on the earth sphere, lane 1 of a track with
    /// standard lane width.
    pub fn new(
        center: Position,
        angle: f64,
        track_length_meters: f64,
        straight_length_meters: f64,
    ) -> Self {
        TrackDescription {
            sphere_radius_meters: EARTH_AVERAGE_RADIUS_METERS,
            straight_length_meters,
            track_length_meters,
            lane_width_meters: STANDARD_LANE_WIDTH_METERS,
            lane_number: 1,
            center,
            angle,
        }
    }

    /// Deserializes a [`TrackDescription`] from JSON. Missing sphere radius,
    /// lane width and lane number fall back to their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes the description into a JSON `String`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
