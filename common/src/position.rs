// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude.
///
/// The `Position` struct is the coordinate type every caller of the track
/// fitter hands in and gets back. Values are decimal degrees; latitude
/// ranges from -90.0 to 90.0 and longitude from -180.0 to 180.0.
///
/// # Fields
///
/// - `latitude` – The latitude in decimal degrees (positive for north, negative for south).
/// - `longitude` – The longitude in decimal degrees (positive for east, negative for west).
///
/// # Example
///
/// ```rust
/// use common::position::Position;
///
/// let pos = Position {
///     latitude: 37.7944,
///     longitude: -122.2585,
/// };
///
/// println!("{:?}", pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Creates a new [`Position`] with the given latitude and longitude.
    ///
    /// # Arguments
    ///
    /// * `latitude` - The latitude in decimal degrees.
    /// * `longitude` - The longitude in decimal degrees.
    ///
    /// # Example
    ///
    /// ```rust
    /// use common::position::Position;
    ///
    /// let lat = 37.7944;
    /// let lon = -122.2585;
    /// let pos = Position::new(&lat, &lon);
    /// assert_eq!(pos.longitude, lon);
    /// ```
    pub fn new(latitude: &f64, longitude: &f64) -> Self {
        Position {
            latitude: *latitude,
            longitude: *longitude,
        }
    }

    /// Creates a [`Position`] from a `[longitude, latitude]` pair, the order
    /// used by polylines and map collaborators.
    ///
    /// ```rust
    /// use common::position::Position;
    ///
    /// let pos = Position::from_lon_lat([-122.2585, 37.7944]);
    /// assert_eq!(pos.latitude, 37.7944);
    /// ```
    pub fn from_lon_lat(lon_lat: [f64; 2]) -> Self {
        Position {
            longitude: lon_lat[0],
            latitude: lon_lat[1],
        }
    }

    /// Returns the position as a `[longitude, latitude]` pair.
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Represents a GNSS (Global Navigation Satellite System) position reading.
///
/// This structure stores the latitude, longitude, velocity and the UTC
/// timestamp of a fix. The live lap progress module consumes these.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GnssPosition {
    latitude: f64,
    longitude: f64,
    velocity: f64,
    timestamp: DateTime<Utc>,
}

impl GnssPosition {
    /// Creates a new [`GnssPosition`].
    ///
    /// # Arguments
    ///
    /// * `latitude` – Latitude in decimal degrees. Positive for northern hemisphere.
    /// * `longitude` – Longitude in decimal degrees. Positive for eastern hemisphere.
    /// * `velocity` – Speed in meters per second.
    /// * `timestamp` – Time of the GNSS fix in UTC.
    ///
    /// # Example
    ///
    /// ```rust
    /// use common::position::GnssPosition;
    ///
    /// let pos = GnssPosition::new(37.7944, -122.2585, 4.5, &chrono::Utc::now());
    /// assert_eq!(pos.velocity(), 4.5);
    /// ```
    pub fn new(
        latitude: f64,
        longitude: f64,
        velocity: f64,
        timestamp: &DateTime<Utc>,
    ) -> GnssPosition {
        GnssPosition {
            latitude,
            longitude,
            velocity,
            timestamp: *timestamp,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Returns the latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the velocity in meters per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the UTC time of the fix.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Drops velocity and time, keeping only the coordinate.
    pub fn to_position(&self) -> Position {
        Position {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
