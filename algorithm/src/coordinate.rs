// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Conversion between the caller's degree based [`Position`] and the radian
//! based coordinate the geometry works with.

use common::position::Position;

/// A point on the sphere as longitude and latitude in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        LonLat { lon, lat }
    }

    /// Creates a coordinate from decimal degrees.
    pub fn from_degrees(lon: f64, lat: f64) -> Self {
        LonLat {
            lon: lon.to_radians(),
            lat: lat.to_radians(),
        }
    }

    /// Returns `[longitude, latitude]` in decimal degrees.
    pub fn to_degrees(&self) -> [f64; 2] {
        [self.lon.to_degrees(), self.lat.to_degrees()]
    }

    pub fn to_position(&self) -> Position {
        Position::from_lon_lat(self.to_degrees())
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<&Position> for LonLat {
    fn from(position: &Position) -> Self {
        LonLat::from_degrees(position.longitude, position.latitude)
    }
}

impl From<Position> for LonLat {
    fn from(position: Position) -> Self {
        LonLat::from(&position)
    }
}

impl From<LonLat> for Position {
    fn from(coordinate: LonLat) -> Self {
        coordinate.to_position()
    }
}
