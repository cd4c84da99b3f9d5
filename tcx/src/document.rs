// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Serde mapping of the Training Center XML elements this crate reads and
//! writes. Elements not listed here are skipped while reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub(crate) const TCX_NAMESPACE: &str =
    "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
pub(crate) const ACTIVITY_EXTENSION_NAMESPACE: &str =
    "http://www.garmin.com/xmlschemas/ActivityExtension/v2";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "TrainingCenterDatabase")]
pub(crate) struct TrainingCenterDatabase {
    #[serde(rename = "@xmlns", default, skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(rename = "Activities", default)]
    pub activities: Activities,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Activities {
    #[serde(rename = "Activity", default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Activity {
    #[serde(rename = "@Sport", default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Lap", default)]
    pub laps: Vec<Lap>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Lap {
    #[serde(rename = "@StartTime", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "Track", default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Track {
    #[serde(rename = "Trackpoint", default)]
    pub trackpoints: Vec<Trackpoint>,
}

/// Children are declared in schema order, the writer emits them that way.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Trackpoint {
    #[serde(rename = "Time")]
    pub time: DateTime<Utc>,
    #[serde(rename = "Position", default, skip_serializing_if = "Option::is_none")]
    pub position: Option<TcxPosition>,
    #[serde(rename = "DistanceMeters", default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(rename = "HeartRateBpm", default, skip_serializing_if = "Option::is_none")]
    pub heart_rate_bpm: Option<HeartRateBpm>,
    #[serde(rename = "Extensions", default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TcxPosition {
    #[serde(rename = "LatitudeDegrees")]
    pub latitude_degrees: f64,
    #[serde(rename = "LongitudeDegrees")]
    pub longitude_degrees: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HeartRateBpm {
    #[serde(rename = "Value")]
    pub value: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Extensions {
    #[serde(rename = "TPX", default, skip_serializing_if = "Option::is_none")]
    pub tpx: Option<Tpx>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Tpx {
    #[serde(rename = "@xmlns", default, skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(rename = "Speed", default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(rename = "RunCadence", default, skip_serializing_if = "Option::is_none")]
    pub run_cadence: Option<f64>,
    #[serde(rename = "Watts", default, skip_serializing_if = "Option::is_none")]
    pub watts: Option<f64>,
}

impl Tpx {
    pub fn is_empty(&self) -> bool {
        self.speed.is_none() && self.run_cadence.is_none() && self.watts.is_none()
    }
}
