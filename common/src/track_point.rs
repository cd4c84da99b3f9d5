// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::position::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped sample of a recorded activity.
///
/// Track points come out of an activity file and go back into one after the
/// positions were fitted onto a track. Everything apart from the time is
/// optional because recording devices leave fields out.
///
/// # Fields
///
/// - `time` – UTC time of the sample.
/// - `position` – Recorded coordinate, `None` for samples without a fix.
/// - `distance` – Distance covered since the start, meters.
/// - `heart_rate` – Heart rate in beats per minute.
/// - `speed` – Speed in meters per second.
/// - `cadence` – Steps per minute.
/// - `watts` – Power in watts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub time: DateTime<Utc>,
    pub position: Option<Position>,
    pub distance: Option<f64>,
    pub heart_rate: Option<f64>,
    pub speed: Option<f64>,
    pub cadence: Option<f64>,
    pub watts: Option<f64>,
}

impl TrackPoint {
    /// Creates a track point carrying only a time and a position.
    pub fn new(time: DateTime<Utc>, position: Option<Position>) -> Self {
        TrackPoint {
            time,
            position,
            distance: None,
            heart_rate: None,
            speed: None,
            cadence: None,
            watts: None,
        }
    }
}
