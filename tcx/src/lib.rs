// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Reading and writing of Garmin Training Center XML (TCX) activities.
//!
//! Only the per sample data is kept: time, position, distance, heart rate,
//! speed, cadence and power. Lap summaries, device information and every
//! other element are dropped while reading and not written.

mod document;

use chrono::SecondsFormat;
use common::position::Position;
use common::track_point::TrackPoint;
use document::*;
use thiserror::Error;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Error)]
pub enum TcxError {
    /// The document isn't well formed or a value has the wrong type.
    #[error("TCX document error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("An activity needs at least one track point")]
    Empty,
}

/// The samples of one activity, in recording order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TcxData {
    pub track_points: Vec<TrackPoint>,
}

/// Parses a TCX document.
///
/// Collects the track points of every lap and track of the first activity.
/// A document without any activity yields no track points.
///
/// # Arguments
///
/// * `content` - The complete TCX document.
///
/// # Errors
///
/// [`TcxError::Xml`] if the document is malformed, a `Trackpoint` has no
/// `Time` or a number can't be parsed.
pub fn parse_tcx(content: &str) -> Result<TcxData, TcxError> {
    let database: TrainingCenterDatabase = quick_xml::de::from_str(content)?;
    let track_points = database
        .activities
        .activities
        .into_iter()
        .next()
        .map(|activity| {
            activity
                .laps
                .into_iter()
                .flat_map(|lap| lap.tracks)
                .flat_map(|track| track.trackpoints)
                .map(to_track_point)
                .collect()
        })
        .unwrap_or_default();
    Ok(TcxData { track_points })
}

/// Writes `data` as a TCX document with a single running activity.
///
/// The activity `Id` and the `StartTime` of its only lap are the time of the
/// first track point. Optional values are written only when present.
///
/// # Errors
///
/// [`TcxError::Empty`] if there are no track points.
pub fn write_tcx(data: &TcxData) -> Result<String, TcxError> {
    let first = data.track_points.first().ok_or(TcxError::Empty)?;
    let start_time = first.time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    let database = TrainingCenterDatabase {
        xmlns: Some(TCX_NAMESPACE.to_string()),
        activities: Activities {
            activities: vec![Activity {
                sport: Some("Running".to_string()),
                id: Some(start_time.clone()),
                laps: vec![Lap {
                    start_time: Some(start_time),
                    tracks: vec![Track {
                        trackpoints: data.track_points.iter().map(from_track_point).collect(),
                    }],
                }],
            }],
        },
    };
    let body = quick_xml::se::to_string(&database)?;
    Ok(format!("{XML_DECLARATION}{body}"))
}

fn to_track_point(trackpoint: Trackpoint) -> TrackPoint {
    let tpx = trackpoint.extensions.and_then(|e| e.tpx).unwrap_or_default();
    TrackPoint {
        time: trackpoint.time,
        position: trackpoint
            .position
            .map(|p| Position::new(&p.latitude_degrees, &p.longitude_degrees)),
        distance: trackpoint.distance_meters,
        heart_rate: trackpoint.heart_rate_bpm.map(|hr| hr.value),
        speed: tpx.speed,
        cadence: tpx.run_cadence,
        watts: tpx.watts,
    }
}

fn from_track_point(point: &TrackPoint) -> Trackpoint {
    let tpx = Tpx {
        xmlns: Some(ACTIVITY_EXTENSION_NAMESPACE.to_string()),
        speed: point.speed,
        run_cadence: point.cadence,
        watts: point.watts,
    };
    Trackpoint {
        time: point.time,
        position: point.position.map(|p| TcxPosition {
            latitude_degrees: p.latitude,
            longitude_degrees: p.longitude,
        }),
        distance_meters: point.distance,
        heart_rate_bpm: point.heart_rate.map(|value| HeartRateBpm { value }),
        extensions: (!tpx.is_empty()).then_some(Extensions { tpx: Some(tpx) }),
    }
}

#[cfg(test)]
mod tests;
