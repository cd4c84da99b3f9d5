// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use algorithm::{LapProgressPoint, TrackOnSphere, fit_path_to_track};
use chrono::{DateTime, Utc};
use common::position::Position;
use serde::Serialize;
use tcx::TcxData;
use tracing::{debug, warn};

/// One row of the sampled track path.
#[derive(Debug, Serialize)]
pub struct PathRecord {
    pub longitude: f64,
    pub latitude: f64,
}

/// One row of a fitted activity.
#[derive(Debug, Serialize)]
pub struct FittedRecord {
    pub time: DateTime<Utc>,
    pub longitude: f64,
    pub latitude: f64,
    pub proportion: f64,
    pub lap_progress: f64,
}

/// Fits every positioned track point of `data` onto `track`.
///
/// The result has one entry per track point. Points without a position or
/// whose fit failed are `None`; lap progress runs on over them.
pub fn fit_activity(track: &TrackOnSphere, data: &TcxData) -> Vec<Option<LapProgressPoint>> {
    let positions: Vec<Position> = data
        .track_points
        .iter()
        .filter_map(|point| point.position)
        .collect();
    let mut fitted = fit_path_to_track(track, &positions).into_iter();

    data.track_points
        .iter()
        .map(|point| {
            if point.position.is_none() {
                debug!("Track point at {} has no position", point.time);
                return None;
            }
            match fitted.next()? {
                Ok(progress) => Some(progress),
                Err(e) => {
                    warn!("Track point at {} not fitted. Reason: {e}", point.time);
                    None
                }
            }
        })
        .collect()
}

/// Replaces the position of every fitted point with its fitted coordinate and
/// its distance with the lap progress in meters.
pub fn fitted_tcx(data: &TcxData, fits: &[Option<LapProgressPoint>], lap_length: f64) -> TcxData {
    let track_points = data
        .track_points
        .iter()
        .zip(fits)
        .map(|(point, fit)| {
            let mut point = point.clone();
            if let Some(fit) = fit {
                point.position = Some(fit.position);
                point.distance = Some(fit.lap_progress * lap_length);
            }
            point
        })
        .collect();
    TcxData { track_points }
}

/// Rows for the fitted points, points without a fit are left out.
pub fn fitted_records(data: &TcxData, fits: &[Option<LapProgressPoint>]) -> Vec<FittedRecord> {
    data.track_points
        .iter()
        .zip(fits)
        .filter_map(|(point, fit)| {
            fit.map(|fit| FittedRecord {
                time: point.time,
                longitude: fit.position.longitude,
                latitude: fit.position.latitude,
                proportion: fit.proportion,
                lap_progress: fit.lap_progress,
            })
        })
        .collect()
}

/// Rows of the closed track polyline at `precision_level`.
pub fn path_records(track: &TrackOnSphere, precision_level: u32) -> Vec<PathRecord> {
    track
        .track_path_coordinates(precision_level)
        .map(|p| PathRecord {
            longitude: p.longitude,
            latitude: p.latitude,
        })
        .collect()
}

/// Writes `records` as CSV with a header row.
pub fn write_csv<W, R>(writer: W, records: &[R]) -> Result<(), csv::Error>
where
    W: std::io::Write,
    R: Serialize,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
