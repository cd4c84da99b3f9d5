// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use super::assert_close;
use crate::lap_progress::proportion_change;
use crate::{FitError, LapProgressAccumulator, TrackOnSphere, fit_path_to_track};
use common::position::Position;
use common::test_helper::track::get_track_description;

fn get_track() -> TrackOnSphere {
    TrackOnSphere::new(get_track_description())
        .unwrap_or_else(|e| panic!("Failed to build the track. Reason: {e}"))
}

#[test]
fn change_wraps_around_lap_start() {
    assert_close(proportion_change(0.95, 0.05), 0.1, 1e-12);
    assert_close(proportion_change(0.05, 0.95), 0.1, 1e-12);
    assert_close(proportion_change(0.2, 0.3), 0.1, 1e-12);
}

#[test]
fn backward_motion_counts_as_distance() {
    assert_close(proportion_change(0.3, 0.2), proportion_change(0.2, 0.3), 1e-12);
}

#[test]
fn accumulator_starts_at_first_proportion() {
    let mut accumulator = LapProgressAccumulator::new();
    assert_close(accumulator.push(0.4), 0.4, 1e-12);
    assert_close(accumulator.push(0.6), 0.6, 1e-12);
    assert_close(accumulator.push(0.9), 0.9, 1e-12);
    assert_close(accumulator.push(0.1), 1.1, 1e-12);
    assert_close(accumulator.lap_progress(), 1.1, 1e-12);
}

#[test]
fn accumulator_reset_starts_over() {
    let mut accumulator = LapProgressAccumulator::new();
    accumulator.push(0.1);
    accumulator.push(0.3);
    accumulator.reset();
    assert_eq!(accumulator.lap_progress(), 0.0);
    assert_close(accumulator.push(0.7), 0.7, 1e-12);
}

#[test]
fn forward_trace_increases_strictly() {
    let track = get_track();
    let trace: Vec<Position> = track.track_path_coordinates(8).collect();
    let progress: Vec<f64> = track
        .fit_path_to_track(&trace)
        .into_iter()
        .map(|point| point.unwrap().lap_progress)
        .collect();
    assert_eq!(progress.len(), trace.len());
    for pair in progress.windows(2) {
        assert!(pair[1] > pair[0], "{} is not above {}", pair[1], pair[0]);
    }
}

#[test]
fn one_lap_accumulates_one() {
    let track = get_track();
    let trace: Vec<Position> = track.track_path_coordinates(6).collect();
    let progress = fit_path_to_track(&track, &trace);
    let first = progress.first().unwrap().as_ref().unwrap().lap_progress;
    let last = progress.last().unwrap().as_ref().unwrap().lap_progress;
    assert_close(last - first, 1.0, 1e-6);
}

#[test]
fn two_laps_accumulate_two() {
    let track = get_track();
    let lap: Vec<Position> = track.track_path_coordinates(6).collect();
    let trace: Vec<Position> = lap.iter().chain(lap.iter().skip(1)).copied().collect();
    let progress = track.fit_path_to_track(&trace);
    let first = progress.first().unwrap().as_ref().unwrap().lap_progress;
    let last = progress.last().unwrap().as_ref().unwrap().lap_progress;
    assert_close(last - first, 2.0, 1e-6);
}

#[test]
fn failed_point_does_not_break_accumulation() {
    let track = get_track();
    let lap: Vec<Position> = track.track_path_coordinates(4).collect();
    let mut trace = lap.clone();
    trace.insert(5, Position::new(&f64::NAN, &f64::NAN));
    let progress = track.fit_path_to_track(&trace);
    assert_eq!(progress.len(), lap.len() + 1);
    assert_eq!(progress[5], Err(FitError::NonFiniteCoordinate));
    let first = progress.first().unwrap().as_ref().unwrap().lap_progress;
    let last = progress.last().unwrap().as_ref().unwrap().lap_progress;
    assert_close(last - first, 1.0, 1e-6);
}

#[test]
fn lap_progress_carries_fitted_position() {
    let track = get_track();
    let on_curve = track.positive_curve().point_at_degrees(-0.73);
    let progress = track.fit_path_to_track(&[on_curve]);
    let point = progress[0].as_ref().unwrap();
    assert_close(point.position.latitude, on_curve.latitude, 1e-9);
    assert_close(point.lap_progress, point.proportion, 1e-15);
}
