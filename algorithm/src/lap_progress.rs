// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::error::FitError;
use crate::track_on_sphere::{FittedPoint, Segment, TrackOnSphere};
use common::position::Position;
use serde::Serialize;

/// A fitted position together with the laps covered so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LapProgressPoint {
    pub position: Position,
    /// Fraction of the current lap, in `[0, 1)`.
    pub proportion: f64,
    /// Laps covered since the first position, unwrapped.
    pub lap_progress: f64,
    pub segment: Segment,
}

/// Distance along the loop between two proportions, in laps.
///
/// The difference is wrapped into `[-0.5, 0.5)` by a floored modulo and its
/// magnitude taken, so crossing the start of the lap counts as a small step
/// and moving backwards counts the same as moving forwards.
pub fn proportion_change(previous: f64, current: f64) -> f64 {
    ((current - previous + 0.5).rem_euclid(1.0) - 0.5).abs()
}

/// Running sum of lap progress over a stream of proportions.
///
/// The first proportion pushed is taken as the starting progress; every
/// further one adds its [`proportion_change`] to the previous one. The sum
/// never decreases.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LapProgressAccumulator {
    last_proportion: Option<f64>,
    lap_progress: f64,
}

impl LapProgressAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next proportion and returns the accumulated lap progress.
    pub fn push(&mut self, proportion: f64) -> f64 {
        self.lap_progress = match self.last_proportion {
            Some(last) => self.lap_progress + proportion_change(last, proportion),
            None => proportion,
        };
        self.last_proportion = Some(proportion);
        self.lap_progress
    }

    /// Accumulates a fitted point into a [`LapProgressPoint`].
    pub fn push_fitted(&mut self, fitted: &FittedPoint) -> LapProgressPoint {
        LapProgressPoint {
            position: fitted.position,
            proportion: fitted.proportion,
            lap_progress: self.push(fitted.proportion),
            segment: fitted.segment,
        }
    }

    pub fn lap_progress(&self) -> f64 {
        self.lap_progress
    }

    /// Forgets all progress; the next proportion starts over.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Fits a sequence of positions onto `track` and accumulates lap progress.
///
/// Every position is fitted on its own, without smoothing. Positions that
/// can't be fitted come back as `Err` at their index and don't interrupt the
/// accumulation, which continues from the last fitted position.
///
/// # Example
///
/// ```rust
/// use algorithm::TrackOnSphere;
/// use common::test_helper::track::{get_track_description, LANEY_CENTER};
///
/// let track = TrackOnSphere::new(get_track_description()).unwrap();
/// let progress = track.fit_path_to_track(&[LANEY_CENTER, LANEY_CENTER]);
/// assert_eq!(progress.len(), 2);
/// ```
pub fn fit_path_to_track<'a, I>(
    track: &TrackOnSphere,
    positions: I,
) -> Vec<Result<LapProgressPoint, FitError>>
where
    I: IntoIterator<Item = &'a Position>,
{
    let fitted: Vec<Result<FittedPoint, FitError>> = positions
        .into_iter()
        .map(|position| track.fit_to_track(position))
        .collect();

    let mut accumulator = LapProgressAccumulator::new();
    fitted
        .into_iter()
        .map(|result| result.map(|point| accumulator.push_fitted(&point)))
        .collect()
}
