// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use thiserror::Error;

/// Raised once when a track is built from a description it can't represent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    #[error("Invalid track geometry: {0}")]
    InvalidTrackGeometry(String),
}

/// Reported for a single position that could not be fitted onto the track.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FitError {
    #[error("Position is not a finite coordinate")]
    NonFiniteCoordinate,

    #[error("Straight has zero length, projection onto it is undefined")]
    DegenerateStraight,

    #[error("Fitting produced a non-finite result")]
    NonFiniteResult,
}
