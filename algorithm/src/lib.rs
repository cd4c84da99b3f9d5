// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Spherical geometry engine of the track fitter.
//!
//! Models an oval running track on a sphere out of two small circle curves
//! and two great circle straights, samples its outline and fits recorded
//! positions onto it. Everything in here is synchronous and free of side
//! effects.

pub mod coordinate;
pub mod error;
pub mod lap_progress;
pub mod small_circle;
pub mod sphere;
pub mod track_on_sphere;

pub use error::{FitError, TrackError};
pub use lap_progress::{LapProgressAccumulator, LapProgressPoint, fit_path_to_track};
pub use small_circle::SmallCircleOnSphere;
pub use track_on_sphere::{DEFAULT_PRECISION_LEVEL, FittedPoint, Segment, TrackOnSphere, TrackPath};

#[cfg(test)]
mod tests;
