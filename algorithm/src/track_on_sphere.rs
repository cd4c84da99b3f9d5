// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::coordinate::LonLat;
use crate::error::{FitError, TrackError};
use crate::lap_progress::{LapProgressPoint, fit_path_to_track};
use crate::small_circle::SmallCircleOnSphere;
use crate::sphere::{
    Vec3, angle_between, cross_product, great_circle_bearing, great_circle_distance,
    lon_lat_to_unit_vector, point_on_small_circle, project_onto_plane, unit_vector_to_lon_lat,
};
use common::position::Position;
use common::track_description::TrackDescription;
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI};

/// Precision level used when no other is requested, 128 samples per curve.
pub const DEFAULT_PRECISION_LEVEL: u32 = 8;

const MAX_PRECISION_LEVEL: u32 = 24;

/// The part of the track a position was fitted onto.
///
/// Listed in travel order: a lap runs through the positive curve, the front
/// straight, the negative curve and the back straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Segment {
    PositiveCurve,
    FrontStraight,
    NegativeCurve,
    BackStraight,
}

/// A position snapped onto the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FittedPoint {
    /// The corrected coordinate, on the track outline.
    pub position: Position,
    /// Fraction of one lap from the start of the positive curve, in `[0, 1)`.
    pub proportion: f64,
    pub segment: Segment,
}

/// A great circle segment between the ends of two curves.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Straight {
    start: LonLat,
    normal: Vec3,
    length: f64,
    base_proportion: f64,
}

impl Straight {
    fn new(start: LonLat, end: LonLat, base_proportion: f64) -> Self {
        Straight {
            start,
            normal: cross_product(lon_lat_to_unit_vector(start), lon_lat_to_unit_vector(end)),
            length: great_circle_distance(start, end),
            base_proportion,
        }
    }

    /// Orthogonal projection of `point` onto the plane of the straight.
    fn project(&self, point: LonLat) -> LonLat {
        unit_vector_to_lon_lat(project_onto_plane(lon_lat_to_unit_vector(point), self.normal))
    }
}

/// An oval running track on a sphere.
///
/// The track is built from a [`TrackDescription`] and is immutable. All
/// lengths are kept as central angles, i.e. on a unit sphere. The two curves
/// are half circles whose centers lie half a straight length ahead of and
/// behind the track center along the long axis; the straights connect their
/// ends.
///
/// Changing orientation or lane means building a new track, see
/// [`with_orientation`](Self::with_orientation) and
/// [`with_lane`](Self::with_lane).
#[derive(Debug, Clone, PartialEq)]
pub struct TrackOnSphere {
    description: TrackDescription,
    center: LonLat,
    effective_track_length: f64,
    straight_length: f64,
    curve_length: f64,
    positive_curve: SmallCircleOnSphere,
    negative_curve: SmallCircleOnSphere,
    positive_angle_to_center: f64,
    negative_angle_to_center: f64,
    front_straight: Straight,
    back_straight: Straight,
}

impl TrackOnSphere {
    /// Builds a track from its description.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidTrackGeometry`] if the description can't
    /// be represented: sphere radius not positive, negative straight, track
    /// not longer than both straights, lane number zero, negative lane width,
    /// center latitude out of range, or a curve too large for the sphere.
    pub fn new(description: TrackDescription) -> Result<Self, TrackError> {
        validate(&description)?;

        let angle = description.angle;
        let center = LonLat::from(&description.center);
        let lane_offset = f64::from(description.lane_number - 1);
        // every outer lane adds 2π·width to the two curves combined
        let effective_track_length = (description.track_length_meters
            + 2.0 * PI * description.lane_width_meters * lane_offset)
            / description.sphere_radius_meters;
        let straight_length = description.straight_length_meters / description.sphere_radius_meters;
        let curve_length = effective_track_length / 2.0 - straight_length;
        let curve_linear_radius = curve_length / PI;
        if curve_linear_radius > 2.0 {
            return Err(invalid(format!(
                "curve radius of {} sphere radii exceeds the small circle domain",
                curve_linear_radius
            )));
        }

        let positive_center = point_on_small_circle(angle, straight_length / 2.0, center);
        let negative_center = point_on_small_circle(angle, -straight_length / 2.0, center);
        let positive_curve = SmallCircleOnSphere::new(curve_linear_radius, positive_center, 1.0);
        let negative_curve = SmallCircleOnSphere::new(curve_linear_radius, negative_center, 1.0);

        let curve_fraction = curve_length / effective_track_length;
        let front_straight = Straight::new(
            positive_curve.point_at(angle - FRAC_PI_2),
            negative_curve.point_at(angle - FRAC_PI_2),
            curve_fraction,
        );
        let back_straight = Straight::new(
            negative_curve.point_at(angle + FRAC_PI_2),
            positive_curve.point_at(angle + FRAC_PI_2),
            0.5 + curve_fraction,
        );

        Ok(TrackOnSphere {
            description,
            center,
            effective_track_length,
            straight_length,
            curve_length,
            positive_curve,
            negative_curve,
            positive_angle_to_center: great_circle_bearing(positive_center, center),
            negative_angle_to_center: great_circle_bearing(negative_center, center),
            front_straight,
            back_straight,
        })
    }

    /// Returns a new track moved to `center` and turned to `angle`.
    pub fn with_orientation(&self, center: Position, angle: f64) -> Result<Self, TrackError> {
        TrackOnSphere::new(TrackDescription {
            center,
            angle,
            ..self.description.clone()
        })
    }

    /// Returns a new track fitted onto another lane.
    pub fn with_lane(&self, lane_number: u32) -> Result<Self, TrackError> {
        TrackOnSphere::new(TrackDescription {
            lane_number,
            ..self.description.clone()
        })
    }

    pub fn description(&self) -> &TrackDescription {
        &self.description
    }

    pub fn center(&self) -> LonLat {
        self.center
    }

    pub fn positive_curve(&self) -> &SmallCircleOnSphere {
        &self.positive_curve
    }

    pub fn negative_curve(&self) -> &SmallCircleOnSphere {
        &self.negative_curve
    }

    /// Bearing from the positive curve's center back to the track center.
    pub fn positive_angle_to_center(&self) -> f64 {
        self.positive_angle_to_center
    }

    /// Bearing from the negative curve's center back to the track center.
    pub fn negative_angle_to_center(&self) -> f64 {
        self.negative_angle_to_center
    }

    /// Share of one lap taken by a single curve.
    pub fn curve_fraction(&self) -> f64 {
        self.curve_length / self.effective_track_length
    }

    /// Share of one lap taken by a single straight.
    pub fn straight_fraction(&self) -> f64 {
        self.straight_length / self.effective_track_length
    }

    /// Length of one lap in the fitted lane, meters.
    pub fn lap_length_meters(&self) -> f64 {
        self.effective_track_length * self.description.sphere_radius_meters
    }

    /// Samples the outline of the track once around.
    ///
    /// The positive curve is walked from bearing `angle + π/2` through its far
    /// side to `angle - π/2`, the negative curve continues through its own far
    /// side, and the first coordinate is repeated at the end. The negative
    /// curve's last corner at `angle + π/2` is not sampled, the closing edge
    /// runs from one step before it to the start. With
    /// `steps = 2^precision_level / 2` the path has `2 * steps + 2` points.
    /// Levels below 1 sample like level 1.
    ///
    /// The returned iterator is lazy and can be cloned to start over.
    pub fn track_path_coordinates(&self, precision_level: u32) -> TrackPath<'_> {
        let steps = ((1usize << precision_level.min(MAX_PRECISION_LEVEL)) / 2).max(1);
        TrackPath {
            track: self,
            steps,
            index: 0,
        }
    }

    /// Decides which segment a point belongs to.
    ///
    /// A point whose bearing from a curve's center differs from that curve's
    /// `angle_to_center` by more than `π/2` lies beyond the curve's center
    /// and belongs to the curve. The positive curve is tested first, then the
    /// negative one; the first match wins. Everything else goes to whichever
    /// straight is geodesically closer, the front straight on a tie.
    ///
    /// Bearings are taken on the sphere, so a track enclosing a pole doesn't
    /// classify consistently.
    pub fn classify(&self, point: LonLat) -> Segment {
        if is_beyond_curve_center(&self.positive_curve, self.positive_angle_to_center, point) {
            return Segment::PositiveCurve;
        }
        if is_beyond_curve_center(&self.negative_curve, self.negative_angle_to_center, point) {
            return Segment::NegativeCurve;
        }
        let front_distance = great_circle_distance(point, self.front_straight.project(point));
        let back_distance = great_circle_distance(point, self.back_straight.project(point));
        if back_distance < front_distance {
            Segment::BackStraight
        } else {
            Segment::FrontStraight
        }
    }

    /// Snaps a position onto the track.
    ///
    /// Curve points are moved radially onto the curve, straight points are
    /// projected orthogonally onto the straight's great circle.
    ///
    /// # Errors
    ///
    /// * [`FitError::NonFiniteCoordinate`] for NaN or infinite input.
    /// * [`FitError::DegenerateStraight`] if the point falls onto a straight
    ///   of zero length.
    /// * [`FitError::NonFiniteResult`] if the arithmetic broke down anyway.
    pub fn fit_to_track(&self, position: &Position) -> Result<FittedPoint, FitError> {
        let point = LonLat::from(position);
        if !point.is_finite() {
            return Err(FitError::NonFiniteCoordinate);
        }
        let segment = self.classify(point);
        let (fitted, proportion) = match segment {
            Segment::PositiveCurve => self.fit_to_curve(
                &self.positive_curve,
                self.positive_angle_to_center,
                0.0,
                point,
            ),
            Segment::NegativeCurve => self.fit_to_curve(
                &self.negative_curve,
                self.negative_angle_to_center,
                0.5,
                point,
            ),
            Segment::FrontStraight => self.fit_to_straight(&self.front_straight, point)?,
            Segment::BackStraight => self.fit_to_straight(&self.back_straight, point)?,
        };
        let proportion = wrap_unit(proportion);
        if !fitted.is_finite() || !proportion.is_finite() {
            return Err(FitError::NonFiniteResult);
        }
        Ok(FittedPoint {
            position: fitted.to_position(),
            proportion,
            segment,
        })
    }

    /// Fits every position and accumulates lap progress along the way.
    ///
    /// See [`fit_path_to_track`].
    pub fn fit_path_to_track<'a, I>(&self, positions: I) -> Vec<Result<LapProgressPoint, FitError>>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        fit_path_to_track(self, positions)
    }

    fn fit_to_curve(
        &self,
        curve: &SmallCircleOnSphere,
        angle_to_center: f64,
        base_proportion: f64,
        point: LonLat,
    ) -> (LonLat, f64) {
        let bearing = great_circle_bearing(curve.center(), point);
        let swept = angle_between(bearing, angle_to_center - FRAC_PI_2);
        (
            curve.point_at(bearing),
            base_proportion + swept / PI * self.curve_fraction(),
        )
    }

    fn fit_to_straight(&self, straight: &Straight, point: LonLat) -> Result<(LonLat, f64), FitError> {
        if straight.length.is_nan() || straight.length <= 0.0 {
            return Err(FitError::DegenerateStraight);
        }
        let projected = straight.project(point);
        let along = great_circle_distance(straight.start, projected);
        Ok((
            projected,
            straight.base_proportion + along / straight.length * self.straight_fraction(),
        ))
    }
}

fn is_beyond_curve_center(curve: &SmallCircleOnSphere, angle_to_center: f64, point: LonLat) -> bool {
    let bearing = great_circle_bearing(curve.center(), point);
    angle_between(angle_to_center, bearing).abs() > FRAC_PI_2
}

/// Wraps a proportion into `[0, 1)`.
fn wrap_unit(proportion: f64) -> f64 {
    let wrapped = proportion.rem_euclid(1.0);
    // rem_euclid rounds tiny negative values up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

fn invalid(reason: String) -> TrackError {
    TrackError::InvalidTrackGeometry(reason)
}

fn validate(desc: &TrackDescription) -> Result<(), TrackError> {
    if !(desc.sphere_radius_meters.is_finite() && desc.sphere_radius_meters > 0.0) {
        return Err(invalid(format!(
            "sphere radius must be positive, got {}",
            desc.sphere_radius_meters
        )));
    }
    if !(desc.straight_length_meters.is_finite() && desc.straight_length_meters >= 0.0) {
        return Err(invalid(format!(
            "straight length must not be negative, got {}",
            desc.straight_length_meters
        )));
    }
    if !(desc.track_length_meters.is_finite()
        && desc.track_length_meters > 2.0 * desc.straight_length_meters)
    {
        return Err(invalid(format!(
            "track length {} must exceed both straights ({})",
            desc.track_length_meters,
            2.0 * desc.straight_length_meters
        )));
    }
    if desc.lane_number == 0 {
        return Err(invalid("lane numbers start at 1".to_string()));
    }
    if !(desc.lane_width_meters.is_finite() && desc.lane_width_meters >= 0.0) {
        return Err(invalid(format!(
            "lane width must not be negative, got {}",
            desc.lane_width_meters
        )));
    }
    if !(desc.center.latitude.abs() <= 90.0 && desc.center.longitude.is_finite()) {
        return Err(invalid(format!(
            "center {:?} is not a coordinate",
            desc.center
        )));
    }
    if !desc.angle.is_finite() {
        return Err(invalid("orientation angle must be finite".to_string()));
    }
    Ok(())
}

/// Lazy sampler of the track outline, created by
/// [`TrackOnSphere::track_path_coordinates`].
#[derive(Debug, Clone)]
pub struct TrackPath<'a> {
    track: &'a TrackOnSphere,
    steps: usize,
    index: usize,
}

impl TrackPath<'_> {
    fn len_total(&self) -> usize {
        2 * self.steps + 2
    }

    fn sample(&self, index: usize) -> Position {
        let angle = self.track.description.angle;
        let step = PI / self.steps as f64;
        if index <= self.steps {
            self.track
                .positive_curve
                .point_at_degrees(angle + FRAC_PI_2 - index as f64 * step)
        } else if index <= 2 * self.steps {
            let k = index - self.steps - 1;
            self.track
                .negative_curve
                .point_at_degrees(angle - FRAC_PI_2 - k as f64 * step)
        } else {
            self.sample(0)
        }
    }
}

impl Iterator for TrackPath<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.index >= self.len_total() {
            return None;
        }
        let position = self.sample(self.index);
        self.index += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len_total() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrackPath<'_> {}
