// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{position::Position, track_point::TrackPoint};
use chrono::{TimeZone, Utc};

#[test]
pub fn new_track_point_has_no_sensor_data() {
    let time = Utc.with_ymd_and_hms(2021, 5, 1, 7, 30, 0).unwrap();
    let point = TrackPoint::new(time, Some(Position::new(&37.7944, &-122.2585)));
    assert_eq!(point.time, time);
    assert!(point.heart_rate.is_none());
    assert!(point.cadence.is_none());
    assert!(point.watts.is_none());
    assert!(point.distance.is_none());
    assert!(point.speed.is_none());
}
