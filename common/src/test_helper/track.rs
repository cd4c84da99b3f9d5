// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{position::Position, track_description::TrackDescription};

/// Center of the track at Laney College, Oakland.
pub const LANEY_CENTER: Position = Position {
    latitude: 37.7944,
    longitude: -122.2585,
};

pub fn get_track_description_as_json<'a>() -> &'a str {
    r#"
    {
        "sphere_radius_meters": 6371000.0,
        "straight_length_meters": 100.0,
        "track_length_meters": 400.0,
        "lane_width_meters": 1.07,
        "lane_number": 1,
        "center": {
            "latitude": 37.7944,
            "longitude": -122.2585
        },
        "angle": -0.73
    }
    "#
}

pub fn get_track_description() -> TrackDescription {
    TrackDescription {
        sphere_radius_meters: 6_371_000.0,
        straight_length_meters: 100.0,
        track_length_meters: 400.0,
        lane_width_meters: 1.07,
        lane_number: 1,
        center: LANEY_CENTER,
        angle: -0.73,
    }
}
