// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hard-coded demo floor plan
//!
//! A fixed data source for development and for callers that could not
//! obtain a grid at all. It does not go through the extraction pipeline.

use crate::types::{FloorPlan, GridCell, PlanSource, Point2D, Room, RoomId, SceneBounds, WallSegment};

fn rect_room(id: u8, label: &str, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> Room {
    let cells = ys
        .flat_map(|y| xs.clone().map(move |x| GridCell::new(x, y)))
        .collect();
    Room {
        id: RoomId::Segment(id),
        label: Some(label.to_string()),
        cells,
    }
}

/// Three rooms inside an 80 x 70 cell outline with two interior walls
pub fn demo_floor_plan(wall_height: f64) -> FloorPlan {
    let rooms = vec![
        rect_room(1, "living_room", 10..50, 10..40),
        rect_room(2, "kitchen", 50..80, 10..30),
        rect_room(3, "bedroom", 10..40, 40..70),
    ];

    let walls = vec![
        // Perimeter
        WallSegment::new(5.0, 5.0, 85.0, 5.0, wall_height),
        WallSegment::new(85.0, 5.0, 85.0, 75.0, wall_height),
        WallSegment::new(85.0, 75.0, 5.0, 75.0, wall_height),
        WallSegment::new(5.0, 75.0, 5.0, 5.0, wall_height),
        // Kitchen divider
        WallSegment::new(50.0, 5.0, 50.0, 30.0, wall_height),
        // Bedroom divider
        WallSegment::new(5.0, 40.0, 40.0, 40.0, wall_height),
    ];

    FloorPlan {
        rooms,
        walls,
        robot_position: Point2D::new(30.0, 25.0),
        bounds: SceneBounds::new(5.0, 5.0, 85.0, 75.0),
        source: PlanSource::Demo,
    }
}
