// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan extraction from robot vacuum label grids
//!
//! This crate turns the robot's occupancy grid (one label code per cell)
//! into geometric primitives for visualization:
//! 1. Rooms: cells grouped by room identity
//! 2. Boundary: mapped cells touching unmapped space or the grid edge
//! 3. Walls: row and column runs of boundary cells as line segments
//! 4. Bounds of the mapped area and the robot marker position
//!
//! Every stage is a pure function over an immutable grid and never fails;
//! degenerate input yields empty results or documented defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vacmap_floorplan::{extract_floor_plan, GridMetadata, MapGrid, Point2D};
//!
//! let grid = MapGrid::from_labels(width, height, labels)?;
//! let meta = GridMetadata::new(-3200.0, -4100.0, 50.0);
//! let plan = extract_floor_plan(&grid, Some(Point2D::new(120.0, 80.0)), Some(&meta), 250.0);
//! println!("{} rooms, {} walls", plan.rooms.len(), plan.walls.len());
//! ```

pub mod boundary;
pub mod classifier;
pub mod demo;
pub mod error;
pub mod grid;
pub mod projection;
pub mod segmenter;
pub mod snapshot;
pub mod types;

// Re-export commonly used types and functions
pub use boundary::{trace_boundary, BoundarySet};
pub use classifier::{classify_rooms, classify_rooms_with_min, MIN_ROOM_PIXELS};
pub use demo::demo_floor_plan;
pub use error::{GridError, Result};
pub use grid::{MapGrid, PixelLabel};
pub use projection::{grid_center, mapped_bounds, project_robot};
pub use segmenter::{find_runs, segment_walls, DEFAULT_MIN_RUN_LENGTH};
pub use snapshot::MapSnapshot;
pub use types::{
    ExtractionConfig, FloorPlan, GridCell, GridMetadata, Orientation, PlanSource, Point2D, Room,
    RoomId, SceneBounds, WallSegment,
};

/// Extract rooms, walls, robot marker and bounds from a label grid
///
/// Uses the default room and run thresholds with the given wall height.
///
/// # Arguments
///
/// * `grid` - Label grid snapshot
/// * `robot_world` - Robot pose in world units, if known
/// * `metadata` - Grid origin and cell size, if known
/// * `wall_height` - Height attached to every wall segment
pub fn extract_floor_plan(
    grid: &MapGrid,
    robot_world: Option<Point2D>,
    metadata: Option<&GridMetadata>,
    wall_height: f64,
) -> FloorPlan {
    let config = ExtractionConfig {
        wall_height,
        ..Default::default()
    };
    extract_floor_plan_with_config(grid, robot_world, metadata, &config)
}

/// Extract a floor plan with explicit thresholds
pub fn extract_floor_plan_with_config(
    grid: &MapGrid,
    robot_world: Option<Point2D>,
    metadata: Option<&GridMetadata>,
    config: &ExtractionConfig,
) -> FloorPlan {
    // Step 1: Rooms
    let rooms = classify_rooms_with_min(grid, config.min_room_pixels);

    // Step 2: Boundary between mapped and unmapped area
    let boundary = trace_boundary(grid);

    // Step 3: Walls from boundary runs
    let walls = segment_walls(&boundary, config.min_run_length, config.wall_height);

    // Step 4: Annotations
    let bounds = mapped_bounds(grid);
    let robot_position = project_robot(robot_world, metadata, grid.width(), grid.height());

    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        rooms = rooms.len(),
        boundary = boundary.len(),
        walls = walls.len(),
        bounds = ?bounds.to_tuple(),
        robot = ?(robot_position.x, robot_position.y),
        "extracted floor plan"
    );

    FloorPlan {
        rooms,
        walls,
        robot_position,
        bounds,
        source: PlanSource::Map,
    }
}
