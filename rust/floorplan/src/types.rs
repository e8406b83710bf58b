// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for floor plan extraction

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Integer cell coordinate in the label grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub x: u32,
    pub y: u32,
}

impl GridCell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point2D {
        Point2D::new(self.x as f64, self.y as f64)
    }
}

/// Room identity
///
/// Ordering puts numbered segments first (ascending), then generic floor,
/// then the in-progress segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    /// Finalized room/segment number
    Segment(u8),
    /// Generic mapped floor without a room assignment
    Floor,
    /// Floor that is still being mapped
    New,
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomId::Segment(n) => write!(f, "{}", n),
            RoomId::Floor => write!(f, "floor"),
            RoomId::New => write!(f, "new"),
        }
    }
}

/// A room: identity plus every grid cell sharing it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Optional display name (the robot grid carries none)
    pub label: Option<String>,
    /// Member cells in row-major order
    pub cells: Vec<GridCell>,
}

impl Room {
    pub fn new(id: RoomId, cells: Vec<GridCell>) -> Self {
        Self {
            id,
            label: None,
            cells,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.cells.len()
    }

    /// Display name, falling back to the identity
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Room {}", self.id),
        }
    }

    /// Mean cell position, `None` for an empty room
    pub fn centroid(&self) -> Option<Point2D> {
        if self.cells.is_empty() {
            return None;
        }
        let n = self.cells.len() as f64;
        let sx: f64 = self.cells.iter().map(|c| c.x as f64).sum();
        let sy: f64 = self.cells.iter().map(|c| c.y as f64).sum();
        Some(Point2D::new(sx / n, sy / n))
    }
}

/// Wall orientation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Axis-aligned wall segment with a caller-supplied height
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WallSegment {
    pub start: Point2D,
    pub end: Point2D,
    pub height: f64,
}

impl WallSegment {
    pub fn new(start_x: f64, start_y: f64, end_x: f64, end_y: f64, height: f64) -> Self {
        Self {
            start: Point2D::new(start_x, start_y),
            end: Point2D::new(end_x, end_y),
            height,
        }
    }

    /// Horizontal when both endpoints share a row
    pub fn orientation(&self) -> Orientation {
        if self.start.y == self.end.y {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// `(start_x, start_y, end_x, end_y, height)`
    pub fn to_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (self.start.x, self.start.y, self.end.x, self.end.y, self.height)
    }
}

/// Bounding box of the mapped area in grid-cell units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SceneBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SceneBounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// `(min_x, min_y, max_x, max_y)`
    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

/// Grid metadata supplied by the robot: origin offset and cell size in world units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridMetadata {
    /// World X of the grid's left edge
    pub left: f64,
    /// World Y of the grid's top edge
    pub top: f64,
    /// World units per cell
    pub grid_size: f64,
}

impl GridMetadata {
    pub fn new(left: f64, top: f64, grid_size: f64) -> Self {
        Self {
            left,
            top,
            grid_size,
        }
    }
}

/// Where a floor plan came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Extracted from a robot label grid
    Map,
    /// The fixed development fixture
    Demo,
}

/// Complete extraction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    pub rooms: Vec<Room>,
    pub walls: Vec<WallSegment>,
    /// Robot marker in grid-cell units
    pub robot_position: Point2D,
    pub bounds: SceneBounds,
    pub source: PlanSource,
}

impl FloorPlan {
    pub fn is_demo(&self) -> bool {
        self.source == PlanSource::Demo
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }
}

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Rooms with fewer cells are dropped as noise
    pub min_room_pixels: usize,
    /// Minimum `end - start` of a boundary run to become a wall
    pub min_run_length: u32,
    /// Height assigned to every extracted wall segment
    pub wall_height: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_room_pixels: crate::classifier::MIN_ROOM_PIXELS,
            min_run_length: crate::segmenter::DEFAULT_MIN_RUN_LENGTH,
            wall_height: 250.0, // cm
        }
    }
}
