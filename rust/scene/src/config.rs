// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the scene shows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationType {
    /// Room floors, walls and robot
    #[default]
    FloorPlan,
    /// Walls and robot only
    WallsOnly,
}

impl VisualizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationType::FloorPlan => "floor_plan",
            VisualizationType::WallsOnly => "walls_only",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "floor_plan" => Some(VisualizationType::FloorPlan),
            "walls_only" => Some(VisualizationType::WallsOnly),
            _ => None,
        }
    }
}

/// Room colors, cycled by room index
pub const DEFAULT_ROOM_PALETTE: [&str; 8] = [
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#FF9800", // Orange
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
    "#FFEB3B", // Yellow
    "#795548", // Brown
];

/// Configuration for scene composition and export
///
/// Heights are in centimetres, positions in grid cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Height of extracted walls
    pub wall_height: f64,
    /// Base of every wall quad
    pub floor_height: f64,
    /// Elevation of room floor markers
    pub room_height: f64,
    /// Elevation of the robot marker
    pub robot_height: f64,
    /// Padding around the bounds in the view limits
    pub margin: f64,
    pub visualization: VisualizationType,
    /// Raster scale for PNG export
    pub pixels_per_cell: u32,
    /// `#RRGGBB` room colors
    pub room_palette: Vec<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            wall_height: 250.0,
            floor_height: 0.0,
            room_height: 5.0,
            robot_height: 25.0,
            margin: 10.0,
            visualization: VisualizationType::FloorPlan,
            pixels_per_cell: 4,
            room_palette: DEFAULT_ROOM_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl SceneConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Color for the `index`-th room
    pub fn room_color(&self, index: usize) -> [u8; 3] {
        if self.room_palette.is_empty() {
            return [128, 128, 128];
        }
        let hex = &self.room_palette[index % self.room_palette.len()];
        parse_hex_color(hex).unwrap_or([128, 128, 128])
    }
}

/// Parse `#RRGGBB`
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
