// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serialized map snapshots
//!
//! A snapshot is everything the extraction needs from the robot, captured
//! as plain data: the label grid, the robot pose and the grid metadata.
//!
//! ```json
//! {
//!   "map_id": 3,
//!   "width": 4, "height": 2,
//!   "labels": [0, 254, 254, 0, 0, 254, 254, 0],
//!   "robot_position": { "x": 120.0, "y": -40.0 },
//!   "metadata": { "left": -200.0, "top": -100.0, "grid_size": 50.0 }
//! }
//! ```

use crate::error::{GridError, Result};
use crate::grid::MapGrid;
use crate::types::{ExtractionConfig, FloorPlan, GridMetadata, Point2D};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Plain-data capture of a robot map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSnapshot {
    #[serde(default)]
    pub map_id: Option<u32>,
    pub width: u32,
    pub height: u32,
    /// Row-major label codes
    pub labels: Vec<u8>,
    /// Robot pose in world units
    #[serde(default)]
    pub robot_position: Option<Point2D>,
    #[serde(default)]
    pub metadata: Option<GridMetadata>,
}

impl MapSnapshot {
    /// Snapshot of a grid with no pose or metadata
    pub fn from_grid(grid: &MapGrid) -> Self {
        Self {
            map_id: None,
            width: grid.width(),
            height: grid.height(),
            labels: grid.labels().to_vec(),
            robot_position: None,
            metadata: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        // Validate eagerly so a bad file fails at load time
        snapshot.grid()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load a `.json` snapshot or a grayscale `.png` label grid
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json(&fs::read_to_string(path)?),
            #[cfg(feature = "png")]
            "png" => {
                let image = image::ImageReader::open(path)?
                    .with_guessed_format()?
                    .decode()?;
                Self::from_label_image(image)
            }
            other => Err(GridError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Wrap a decoded label raster
    ///
    /// Only 8-bit grayscale holds label codes verbatim; any other color type
    /// would need a lossy conversion and is rejected.
    #[cfg(feature = "png")]
    pub fn from_label_image(image: image::DynamicImage) -> Result<Self> {
        match image {
            image::DynamicImage::ImageLuma8(gray) => Ok(Self::from_grid(&MapGrid::from_image(gray))),
            other => Err(GridError::UnsupportedFormat(format!(
                "{:?} label image (expected 8-bit grayscale)",
                other.color()
            ))),
        }
    }

    /// Build the label grid
    pub fn grid(&self) -> Result<MapGrid> {
        MapGrid::from_labels(self.width, self.height, self.labels.clone())
    }

    /// Run the full extraction on this snapshot
    pub fn extract(&self, config: &ExtractionConfig) -> Result<FloorPlan> {
        let grid = self.grid()?;
        Ok(crate::extract_floor_plan_with_config(
            &grid,
            self.robot_position,
            self.metadata.as_ref(),
            config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "map_id": 3,
        "width": 4, "height": 2,
        "labels": [0, 254, 254, 0, 0, 254, 254, 0],
        "robot_position": { "x": 0.0, "y": 0.0 },
        "metadata": { "left": -200.0, "top": -100.0, "grid_size": 50.0 }
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = MapSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.map_id, Some(3));
        let grid = snapshot.grid().unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.raw(1, 1), 254);
    }

    #[test]
    fn test_optional_fields_default() {
        let snapshot = MapSnapshot::from_json(r#"{"width": 1, "height": 1, "labels": [0]}"#).unwrap();
        assert!(snapshot.map_id.is_none());
        assert!(snapshot.robot_position.is_none());
        assert!(snapshot.metadata.is_none());
    }

    #[test]
    fn test_bad_dimensions_rejected() {
        let err = MapSnapshot::from_json(r#"{"width": 2, "height": 2, "labels": [0]}"#).unwrap_err();
        assert!(matches!(err, GridError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_extra_labels_rejected() {
        let err = MapSnapshot::from_json(r#"{"width": 1, "height": 1, "labels": [0, 254, 254]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            GridError::DimensionMismatch { expected: 1, actual: 3, .. }
        ));
    }

    #[test]
    fn test_extract_projects_robot() {
        let plan = MapSnapshot::from_json(SNAPSHOT)
            .unwrap()
            .extract(&ExtractionConfig::default())
            .unwrap();
        assert_eq!(plan.robot_position, Point2D::new(4.0, 2.0));
        // 4 floor cells is below the room threshold
        assert!(plan.rooms.is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = MapSnapshot::load("map.bmp").unwrap_err();
        assert!(matches!(err, GridError::UnsupportedFormat(_)));
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_png_grayscale_loads_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let grid = MapGrid::from_fn(4, 3, |x, _| if x < 2 { 254 } else { 7 });
        grid.as_image().save(&path).unwrap();

        let snapshot = MapSnapshot::load(&path).unwrap();
        assert_eq!(snapshot.grid().unwrap(), grid);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_png_color_image_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        image::RgbImage::from_pixel(4, 3, image::Rgb([254, 254, 254]))
            .save(&path)
            .unwrap();

        let err = MapSnapshot::load(&path).unwrap_err();
        assert!(matches!(err, GridError::UnsupportedFormat(_)));
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_sixteen_bit_gray_rejected() {
        let image = image::DynamicImage::ImageLuma16(image::ImageBuffer::from_pixel(
            2,
            2,
            image::Luma([254u16]),
        ));
        let err = MapSnapshot::from_label_image(image).unwrap_err();
        assert!(matches!(err, GridError::UnsupportedFormat(_)));
    }
}
