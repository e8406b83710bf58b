// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Label grid produced by the robot's map manager
//!
//! The grid is stored as an 8-bit grayscale raster where each pixel value is
//! the cell's label code. Codes are an external contract with the robot:
//!
//! | Code    | Meaning                               |
//! |---------|---------------------------------------|
//! | 0       | outside / unexplored                  |
//! | 1..=61  | finalized room segment                |
//! | 253     | floor being mapped, room not assigned |
//! | 254     | generic floor                         |
//! | 255     | wall                                  |
//!
//! Every other value is unrecognized and ignored by room classification.

use crate::error::{GridError, Result};
use image::{GrayImage, Luma};

pub const OUTSIDE: u8 = 0;
pub const WALL: u8 = 255;
pub const FLOOR: u8 = 254;
pub const NEW_SEGMENT: u8 = 253;
pub const MIN_ROOM_ID: u8 = 1;
pub const MAX_ROOM_ID: u8 = 61;

/// Semantic category of a raw label code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLabel {
    Outside,
    Wall,
    Floor,
    NewSegment,
    Room(u8),
    Unknown(u8),
}

impl PixelLabel {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            OUTSIDE => PixelLabel::Outside,
            WALL => PixelLabel::Wall,
            FLOOR => PixelLabel::Floor,
            NEW_SEGMENT => PixelLabel::NewSegment,
            MIN_ROOM_ID..=MAX_ROOM_ID => PixelLabel::Room(raw),
            other => PixelLabel::Unknown(other),
        }
    }

    pub fn to_raw(self) -> u8 {
        match self {
            PixelLabel::Outside => OUTSIDE,
            PixelLabel::Wall => WALL,
            PixelLabel::Floor => FLOOR,
            PixelLabel::NewSegment => NEW_SEGMENT,
            PixelLabel::Room(n) | PixelLabel::Unknown(n) => n,
        }
    }

    /// Anything other than `Outside` counts as mapped, including walls
    /// and unrecognized codes.
    #[inline]
    pub fn is_mapped(self) -> bool {
        self != PixelLabel::Outside
    }
}

/// Immutable `width x height` label raster
#[derive(Debug, Clone, PartialEq)]
pub struct MapGrid {
    image: GrayImage,
}

impl MapGrid {
    /// Grid with every cell `OUTSIDE`
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: GrayImage::new(width, height),
        }
    }

    /// Build from row-major label codes
    pub fn from_labels(width: u32, height: u32, labels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        let actual = labels.len();
        let mismatch = GridError::DimensionMismatch {
            width,
            height,
            expected,
            actual,
        };
        // `from_raw` alone accepts oversized buffers
        if actual != expected {
            return Err(mismatch);
        }
        GrayImage::from_raw(width, height, labels)
            .map(|image| Self { image })
            .ok_or(mismatch)
    }

    pub fn from_image(image: GrayImage) -> Self {
        Self { image }
    }

    /// Build by evaluating `f(x, y)` for every cell
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> u8,
    {
        Self {
            image: GrayImage::from_fn(width, height, |x, y| Luma([f(x, y)])),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Zero-size grid
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Raw code at an in-bounds cell. Panics when out of bounds.
    #[inline]
    pub fn raw(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y).0[0]
    }

    #[inline]
    pub fn label(&self, x: u32, y: u32) -> PixelLabel {
        PixelLabel::from_raw(self.raw(x, y))
    }

    /// Bounds-checked lookup with signed coordinates
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return None;
        }
        Some(self.raw(x as u32, y as u32))
    }

    /// Row-major label codes
    #[inline]
    pub fn labels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }

    /// Number of cells that are not `OUTSIDE`
    pub fn mapped_count(&self) -> usize {
        self.labels().iter().filter(|&&raw| raw != OUTSIDE).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_taxonomy() {
        assert_eq!(PixelLabel::from_raw(0), PixelLabel::Outside);
        assert_eq!(PixelLabel::from_raw(255), PixelLabel::Wall);
        assert_eq!(PixelLabel::from_raw(254), PixelLabel::Floor);
        assert_eq!(PixelLabel::from_raw(253), PixelLabel::NewSegment);
        assert_eq!(PixelLabel::from_raw(1), PixelLabel::Room(1));
        assert_eq!(PixelLabel::from_raw(61), PixelLabel::Room(61));
        assert_eq!(PixelLabel::from_raw(62), PixelLabel::Unknown(62));
        assert_eq!(PixelLabel::from_raw(200).to_raw(), 200);
        assert!(PixelLabel::Wall.is_mapped());
        assert!(!PixelLabel::Outside.is_mapped());
    }

    #[test]
    fn test_from_labels_dimension_mismatch() {
        let err = MapGrid::from_labels(3, 3, vec![0; 8]).unwrap_err();
        match err {
            GridError::DimensionMismatch { expected, actual, .. } => {
                assert_eq!(expected, 9);
                assert_eq!(actual, 8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_labels_rejects_extra_cells() {
        let mut labels = vec![0; 8];
        labels.extend([FLOOR; 16]);
        let err = MapGrid::from_labels(4, 2, labels).unwrap_err();
        assert!(matches!(
            err,
            GridError::DimensionMismatch { expected: 8, actual: 24, .. }
        ));
    }

    #[test]
    fn test_row_major_addressing() {
        // 3 wide, 2 tall: (2, 1) is the last element
        let grid = MapGrid::from_labels(3, 2, vec![0, 0, 0, 0, 0, 254]).unwrap();
        assert_eq!(grid.raw(2, 1), FLOOR);
        assert_eq!(grid.get(2, 1), Some(FLOOR));
        assert_eq!(grid.get(3, 1), None);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.mapped_count(), 1);
    }

    #[test]
    fn test_empty_grid() {
        let grid = MapGrid::new(0, 0);
        assert!(grid.is_empty());
        assert_eq!(grid.mapped_count(), 0);
        assert!(MapGrid::from_labels(0, 0, Vec::new()).is_ok());
    }
}
