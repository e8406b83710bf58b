// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene bounds and world <-> grid projection

use crate::grid::{MapGrid, OUTSIDE};
use crate::types::{GridMetadata, Point2D, SceneBounds};
use nalgebra::Vector2;

impl GridMetadata {
    /// Cell size usable as a divisor
    fn scale(&self) -> Option<f64> {
        (self.grid_size.is_finite() && self.grid_size > 0.0).then_some(self.grid_size)
    }

    /// `grid = (world - origin) / grid_size`; `None` for an unusable cell size
    pub fn world_to_grid(&self, world: Point2D) -> Option<Point2D> {
        let scale = self.scale()?;
        let origin = Vector2::new(self.left, self.top);
        let grid = (world.to_nalgebra() - origin) / scale;
        Some(Point2D::from_nalgebra(&grid))
    }

    /// Inverse of [`world_to_grid`](Self::world_to_grid)
    pub fn grid_to_world(&self, grid: Point2D) -> Option<Point2D> {
        let scale = self.scale()?;
        let origin = Vector2::new(self.left, self.top);
        let world = grid.to_nalgebra() * scale + origin;
        Some(Point2D::from_nalgebra(&world))
    }
}

/// Grid centre used when no robot pose is known
pub fn grid_center(width: u32, height: u32) -> Point2D {
    Point2D::new((width / 2) as f64, (height / 2) as f64)
}

/// Robot marker position in grid cells
///
/// Falls back to [`grid_center`] when the pose or the metadata is missing,
/// or the metadata has no usable cell size.
pub fn project_robot(
    robot_world: Option<Point2D>,
    metadata: Option<&GridMetadata>,
    width: u32,
    height: u32,
) -> Point2D {
    match (robot_world, metadata) {
        (Some(world), Some(meta)) => meta
            .world_to_grid(world)
            .unwrap_or_else(|| grid_center(width, height)),
        _ => grid_center(width, height),
    }
}

/// Bounding box of all mapped cells, `(0, 0, width, height)` when none
pub fn mapped_bounds(grid: &MapGrid) -> SceneBounds {
    let width = grid.width() as usize;
    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0usize;
    let mut max_y = 0usize;

    if width > 0 {
        for (y, row) in grid.labels().chunks_exact(width).enumerate() {
            let Some(first) = row.iter().position(|&raw| raw != OUTSIDE) else {
                continue;
            };
            // A row with a first mapped cell also has a last one
            let last = row.iter().rposition(|&raw| raw != OUTSIDE).unwrap_or(first);

            min_x = min_x.min(first);
            max_x = max_x.max(last);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    if min_x == usize::MAX {
        return SceneBounds::new(0.0, 0.0, grid.width() as f64, grid.height() as f64);
    }

    SceneBounds::new(min_x as f64, min_y as f64, max_x as f64, max_y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::FLOOR;
    use approx::assert_relative_eq;

    #[test]
    fn test_world_to_grid() {
        let meta = GridMetadata::new(-1000.0, -500.0, 50.0);
        let p = meta.world_to_grid(Point2D::new(250.0, 0.0)).unwrap();
        assert_relative_eq!(p.x, 25.0);
        assert_relative_eq!(p.y, 10.0);

        let back = meta.grid_to_world(p).unwrap();
        assert_relative_eq!(back.x, 250.0);
        assert_relative_eq!(back.y, 0.0);
    }

    #[test]
    fn test_zero_cell_size_is_unusable() {
        let meta = GridMetadata::new(0.0, 0.0, 0.0);
        assert!(meta.world_to_grid(Point2D::new(1.0, 1.0)).is_none());
        let p = project_robot(Some(Point2D::new(1.0, 1.0)), Some(&meta), 10, 7);
        assert_eq!(p, Point2D::new(5.0, 3.0));
    }

    #[test]
    fn test_missing_inputs_fall_back_to_center() {
        let meta = GridMetadata::new(0.0, 0.0, 50.0);
        assert_eq!(project_robot(None, Some(&meta), 11, 4), Point2D::new(5.0, 2.0));
        assert_eq!(project_robot(Some(Point2D::new(3.0, 3.0)), None, 11, 4), Point2D::new(5.0, 2.0));
        assert_eq!(project_robot(None, None, 0, 0), Point2D::new(0.0, 0.0));
    }

    #[test]
    fn test_mapped_bounds() {
        let grid = MapGrid::from_fn(10, 8, |x, y| {
            if (2..=6).contains(&x) && (3..=5).contains(&y) {
                FLOOR
            } else {
                0
            }
        });
        assert_eq!(mapped_bounds(&grid).to_tuple(), (2.0, 3.0, 6.0, 5.0));
    }

    #[test]
    fn test_bounds_default_when_unmapped() {
        assert_eq!(mapped_bounds(&MapGrid::new(12, 9)).to_tuple(), (0.0, 0.0, 12.0, 9.0));
        assert_eq!(mapped_bounds(&MapGrid::new(0, 0)).to_tuple(), (0.0, 0.0, 0.0, 0.0));
    }
}
