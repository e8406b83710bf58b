// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary tracing between mapped and unmapped area
//!
//! A mapped cell (anything but `OUTSIDE`) is on the boundary when one of its
//! 4-connected neighbours is `OUTSIDE` or lies outside the grid.

use crate::grid::{MapGrid, OUTSIDE};
use crate::types::GridCell;

/// Set of boundary cells
///
/// Kept sorted in row-major order (by `y`, then `x`) without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundarySet {
    cells: Vec<GridCell>,
}

impl BoundarySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary cells; order and duplicates do not matter
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = GridCell>,
    {
        let mut cells: Vec<GridCell> = cells.into_iter().collect();
        cells.sort_unstable_by_key(|c| (c.y, c.x));
        cells.dedup();
        Self { cells }
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        self.cells
            .binary_search_by_key(&(cell.y, cell.x), |c| (c.y, c.x))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.cells.iter().copied()
    }

    pub fn as_slice(&self) -> &[GridCell] {
        &self.cells
    }
}

impl FromIterator<GridCell> for BoundarySet {
    fn from_iter<I: IntoIterator<Item = GridCell>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

/// Find all mapped cells adjacent to unmapped space or the grid edge
pub fn trace_boundary(grid: &MapGrid) -> BoundarySet {
    if grid.is_empty() {
        return BoundarySet::new();
    }

    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let labels = grid.labels();
    let mapped = |idx: usize| labels[idx] != OUTSIDE;

    // Row-major scan keeps the output sorted without a final sort
    let mut cells = Vec::new();
    for y in 0..height {
        let row = y * width;
        for x in 0..width {
            let idx = row + x;
            if !mapped(idx) {
                continue;
            }

            let is_boundary = x == 0
                || y == 0
                || x == width - 1
                || y == height - 1
                || !mapped(idx - 1)
                || !mapped(idx + 1)
                || !mapped(idx - width)
                || !mapped(idx + width);

            if is_boundary {
                cells.push(GridCell::new(x as u32, y as u32));
            }
        }
    }

    tracing::debug!(boundary_cells = cells.len(), "traced boundary");

    BoundarySet { cells }
}
