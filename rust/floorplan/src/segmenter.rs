// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run-length wall segmentation
//!
//! Boundary cells are grouped by row and, independently, by column. Each
//! maximal run of consecutive coordinates long enough becomes an
//! axis-aligned wall segment. A corner cell can terminate a horizontal run
//! and start a vertical one; both segments are kept.
//!
//! Output order: row segments by ascending `y` then `start_x`, followed by
//! column segments by ascending `x` then `start_y`.

use crate::boundary::BoundarySet;
use crate::types::{GridCell, WallSegment};

/// Minimum `end - start` for a run to count as a wall
pub const DEFAULT_MIN_RUN_LENGTH: u32 = 2;

/// Split a sorted coordinate slice into maximal runs of consecutive values
///
/// Returns inclusive `(start, end)` pairs. Duplicates are tolerated.
pub fn find_runs(coords: &[u32]) -> Vec<(u32, u32)> {
    let mut runs = Vec::new();
    let Some((&first, rest)) = coords.split_first() else {
        return runs;
    };

    let mut start = first;
    let mut end = first;
    for &c in rest {
        if c == end || c == end + 1 {
            end = c;
        } else {
            runs.push((start, end));
            start = c;
            end = c;
        }
    }
    runs.push((start, end));

    runs
}

/// Convert boundary cells into horizontal and vertical wall segments
pub fn segment_walls(boundary: &BoundarySet, min_run_length: u32, wall_height: f64) -> Vec<WallSegment> {
    let mut segments = Vec::new();

    // Row pass: the set is already row-major
    collect_pass(boundary.as_slice(), |c| (c.y, c.x), min_run_length, |y, start, end| {
        segments.push(WallSegment::new(start as f64, y as f64, end as f64, y as f64, wall_height));
    });
    let horizontal = segments.len();

    // Column pass
    let mut by_column = boundary.as_slice().to_vec();
    by_column.sort_unstable_by_key(|c| (c.x, c.y));
    collect_pass(&by_column, |c| (c.x, c.y), min_run_length, |x, start, end| {
        segments.push(WallSegment::new(x as f64, start as f64, x as f64, end as f64, wall_height));
    });

    tracing::debug!(
        horizontal,
        vertical = segments.len() - horizontal,
        "segmented walls"
    );

    segments
}

/// Walk cells sorted by `(group, coord)` and emit each long-enough run
fn collect_pass<K, E>(sorted: &[GridCell], key: K, min_run_length: u32, mut emit: E)
where
    K: Fn(&GridCell) -> (u32, u32),
    E: FnMut(u32, u32, u32),
{
    let mut coords: Vec<u32> = Vec::new();
    let mut i = 0;

    while i < sorted.len() {
        let group = key(&sorted[i]).0;
        coords.clear();
        while i < sorted.len() && key(&sorted[i]).0 == group {
            coords.push(key(&sorted[i]).1);
            i += 1;
        }

        for (start, end) in find_runs(&coords) {
            if end - start >= min_run_length {
                emit(group, start, end);
            }
        }
    }
}
