// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room classification from grid labels
//!
//! Cells are grouped purely by label, not by connectivity: two disjoint
//! patches of generic floor end up in the same `RoomId::Floor` room.

use crate::grid::{MapGrid, PixelLabel};
use crate::types::{GridCell, Room, RoomId};
use rustc_hash::FxHashMap;

/// Rooms with fewer cells than this are treated as noise
pub const MIN_ROOM_PIXELS: usize = 11;

/// Room identity for a label, `None` for outside, wall and unknown codes
#[inline]
pub fn room_id_for(label: PixelLabel) -> Option<RoomId> {
    match label {
        PixelLabel::Floor => Some(RoomId::Floor),
        PixelLabel::NewSegment => Some(RoomId::New),
        PixelLabel::Room(n) => Some(RoomId::Segment(n)),
        PixelLabel::Outside | PixelLabel::Wall | PixelLabel::Unknown(_) => None,
    }
}

/// Partition the grid's floor cells into rooms, dropping rooms smaller
/// than [`MIN_ROOM_PIXELS`].
pub fn classify_rooms(grid: &MapGrid) -> Vec<Room> {
    classify_rooms_with_min(grid, MIN_ROOM_PIXELS)
}

/// Same as [`classify_rooms`] with an explicit minimum room size
pub fn classify_rooms_with_min(grid: &MapGrid, min_pixels: usize) -> Vec<Room> {
    let width = grid.width();
    if grid.is_empty() {
        return Vec::new();
    }

    // Codes repeat heavily, so resolve each one once
    let mut lookup: [Option<RoomId>; 256] = [None; 256];
    for (raw, slot) in lookup.iter_mut().enumerate() {
        *slot = room_id_for(PixelLabel::from_raw(raw as u8));
    }

    let mut by_id: FxHashMap<RoomId, Vec<GridCell>> = FxHashMap::default();
    for (idx, &raw) in grid.labels().iter().enumerate() {
        if let Some(id) = lookup[raw as usize] {
            let x = (idx % width as usize) as u32;
            let y = (idx / width as usize) as u32;
            by_id.entry(id).or_default().push(GridCell::new(x, y));
        }
    }

    let mut rooms: Vec<Room> = by_id
        .into_iter()
        .filter(|(_, cells)| cells.len() >= min_pixels)
        .map(|(id, cells)| Room::new(id, cells))
        .collect();
    rooms.sort_by_key(|room| room.id);

    tracing::debug!(
        rooms = rooms.len(),
        ids = ?rooms.iter().map(|r| r.id.to_string()).collect::<Vec<_>>(),
        "classified rooms"
    );

    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{FLOOR, NEW_SEGMENT, WALL};

    fn grid_with_block(label: u8, cells: u32) -> MapGrid {
        // Single row of `cells` labelled cells followed by outside
        MapGrid::from_fn(20, 1, |x, _| if x < cells { label } else { 0 })
    }

    #[test]
    fn test_room_size_threshold() {
        assert!(classify_rooms(&grid_with_block(5, 10)).is_empty());

        let rooms = classify_rooms(&grid_with_block(5, 11));
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, RoomId::Segment(5));
        assert_eq!(rooms[0].pixel_count(), 11);
    }

    #[test]
    fn test_walls_outside_and_unknown_are_skipped() {
        let grid = MapGrid::from_fn(12, 4, |_, y| match y {
            0 => WALL,
            1 => 0,
            2 => 100, // unrecognized
            _ => NEW_SEGMENT,
        });
        let rooms = classify_rooms(&grid);
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, RoomId::New);
        assert!(rooms[0].cells.iter().all(|c| c.y == 3));
    }

    #[test]
    fn test_rooms_sorted_by_identity() {
        let grid = MapGrid::from_fn(12, 3, |_, y| match y {
            0 => FLOOR,
            1 => 9,
            _ => 3,
        });
        let ids: Vec<RoomId> = classify_rooms(&grid).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RoomId::Segment(3), RoomId::Segment(9), RoomId::Floor]);
    }

    #[test]
    fn test_cells_row_major() {
        let grid = MapGrid::from_fn(4, 4, |_, _| FLOOR);
        let rooms = classify_rooms(&grid);
        let cells = &rooms[0].cells;
        assert_eq!(cells[0], GridCell::new(0, 0));
        assert_eq!(cells[1], GridCell::new(1, 0));
        assert_eq!(cells[4], GridCell::new(0, 1));
    }

    #[test]
    fn test_custom_minimum() {
        let rooms = classify_rooms_with_min(&grid_with_block(FLOOR, 3), 1);
        assert_eq!(rooms.len(), 1);
    }
}
