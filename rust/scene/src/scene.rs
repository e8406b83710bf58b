// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 3D scene composition from an extracted floor plan

use crate::config::{SceneConfig, VisualizationType};
use crate::mesh::{floor_slab, walls_mesh, Mesh};
use nalgebra::Point3;
use vacmap_floorplan::{FloorPlan, GridCell, RoomId, SceneBounds};

/// Room floor shown as a colored layer of cells
#[derive(Debug, Clone)]
pub struct RoomLayer {
    pub id: RoomId,
    pub name: String,
    pub color: [u8; 3],
    /// Elevation of the layer
    pub z: f64,
    pub cells: Vec<GridCell>,
}

/// Everything a renderer needs to draw a floor plan
#[derive(Debug, Clone)]
pub struct Scene {
    pub title: String,
    pub visualization: VisualizationType,
    /// Vertical wall quads
    pub walls: Mesh,
    /// Slab under the mapped area
    pub floor: Option<Mesh>,
    pub rooms: Vec<RoomLayer>,
    pub robot: Point3<f64>,
    /// Mapped-area bounds without margin
    pub bounds: SceneBounds,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub z_range: (f64, f64),
}

/// Scene title shown by every backend
pub fn scene_title(map_id: Option<u32>, demo: bool) -> String {
    match map_id {
        Some(id) if !demo => format!("3D Floor Plan - Map ID: {}", id),
        _ => "3D Floor Plan - Demo Map".to_string(),
    }
}

/// Compose walls, room layers, robot marker and view limits
pub fn compose_scene(plan: &FloorPlan, config: &SceneConfig, map_id: Option<u32>) -> Scene {
    let walls = walls_mesh(&plan.walls, config.floor_height);
    let floor = floor_slab(&plan.bounds, config.floor_height);

    let rooms = match config.visualization {
        VisualizationType::FloorPlan => plan
            .rooms
            .iter()
            .filter(|room| !room.cells.is_empty())
            .enumerate()
            .map(|(i, room)| RoomLayer {
                id: room.id,
                name: room.display_name(),
                color: config.room_color(i),
                z: config.room_height,
                cells: room.cells.clone(),
            })
            .collect(),
        VisualizationType::WallsOnly => Vec::new(),
    };

    let view = plan.bounds.expand(config.margin);
    let robot = Point3::new(plan.robot_position.x, plan.robot_position.y, config.robot_height);

    tracing::debug!(
        wall_triangles = walls.triangle_count(),
        room_layers = rooms.len(),
        visualization = config.visualization.as_str(),
        "composed scene"
    );

    Scene {
        title: scene_title(map_id, plan.is_demo()),
        visualization: config.visualization,
        walls,
        floor,
        rooms,
        robot,
        bounds: plan.bounds,
        x_range: (view.min_x, view.max_x),
        y_range: (view.min_y, view.max_y),
        z_range: (0.0, config.wall_height + 20.0),
    }
}
