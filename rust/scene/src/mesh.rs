// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle meshes for walls and floor slabs (Z-up)

use nalgebra::{Point3, Vector3};
use vacmap_floorplan::{SceneBounds, WallSegment};

/// Triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append a planar quad `a b c d` (counter-clockwise seen from `normal`)
    pub fn push_quad(&mut self, corners: [Point3<f64>; 4], normal: Vector3<f64>) {
        let base = self.vertex_count() as u32;
        for p in corners {
            self.positions.extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
            self.normals
                .extend_from_slice(&[normal.x as f32, normal.y as f32, normal.z as f32]);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Append another mesh, offsetting its indices
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
    }

    /// Axis-aligned bounds `(min, max)`; `None` when empty
    pub fn bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        if self.is_empty() {
            return None;
        }
        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);
        for chunk in self.positions.chunks_exact(3) {
            for axis in 0..3 {
                min[axis] = min[axis].min(chunk[axis]);
                max[axis] = max[axis].max(chunk[axis]);
            }
        }
        Some((min, max))
    }
}

/// Vertical quad for one wall segment, from `floor_height` to the wall's height
///
/// Returns `None` for zero-length segments.
pub fn wall_quad(wall: &WallSegment, floor_height: f64) -> Option<Mesh> {
    let dx = wall.end.x - wall.start.x;
    let dy = wall.end.y - wall.start.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length < 1e-10 {
        return None;
    }

    // Horizontal normal perpendicular to the wall direction
    let normal = Vector3::new(-dy / length, dx / length, 0.0);

    let mut mesh = Mesh::new();
    mesh.push_quad(
        [
            Point3::new(wall.start.x, wall.start.y, floor_height),
            Point3::new(wall.end.x, wall.end.y, floor_height),
            Point3::new(wall.end.x, wall.end.y, wall.height),
            Point3::new(wall.start.x, wall.start.y, wall.height),
        ],
        normal,
    );
    Some(mesh)
}

/// All wall quads combined into one mesh
pub fn walls_mesh(walls: &[WallSegment], floor_height: f64) -> Mesh {
    let mut mesh = Mesh::new();
    for quad in walls.iter().filter_map(|wall| wall_quad(wall, floor_height)) {
        mesh.merge(&quad);
    }
    mesh
}

/// Horizontal slab covering the bounds; `None` for degenerate bounds
pub fn floor_slab(bounds: &SceneBounds, elevation: f64) -> Option<Mesh> {
    if bounds.min_x >= bounds.max_x || bounds.min_y >= bounds.max_y {
        return None;
    }

    let mut mesh = Mesh::new();
    mesh.push_quad(
        [
            Point3::new(bounds.min_x, bounds.min_y, elevation),
            Point3::new(bounds.max_x, bounds.min_y, elevation),
            Point3::new(bounds.max_x, bounds.max_y, elevation),
            Point3::new(bounds.min_x, bounds.max_y, elevation),
        ],
        Vector3::z(),
    );
    Some(mesh)
}
