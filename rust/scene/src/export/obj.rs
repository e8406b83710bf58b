// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ export

use crate::mesh::Mesh;
use crate::scene::Scene;
use std::io::{self, Write};

/// Write wall and floor meshes as OBJ objects
///
/// Scene meshes are Z-up; OBJ is Y-up:
///   OBJ X =  scene X
///   OBJ Y =  scene Z  (height)
///   OBJ Z = -scene Y  (negated so the plan isn't mirrored)
pub fn write_obj<W: Write>(scene: &Scene, mut out: W) -> io::Result<()> {
    writeln!(out, "# Generated by vacmap-3d")?;
    writeln!(out, "# {}", scene.title)?;
    writeln!(out, "# Coordinate system: Y-up (OBJ convention)")?;
    writeln!(out)?;

    let mut vertex_offset: u32 = 0;
    write_object(&mut out, "walls", &scene.walls, &mut vertex_offset)?;
    if let Some(floor) = &scene.floor {
        write_object(&mut out, "floor", floor, &mut vertex_offset)?;
    }

    out.flush()
}

fn write_object<W: Write>(out: &mut W, name: &str, mesh: &Mesh, vertex_offset: &mut u32) -> io::Result<()> {
    if mesh.is_empty() {
        return Ok(());
    }

    writeln!(out, "o {}", name)?;
    for v in mesh.positions.chunks_exact(3) {
        writeln!(out, "v {:.6} {:.6} {:.6}", v[0], v[2], -v[1])?;
    }
    for n in mesh.normals.chunks_exact(3) {
        writeln!(out, "vn {:.6} {:.6} {:.6}", n[0], n[2], -n[1])?;
    }
    for t in mesh.indices.chunks_exact(3) {
        let i0 = t[0] + *vertex_offset + 1;
        let i1 = t[1] + *vertex_offset + 1;
        let i2 = t[2] + *vertex_offset + 1;
        // Reverse winding to compensate for the negated axis
        writeln!(out, "f {}//{} {}//{} {}//{}", i0, i0, i2, i2, i1, i1)?;
    }
    writeln!(out)?;

    *vertex_offset += mesh.vertex_count() as u32;
    Ok(())
}
