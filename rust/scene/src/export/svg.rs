// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Top-down SVG export

use crate::scene::{RoomLayer, Scene};
use std::fmt::Write;
use vacmap_floorplan::{find_runs, WallSegment};

/// Render the scene viewed from above, in grid-cell units
pub fn render_svg(scene: &Scene, walls: &[WallSegment]) -> String {
    let (x0, x1) = scene.x_range;
    let (y0, y1) = scene.y_range;
    let w = (x1 - x0).max(1.0);
    let h = (y1 - y0).max(1.0);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{x0} {y0} {w} {h}">
<defs>
  <style>
    .room {{ fill-opacity: 0.6; }}
    .wall {{ stroke: #ffffff; stroke-width: 0.5; stroke-linecap: square; }}
    .robot {{ fill: red; stroke: white; stroke-width: 0.4; }}
    .title {{ font-family: monospace; font-size: 3px; fill: #ffffff; }}
  </style>
</defs>
<rect x="{x0}" y="{y0}" width="{w}" height="{h}" fill="black"/>
<title>{title}</title>
"#,
        title = escape(&scene.title)
    );

    for room in &scene.rooms {
        push_room(&mut svg, room);
    }

    svg.push_str("<g class=\"walls\">\n");
    for wall in walls {
        let _ = writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" class="wall"/>"#,
            wall.start.x, wall.start.y, wall.end.x, wall.end.y
        );
    }
    svg.push_str("</g>\n");

    let _ = writeln!(
        svg,
        r#"<circle cx="{}" cy="{}" r="2" class="robot"><title>Robot</title></circle>"#,
        scene.robot.x, scene.robot.y
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" class="title">{}</text>"#,
        x0 + 1.0,
        y0 + 4.0,
        escape(&scene.title)
    );
    svg.push_str("</svg>\n");

    svg
}

/// One `<rect>` per horizontal run of room cells
fn push_room(svg: &mut String, room: &RoomLayer) {
    let [r, g, b] = room.color;
    let _ = writeln!(
        svg,
        r##"<g class="room" fill="#{:02x}{:02x}{:02x}"><title>{}</title>"##,
        r,
        g,
        b,
        escape(&room.name)
    );

    // Cells are row-major, so each row is a contiguous slice
    let mut xs: Vec<u32> = Vec::new();
    for row in room.cells.chunk_by(|a, b| a.y == b.y) {
        xs.clear();
        xs.extend(row.iter().map(|c| c.x));
        xs.sort_unstable();
        for (start, end) in find_runs(&xs) {
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="1"/>"#,
                start,
                row[0].y,
                end - start + 1
            );
        }
    }
    svg.push_str("</g>\n");
}

pub(super) fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
