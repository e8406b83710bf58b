// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Standalone HTML page around the SVG view

use super::svg::{escape, render_svg};
use crate::scene::Scene;
use std::fmt::Write;
use vacmap_floorplan::WallSegment;

/// Self-contained page: inline SVG plus a room legend, no external assets
pub fn render_html(scene: &Scene, walls: &[WallSegment]) -> String {
    let svg = render_svg(scene, walls);
    // Inline SVG must not carry an XML declaration
    let body = match svg.find("<svg") {
        Some(start) => &svg[start..],
        None => svg.as_str(),
    };

    let title = escape(&scene.title);
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ margin: 0; background: #111; color: #eee; font-family: monospace; }}
  h1 {{ font-size: 1.1em; margin: 0.6em 1em; }}
  .view svg {{ width: 100%; height: 80vh; }}
  .legend span {{ display: inline-block; margin: 0 1em; }}
  .legend i {{ display: inline-block; width: 0.9em; height: 0.9em; margin-right: 0.4em; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div class="view">
{body}</div>
<div class="legend">
"#
    );

    for room in &scene.rooms {
        let [r, g, b] = room.color;
        let _ = writeln!(
            html,
            r#"  <span><i style="background:#{:02x}{:02x}{:02x}"></i>{}</span>"#,
            r,
            g,
            b,
            escape(&room.name)
        );
    }
    let _ = writeln!(
        html,
        "  <span>{} walls</span>\n</div>\n</body>\n</html>",
        walls.len()
    );

    html
}
