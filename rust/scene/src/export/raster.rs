// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Top-down raster preview

use crate::scene::Scene;
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_line_segment_mut,
};
use imageproc::rect::Rect;
use vacmap_floorplan::WallSegment;

/// Largest edge of the preview in pixels
const MAX_EDGE: f64 = 8192.0;

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const WALL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const ROBOT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Render the scene from above at `pixels_per_cell`
///
/// The scale is reduced when the view would exceed 8192 pixels on a side.
pub fn render_png(scene: &Scene, walls: &[WallSegment], pixels_per_cell: u32) -> RgbImage {
    let (x0, x1) = scene.x_range;
    let (y0, y1) = scene.y_range;
    let extent_x = (x1 - x0).max(1.0);
    let extent_y = (y1 - y0).max(1.0);

    let scale = preview_scale(extent_x, extent_y, pixels_per_cell);
    let width = ((extent_x * scale).ceil() as u32).max(1);
    let height = ((extent_y * scale).ceil() as u32).max(1);

    let to_px = |x: f64, y: f64| (((x - x0) * scale) as f32, ((y - y0) * scale) as f32);
    let cell = (scale.round() as u32).max(1);

    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    for room in &scene.rooms {
        let color = Rgb(room.color);
        for c in &room.cells {
            let (px, py) = to_px(c.x as f64, c.y as f64);
            draw_filled_rect_mut(&mut img, Rect::at(px as i32, py as i32).of_size(cell, cell), color);
        }
    }

    for wall in walls {
        let start = to_px(wall.start.x, wall.start.y);
        let end = to_px(wall.end.x, wall.end.y);
        draw_line_segment_mut(&mut img, start, end, WALL_COLOR);
    }

    let (rx, ry) = to_px(scene.robot.x, scene.robot.y);
    let radius = ((2.0 * scale) as i32).max(2);
    draw_filled_circle_mut(&mut img, (rx as i32, ry as i32), radius, ROBOT_COLOR);
    draw_hollow_circle_mut(&mut img, (rx as i32, ry as i32), radius, WALL_COLOR);

    img
}

/// Pixels per cell, capped so neither edge exceeds `MAX_EDGE`
fn preview_scale(extent_x: f64, extent_y: f64, pixels_per_cell: u32) -> f64 {
    (pixels_per_cell.max(1) as f64)
        .min(MAX_EDGE / extent_x)
        .min(MAX_EDGE / extent_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::scene::compose_scene;
    use vacmap_floorplan::demo_floor_plan;

    #[test]
    fn test_render_demo_png() {
        let plan = demo_floor_plan(250.0);
        let scene = compose_scene(&plan, &SceneConfig::default(), None);
        let img = render_png(&scene, &plan.walls, 2);

        // View is 100 x 90 cells with the default margin
        assert_eq!(img.dimensions(), (200, 180));
        // Top-left corner is background
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        // Robot centre at cell (30, 25) -> pixel (70, 60)
        assert_eq!(*img.get_pixel(70, 60), ROBOT_COLOR);
        // Living room cell (20, 35) -> pixel (50, 80)
        assert_eq!(img.get_pixel(50, 80).0, [0x4C, 0xAF, 0x50]);
    }

    #[test]
    fn test_scale_is_capped() {
        assert_eq!(preview_scale(100.0, 90.0, 4), 4.0);
        assert_eq!(preview_scale(100.0, 90.0, 0), 1.0);
        // 4096 cells at 4 px would be 16384 px wide
        assert_eq!(preview_scale(4096.0, 10.0, 4), 2.0);
    }
}
