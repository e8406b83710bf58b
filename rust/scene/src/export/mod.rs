// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Artifact export backends

mod html;
mod obj;
#[cfg(feature = "png")]
mod raster;
mod svg;

pub use html::render_html;
pub use obj::write_obj;
#[cfg(feature = "png")]
pub use raster::render_png;
pub use svg::render_svg;

use crate::capabilities::ExportFormat;
use crate::config::SceneConfig;
use crate::error::{ExportError, Result};
use crate::scene::compose_scene;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use vacmap_floorplan::FloorPlan;

/// Serialize the floor plan as pretty JSON
pub fn write_json<W: Write>(plan: &FloorPlan, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, plan)?;
    writeln!(out)?;
    Ok(())
}

/// Where and what to export
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub output_dir: PathBuf,
    pub prefix: String,
    pub device_id: String,
    pub formats: Vec<ExportFormat>,
}

impl ExportRequest {
    pub fn new(output_dir: impl Into<PathBuf>, device_id: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: "VacMap3D".to_string(),
            device_id: device_id.into(),
            formats: vec![ExportFormat::Obj, ExportFormat::Svg],
        }
    }

    /// `{prefix}_{device_id}_{visualization}.{ext}`
    pub fn file_name(&self, visualization: &str, format: ExportFormat) -> String {
        format!(
            "{}_{}_{}.{}",
            self.prefix,
            self.device_id,
            visualization,
            format.extension()
        )
    }
}

/// Compose the scene and write one file per requested format
///
/// Fails before writing anything if a requested format is unavailable.
pub fn export_scene(
    plan: &FloorPlan,
    config: &SceneConfig,
    map_id: Option<u32>,
    request: &ExportRequest,
) -> Result<Vec<PathBuf>> {
    if let Some(missing) = request.formats.iter().find(|f| !f.is_available()) {
        return Err(ExportError::Unavailable(*missing));
    }

    fs::create_dir_all(&request.output_dir)?;
    let scene = compose_scene(plan, config, map_id);
    let visualization = config.visualization.as_str();

    let mut written = Vec::with_capacity(request.formats.len());
    for &format in &request.formats {
        let path = request
            .output_dir
            .join(request.file_name(visualization, format));
        write_format(plan, &scene, config, format, &path)?;
        tracing::info!(path = %path.display(), format = format.extension(), "exported");
        written.push(path);
    }

    Ok(written)
}

fn write_format(
    plan: &FloorPlan,
    scene: &crate::scene::Scene,
    config: &SceneConfig,
    format: ExportFormat,
    path: &Path,
) -> Result<()> {
    match format {
        ExportFormat::Obj => {
            write_obj(scene, BufWriter::new(File::create(path)?))?;
        }
        ExportFormat::Svg => {
            fs::write(path, render_svg(scene, &plan.walls))?;
        }
        ExportFormat::Json => {
            write_json(plan, BufWriter::new(File::create(path)?))?;
        }
        ExportFormat::Html => {
            fs::write(path, render_html(scene, &plan.walls))?;
        }
        #[cfg(feature = "png")]
        ExportFormat::Png => {
            render_png(scene, &plan.walls, config.pixels_per_cell).save(path)?;
        }
        #[cfg(not(feature = "png"))]
        ExportFormat::Png => {
            let _ = config;
            return Err(ExportError::Unavailable(ExportFormat::Png));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vacmap_floorplan::demo_floor_plan;

    #[test]
    fn test_file_name() {
        let request = ExportRequest::new("/tmp", "robot1");
        assert_eq!(
            request.file_name("floor_plan", ExportFormat::Obj),
            "VacMap3D_robot1_floor_plan.obj"
        );
    }

    #[test]
    fn test_write_json_roundtrips_counts() {
        let plan = demo_floor_plan(250.0);
        let mut buf = Vec::new();
        write_json(&plan, &mut buf).unwrap();

        let parsed: FloorPlan = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.rooms.len(), 3);
        assert_eq!(parsed.walls, plan.walls);
        assert!(parsed.is_demo());
    }
}
