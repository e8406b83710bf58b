// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Turn a robot map snapshot into 3D/2D floor plan artifacts
//!
//! Usage:
//!   vacmap-3d <snapshot.json|grid.png> [options]

use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use vacmap_floorplan::{demo_floor_plan, ExtractionConfig, FloorPlan, MapSnapshot};
use vacmap_scene::{
    available_formats, export_scene, ExportFormat, ExportRequest, SceneConfig, VisualizationType,
};

struct Options {
    input: Option<PathBuf>,
    output_dir: PathBuf,
    prefix: String,
    device_id: String,
    formats: Option<Vec<ExportFormat>>,
    config_path: Option<PathBuf>,
    wall_height: Option<f64>,
    visualization: Option<VisualizationType>,
    demo: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        tracing::error!(error = %e, "export failed");
        process::exit(1);
    }
}

fn run(options: Options) -> vacmap_scene::Result<()> {
    let mut config = match &options.config_path {
        Some(path) => SceneConfig::from_json_file(path)?,
        None => SceneConfig::default(),
    };
    if let Some(height) = options.wall_height {
        config.wall_height = height;
    }
    if let Some(visualization) = options.visualization {
        config.visualization = visualization;
    }

    let extraction = ExtractionConfig {
        wall_height: config.wall_height,
        ..Default::default()
    };
    let (plan, map_id) = load_plan(&options, &extraction, config.wall_height);

    tracing::info!(
        rooms = plan.rooms.len(),
        walls = plan.walls.len(),
        demo = plan.is_demo(),
        "floor plan ready"
    );

    let request = ExportRequest {
        output_dir: options.output_dir,
        prefix: options.prefix,
        device_id: options.device_id,
        formats: options.formats.unwrap_or_else(available_formats),
    };

    for path in export_scene(&plan, &config, map_id, &request)? {
        println!("{}", path.display());
    }
    Ok(())
}

/// Extract from the input, substituting the demo plan when it cannot be read
fn load_plan(options: &Options, extraction: &ExtractionConfig, wall_height: f64) -> (FloorPlan, Option<u32>) {
    let Some(input) = options.input.as_ref().filter(|_| !options.demo) else {
        tracing::info!("using demo floor plan");
        return (demo_floor_plan(wall_height), None);
    };

    let loaded = MapSnapshot::load(input).and_then(|snapshot| {
        let plan = snapshot.extract(extraction)?;
        Ok((plan, snapshot.map_id))
    });

    match loaded {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(
                input = %input.display(),
                error = %e,
                "no usable map data, falling back to demo floor plan"
            );
            (demo_floor_plan(wall_height), None)
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        input: None,
        output_dir: PathBuf::from("."),
        prefix: "VacMap3D".to_string(),
        device_id: "vacuum".to_string(),
        formats: None,
        config_path: None,
        wall_height: None,
        visualization: None,
        demo: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("Missing value for {}", name))
        };
        match arg.as_str() {
            "--output-dir" => options.output_dir = PathBuf::from(value(arg.as_str())?),
            "--prefix" => options.prefix = value(arg.as_str())?,
            "--device-id" => options.device_id = value(arg.as_str())?,
            "--config" => options.config_path = Some(PathBuf::from(value(arg.as_str())?)),
            "--wall-height" => {
                let raw = value(arg.as_str())?;
                let height = raw
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid wall height: {}", raw))?;
                options.wall_height = Some(height);
            }
            "--visualization" => {
                let raw = value(arg.as_str())?;
                let kind = VisualizationType::parse(&raw)
                    .ok_or_else(|| format!("Invalid visualization: {}", raw))?;
                options.visualization = Some(kind);
            }
            "--formats" => {
                let raw = value(arg.as_str())?;
                let formats = raw
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| s.parse::<ExportFormat>().map_err(|e| e.to_string()))
                    .collect::<Result<Vec<_>, _>>()?;
                options.formats = Some(formats);
            }
            "--demo" => options.demo = true,
            other if other.starts_with("--") => return Err(format!("Unknown option: {}", other)),
            path => {
                if options.input.is_some() {
                    return Err(format!("Unexpected argument: {}", path));
                }
                options.input = Some(PathBuf::from(path));
            }
        }
    }

    if options.input.is_none() && !options.demo {
        return Err("Missing input snapshot (or pass --demo)".to_string());
    }
    Ok(options)
}

fn print_usage() {
    let formats: Vec<&str> = available_formats().iter().map(|f| f.extension()).collect();
    println!(
        r#"Robot Map to 3D Floor Plan
==========================

Extracts rooms and wall outlines from a robot vacuum label grid and
exports a 3D wall mesh plus top-down previews.

USAGE:
  vacmap-3d <input> [OPTIONS]
  vacmap-3d --demo [OPTIONS]

ARGUMENTS:
  <input>                   Map snapshot (.json) or grayscale label grid (.png)

OPTIONS:
  --output-dir <dir>        Output directory (default: .)
  --prefix <name>           File name prefix (default: VacMap3D)
  --device-id <id>          Device id used in file names (default: vacuum)
  --formats <list>          Comma-separated formats (available: {})
  --config <path>           Scene config JSON
  --wall-height <cm>        Wall height (default: 250)
  --visualization <kind>    floor_plan | walls_only
  --demo                    Use the built-in demo floor plan
  -h, --help                Show this help message

Set RUST_LOG=debug for per-stage extraction details.
"#,
        formats.join(",")
    );
}
