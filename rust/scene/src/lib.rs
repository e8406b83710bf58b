// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 3D scene composition and export for extracted floor plans
//!
//! Consumes a [`FloorPlan`](vacmap_floorplan::FloorPlan) and produces:
//! - a Z-up scene: wall quads, room layers, robot marker and view limits
//! - artifacts: OBJ mesh, SVG and PNG top-down views, HTML page, JSON plan
//!
//! Which artifact formats are available is queried through
//! [`available_formats`]; the extraction crate knows nothing about them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vacmap_scene::{export_scene, ExportFormat, ExportRequest, SceneConfig};
//!
//! let plan = snapshot.extract(&Default::default())?;
//! let mut request = ExportRequest::new("out", "vacuum-1");
//! request.formats = vec![ExportFormat::Obj, ExportFormat::Svg];
//! let paths = export_scene(&plan, &SceneConfig::default(), snapshot.map_id, &request)?;
//! ```

pub mod capabilities;
pub mod config;
pub mod error;
pub mod export;
pub mod mesh;
pub mod scene;

pub use capabilities::{available_formats, ExportFormat};
pub use config::{SceneConfig, VisualizationType};
pub use error::{ExportError, Result};
#[cfg(feature = "png")]
pub use export::render_png;
pub use export::{export_scene, render_html, render_svg, write_json, write_obj, ExportRequest};
pub use mesh::Mesh;
pub use scene::{compose_scene, RoomLayer, Scene};
