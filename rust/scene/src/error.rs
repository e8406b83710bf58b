// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::capabilities::ExportFormat;
use thiserror::Error;

/// Result type for scene export
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while loading config or writing artifacts
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Export format {0:?} is not available in this build")]
    Unavailable(ExportFormat),

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Grid error: {0}")]
    Grid(#[from] vacmap_floorplan::GridError),
}
