// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for grid loading
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised while building a grid from external data.
///
/// Extraction itself never fails; these only cover malformed input.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Label count {actual} does not match {width}x{height} grid (expected {expected})")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),
}
