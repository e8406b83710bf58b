// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export backend availability
//!
//! Availability is a compile-time property of the build (cargo features),
//! queried explicitly by callers before they ask for an artifact.

use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Artifact formats the scene can be exported to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Wavefront OBJ wall mesh
    Obj,
    /// Top-down vector drawing
    Svg,
    /// Top-down raster preview
    Png,
    /// Serialized floor plan
    Json,
    /// Standalone page embedding the SVG view
    Html,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Obj,
        ExportFormat::Svg,
        ExportFormat::Png,
        ExportFormat::Json,
        ExportFormat::Html,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Obj => "obj",
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }

    /// Whether this build can produce the format
    pub fn is_available(&self) -> bool {
        match self {
            ExportFormat::Png => cfg!(feature = "png"),
            ExportFormat::Obj | ExportFormat::Svg | ExportFormat::Json | ExportFormat::Html => true,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "obj" => Ok(ExportFormat::Obj),
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            "json" => Ok(ExportFormat::Json),
            "html" => Ok(ExportFormat::Html),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Formats this build can export
pub fn available_formats() -> Vec<ExportFormat> {
    ExportFormat::ALL
        .into_iter()
        .filter(|format| format.is_available())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("OBJ".parse::<ExportFormat>().unwrap(), ExportFormat::Obj);
        assert_eq!(" svg ".parse::<ExportFormat>().unwrap(), ExportFormat::Svg);
        assert!("vrml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_vector_formats_always_available() {
        let formats = available_formats();
        assert!(formats.contains(&ExportFormat::Obj));
        assert!(formats.contains(&ExportFormat::Svg));
        assert!(formats.contains(&ExportFormat::Json));
        assert!(formats.contains(&ExportFormat::Html));
        assert_eq!(formats.contains(&ExportFormat::Png), cfg!(feature = "png"));
    }
}
