// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end export: snapshot -> extraction -> artifacts on disk

use std::fs;
use tempfile::tempdir;
use vacmap_floorplan::grid::MIN_ROOM_ID;
use vacmap_floorplan::{demo_floor_plan, ExtractionConfig, FloorPlan, MapGrid, MapSnapshot};
use vacmap_scene::{
    export_scene, ExportError, ExportFormat, ExportRequest, SceneConfig, VisualizationType,
};

/// Two 10x8 rooms side by side
fn two_room_snapshot() -> MapSnapshot {
    let grid = MapGrid::from_fn(20, 12, |x, y| match (x, y) {
        (2..=9, 2..=9) => MIN_ROOM_ID,
        (10..=17, 2..=9) => MIN_ROOM_ID + 1,
        _ => 0,
    });
    let mut snapshot = MapSnapshot::from_grid(&grid);
    snapshot.map_id = Some(42);
    snapshot
}

#[test]
fn test_export_demo_obj_svg_json() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("out");
    let mut request = ExportRequest::new(&dir, "robot1");
    request.formats = vec![
        ExportFormat::Obj,
        ExportFormat::Svg,
        ExportFormat::Json,
        ExportFormat::Html,
    ];

    let plan = demo_floor_plan(250.0);
    let paths = export_scene(&plan, &SceneConfig::default(), None, &request).unwrap();

    assert_eq!(paths.len(), 4);
    assert_eq!(paths[0], dir.join("VacMap3D_robot1_floor_plan.obj"));
    assert!(paths.iter().all(|p| p.exists()));

    let obj = fs::read_to_string(&paths[0]).unwrap();
    assert!(obj.contains("o walls"));

    let svg = fs::read_to_string(&paths[1]).unwrap();
    assert!(svg.contains("<svg xmlns"));
    assert!(svg.contains("3D Floor Plan - Demo Map"));

    let json = fs::read_to_string(&paths[2]).unwrap();
    let parsed: FloorPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.walls.len(), 6);

    let html = fs::read_to_string(&paths[3]).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<svg xmlns"));
}

#[test]
fn test_export_extracted_snapshot() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("out");
    let snapshot = two_room_snapshot();
    let plan = snapshot.extract(&ExtractionConfig::default()).unwrap();
    assert_eq!(plan.rooms.len(), 2);
    assert!(!plan.walls.is_empty());

    let mut request = ExportRequest::new(&dir, "robot2");
    request.formats = vec![ExportFormat::Svg];
    let paths = export_scene(&plan, &SceneConfig::default(), snapshot.map_id, &request).unwrap();

    let svg = fs::read_to_string(&paths[0]).unwrap();
    assert!(svg.contains("3D Floor Plan - Map ID: 42"));
}

#[test]
fn test_walls_only_file_name() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("out");
    let config = SceneConfig {
        visualization: VisualizationType::WallsOnly,
        ..Default::default()
    };
    let mut request = ExportRequest::new(&dir, "robot3");
    request.prefix = "Plan".to_string();
    request.formats = vec![ExportFormat::Obj];

    let paths = export_scene(&demo_floor_plan(250.0), &config, None, &request).unwrap();
    assert_eq!(paths, vec![dir.join("Plan_robot3_walls_only.obj")]);
}

#[cfg(feature = "png")]
#[test]
fn test_export_png_preview() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("out");
    let mut request = ExportRequest::new(&dir, "robot4");
    request.formats = vec![ExportFormat::Png];

    let paths = export_scene(&demo_floor_plan(250.0), &SceneConfig::default(), None, &request).unwrap();
    let image = image::open(&paths[0]).unwrap();
    assert!(image.width() > 0 && image.height() > 0);
}

#[cfg(not(feature = "png"))]
#[test]
fn test_png_unavailable_writes_nothing() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("out");
    let mut request = ExportRequest::new(&dir, "robot5");
    request.formats = vec![ExportFormat::Obj, ExportFormat::Png];

    let result = export_scene(&demo_floor_plan(250.0), &SceneConfig::default(), None, &request);
    assert!(matches!(result, Err(ExportError::Unavailable(ExportFormat::Png))));
    assert!(!dir.exists());
}

#[test]
fn test_snapshot_file_roundtrip_through_load() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path();
    let path = dir.join("snapshot.json");
    fs::write(&path, two_room_snapshot().to_json().unwrap()).unwrap();

    let loaded = MapSnapshot::load(&path).unwrap();
    assert_eq!(loaded.map_id, Some(42));
    let plan = loaded.extract(&ExtractionConfig::default()).unwrap();
    assert_eq!(plan.rooms.len(), 2);

    let bad = dir.join("snapshot.txt");
    fs::write(&bad, "nope").unwrap();
    let err = MapSnapshot::load(&bad).map(|_| ()).map_err(ExportError::from);
    assert!(matches!(err, Err(ExportError::Grid(_))));
}
