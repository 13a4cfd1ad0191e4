// clipflow-cli/tests/cli_integration.rs
//
// Drives the command implementations end to end against manifests on disk.

use std::fs;

use clipflow_cli::cli::{ColorArgs, SequenceArgs, ValidateArgs};
use clipflow_cli::commands::color::execute_color;
use clipflow_cli::commands::sequence::execute_sequence;
use clipflow_cli::commands::validate::execute_validate;
use clipflow_core::manifest::{ClipId, MotionManifest};
use clipflow_core::motion::{MotionDirection, MotionProfile};
use tempfile::tempdir;

fn write_motion_manifest(path: &std::path::Path) -> MotionManifest {
    use MotionDirection::*;
    let mut manifest = MotionManifest::new(Default::default());
    let clips = [
        ("c1.mp4", Static, East, 0.80),
        ("c2.mp4", East, South, 0.75),
        ("c3.mp4", South, West, 0.20),
        ("c4.mp4", North, North, 0.90),
    ];
    for (id, start, end, intensity) in clips {
        manifest.add_clip(ClipId::from(id), MotionProfile::new(start, end, intensity, 1.0));
    }
    manifest.save(path).unwrap();
    manifest
}

#[test]
fn test_sequence_command_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest_path = dir.path().join("motion_manifest.json");
    let plan_path = dir.path().join("plan.json");
    let input_dir = dir.path().join("clips");
    let output_dir = dir.path().join("ordered");

    let manifest = write_motion_manifest(&manifest_path);
    fs::create_dir(&input_dir)?;
    for id in manifest.clip_ids() {
        fs::write(input_dir.join(id.as_str()), id.as_str().as_bytes())?;
    }

    execute_sequence(SequenceArgs {
        manifest: manifest_path,
        lookahead: Some(2),
        min_score: Some(0.5),
        direction_weight: None,
        max_branches: None,
        plan_json: Some(plan_path.clone()),
        apply: true,
        input_dir: Some(input_dir),
        output_dir: Some(output_dir.clone()),
    })?;

    // Plan JSON landed and holds the expected ordering
    let plan: serde_json::Value = serde_json::from_str(&fs::read_to_string(&plan_path)?)?;
    let order: Vec<&str> = plan["order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["c1.mp4", "c2.mp4", "c3.mp4", "c4.mp4"]);
    assert_eq!(plan["complete"], serde_json::Value::Bool(true));

    // The ordering was applied as sequence files whose contents follow it
    for (index, id) in order.iter().enumerate() {
        let applied = output_dir.join(format!("sequence_{index:04}.mp4"));
        assert_eq!(fs::read_to_string(&applied)?, *id);
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_sequence_command_missing_manifest_fails() {
    let result = execute_sequence(SequenceArgs {
        manifest: "surely_missing_manifest.json".into(),
        lookahead: None,
        min_score: None,
        direction_weight: None,
        max_branches: None,
        plan_json: None,
        apply: false,
        input_dir: None,
        output_dir: None,
    });
    assert!(result.is_err());
}

#[test]
fn test_validate_command() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest_path = dir.path().join("motion_manifest.json");
    write_motion_manifest(&manifest_path);

    execute_validate(ValidateArgs {
        manifest: manifest_path,
    })?;

    dir.close()?;
    Ok(())
}

#[test]
fn test_color_command_similarity() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let manifest_path = dir.path().join("colors.json");

    let json = r#"{
        "clips": {
            "a.mp4": { "colors": [ { "h": 0.01, "s": 1.0, "v": 1.0 } ] },
            "b.mp4": { "colors": [ { "h": 0.60, "s": 1.0, "v": 1.0 } ] },
            "c.mp4": { "colors": [ { "h": 0.03, "s": 1.0, "v": 1.0 } ] }
        }
    }"#;
    fs::write(&manifest_path, json)?;

    execute_color(ColorArgs {
        manifest: manifest_path,
        palette: None,
        apply: false,
        input_dir: None,
        output_dir: None,
    })?;

    dir.close()?;
    Ok(())
}
