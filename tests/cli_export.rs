//! Export runs against a shell script standing in for Blender.
#![cfg(unix)]

mod common;

use common::*;

#[test]
fn test_export_pattern_jobs_drive_blender() {
    let env = TestEnv::new();
    let blender = fake_blender(&env.project_path("bin"));
    env.write_file("trees.blend", "BLENDER");
    let blender_arg = blender.display().to_string();

    let result = env.run(&[
        "export",
        "trees.blend",
        "--output-dir",
        "out",
        "--pattern",
        "oak_mature",
        "--pattern",
        "willow",
        "--blender",
        &blender_arg,
    ]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let calls = fake_blender_calls(&blender);
    let actions: Vec<&str> = calls.iter().map(|c| c["action"].as_str().unwrap()).collect();
    assert_eq!(actions, vec!["probe", "export"]);

    let export = &calls[1]["request"];
    assert_eq!(export["exporter_format"], "GLB");
    assert_eq!(
        export["objects"],
        serde_json::json!(["Oak_Mature_Trunk", "oak_mature_leaves"])
    );
    assert!(export["output"].as_str().unwrap().ends_with("oak_mature.glb"));
    assert!(env.project_path("out").is_dir());
    assert!(result.stdout.contains("1 jobs skipped"));
}

#[test]
fn test_export_single_mode_selected_objects_with_preview() {
    let env = TestEnv::new();
    let blender = fake_blender(&env.project_path("bin"));
    env.write_file("oak_tree.blend", "BLENDER");
    let blender_arg = blender.display().to_string();

    let result = env.run(&[
        "--json",
        "export",
        "oak_tree.blend",
        "--output-dir",
        "out",
        "--all-objects",
        "no",
        "--both-formats",
        "--preview",
        "--scale",
        "0.5",
        "--blender",
        &blender_arg,
    ]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let calls = fake_blender_calls(&blender);
    let actions: Vec<&str> = calls.iter().map(|c| c["action"].as_str().unwrap()).collect();
    assert_eq!(actions, vec!["probe", "export", "export", "preview"]);
    assert_eq!(calls[1]["request"]["objects"], serde_json::json!(["oak_mature_leaves"]));
    assert_eq!(calls[1]["request"]["scale"], 0.5);
    assert_eq!(calls[2]["request"]["exporter_format"], "GLTF_SEPARATE");
    assert_eq!(calls[3]["request"]["resolution"], 512);
    assert!(calls[3]["request"]["output"]
        .as_str()
        .unwrap()
        .ends_with("oak_tree_preview.png"));

    let exported = result.events_of("exported");
    assert_eq!(exported.len(), 2);
    assert_eq!(exported[0]["name"], "oak_tree");
    assert_eq!(exported[1]["format"], "gltf");
}

#[test]
fn test_export_missing_scene_is_fatal() {
    let env = TestEnv::new();
    let blender = fake_blender(&env.project_path("bin"));
    let blender_arg = blender.display().to_string();

    let result = env.run(&["export", "nope.blend", "--blender", &blender_arg]);

    assert!(!result.success);
    assert!(result.stderr.contains("nope.blend"), "stderr:\n{}", result.stderr);
    assert!(fake_blender_calls(&blender).is_empty());
}

#[test]
fn test_export_without_blender_fails() {
    let env = TestEnv::new();
    env.write_file("trees.blend", "BLENDER");

    let result = env.run_with_env(
        &["export", "trees.blend", "--blender", "/definitely/not/blender"],
        &[("PATH", "/nonexistent")],
    );

    assert!(!result.success);
    assert!(
        result.stderr.contains("/definitely/not/blender"),
        "stderr:\n{}",
        result.stderr
    );
}
