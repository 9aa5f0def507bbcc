//! Tests for running migrations against a project on disk.
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Helper to run iconshift and capture output
fn run_iconshift(args: &[&str]) -> (i32, String) {
    colored::control::set_override(false);
    let mut output = Vec::new();
    let args_owned: Vec<String> = args.iter().map(|s| (*s).to_owned()).collect();
    let exit_code = iconshift::entry_point::run_with_args_to(args_owned, &mut output).unwrap();
    (exit_code, String::from_utf8_lossy(&output).into_owned())
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_replace_icons_over_lib() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "lib/main.dart",
        "import 'package:flutter/material.dart';\n\nWidget a() => Icon(Icons.close);\n",
    );
    write(root, "lib/plain.dart", "Widget b() => Text('x');\n");
    write(root, "build/gen.dart", "Icon(Icons.close)\n");

    let (code, output) = run_iconshift(&["run", "replace-icons", "--root", root.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(output.contains("✓ lib/main.dart"), "{output}");
    assert!(!output.contains("plain.dart"));
    assert!(output.contains("Modified 1 files"));
    assert_eq!(
        fs::read_to_string(root.join("lib/main.dart")).unwrap(),
        "import 'package:flutter/material.dart';\nimport 'package:lucide_icons/lucide_icons.dart';\n\nWidget a() => Icon(LucideIcons.x);\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("build/gen.dart")).unwrap(),
        "Icon(Icons.close)\n"
    );
}

#[test]
fn test_import_lands_on_top_without_existing_imports() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "lib/a.dart", "Widget a() => Icon(Icons.close);\n");
    write(
        root,
        "lib/b.dart",
        "// Generated header\nlibrary app.b;\n\nWidget b() => Icon(Icons.close);\n",
    );

    let (code, output) = run_iconshift(&["run", "replace-icons", "--root", root.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(output.contains("Modified 2 files"), "{output}");
    assert_eq!(
        fs::read_to_string(root.join("lib/a.dart")).unwrap(),
        "import 'package:lucide_icons/lucide_icons.dart';\nWidget a() => Icon(LucideIcons.x);\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("lib/b.dart")).unwrap(),
        "// Generated header\nlibrary app.b;\nimport 'package:lucide_icons/lucide_icons.dart';\n\nWidget b() => Icon(LucideIcons.x);\n"
    );
}

#[test]
fn test_second_run_modifies_nothing() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "lib/a.dart", "Icon(Icons.home)\nContainer(color: c, boxShadow: [s])\n");
    let root_arg = root.to_str().unwrap();

    let (_, first) = run_iconshift(&["run", "all", "--root", root_arg]);
    assert!(first.contains("Modified 1 files"));
    let after_first = fs::read_to_string(root.join("lib/a.dart")).unwrap();

    let (code, second) = run_iconshift(&["run", "all", "--root", root_arg]);
    assert_eq!(code, 0);
    assert!(second.contains("Modified 0 files"), "{second}");
    assert_eq!(fs::read_to_string(root.join("lib/a.dart")).unwrap(), after_first);
}

#[test]
fn test_missing_listed_file_does_not_stop_run() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "lib/a.dart", "Icon(LucideLucideIcons.mapPin)\n");

    let (code, output) = run_iconshift(&[
        "run",
        "fix-lucide",
        "lib/missing.dart",
        "lib/a.dart",
        "--root",
        root.to_str().unwrap(),
    ]);

    assert_eq!(code, 0);
    assert!(output.contains("✗ File not found: lib/missing.dart"), "{output}");
    assert!(output.contains("✓ lib/a.dart"));
    assert!(output.contains("Modified 1 files"));
    assert_eq!(
        fs::read_to_string(root.join("lib/a.dart")).unwrap(),
        "Icon(LucideIcons.mapPin)\n"
    );
}

#[test]
fn test_cleanup_remaining_reports_absent_list() {
    let dir = tempdir().unwrap();
    let (code, output) = run_iconshift(&[
        "run",
        "cleanup-remaining",
        "--root",
        dir.path().to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert_eq!(output.matches("File not found").count(), 22);
    assert!(output.contains("Modified 0 files"));
}

#[test]
fn test_final_cleanup_applies_per_file_rules() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let amenities = "lib/role/tenant/presentation/widget/detail_property/amenities_widget.dart";
    let booking = "lib/role/tenant/presentation/pages/property/booking_property.dart";
    write(root, amenities, "Icon(Icons.pool) Icon(Icons.tune)\n");
    write(root, booking, "Icon(Icons.arrow_drop_down) LucideLucideIcons.mapPin\n");

    let (_, output) = run_iconshift(&["run", "final-cleanup", "--root", root.to_str().unwrap()]);

    assert!(output.contains("Modified 2 files"), "{output}");
    // tune is only mapped for the search widget
    assert_eq!(
        fs::read_to_string(root.join(amenities)).unwrap(),
        "Icon(LucideIcons.waves) Icon(Icons.tune)\n"
    );
    assert_eq!(
        fs::read_to_string(root.join(booking)).unwrap(),
        "Icon(LucideIcons.chevronDown) LucideIcons.mapPin\n"
    );
}

#[test]
fn test_dry_run_and_check() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "lib/a.dart", "Icon(Icons.close)\n");
    let root_arg = root.to_str().unwrap();

    let (code, output) = run_iconshift(&["run", "replace-icons", "--dry-run", "--root", root_arg]);
    assert_eq!(code, 0);
    assert!(output.contains("[DRY-RUN]"));
    assert!(output.contains("Would modify 1 files"));
    assert_eq!(fs::read_to_string(root.join("lib/a.dart")).unwrap(), "Icon(Icons.close)\n");

    let (code, _) = run_iconshift(&["check", "replace-icons", "--root", root_arg]);
    assert_eq!(code, 1);

    run_iconshift(&["run", "replace-icons", "--root", root_arg]);
    let (code, _) = run_iconshift(&["check", "replace-icons", "--root", root_arg]);
    assert_eq!(code, 0);
}

#[test]
fn test_config_extension_excludes_and_custom_rules() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        ".iconshift.toml",
        r#"
[iconshift]
exclude_folders = ["generated"]

[[iconshift.rules]]
pattern = '\bIcons\.pets\b'
replacement = "LucideIcons.dog"

[[iconshift.rules]]
pattern = "Icons\\.(broken"
replacement = "x"
"#,
    );
    write(root, "lib/a.dart", "Icon(Icons.pets)\n");
    write(root, "lib/generated/b.dart", "Icon(Icons.pets)\n");

    let (code, output) = run_iconshift(&["run", "fix-lucide", "--root", root.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(output.contains("Warning: skipping custom rule"), "{output}");
    assert_eq!(fs::read_to_string(root.join("lib/a.dart")).unwrap(), "Icon(LucideIcons.dog)\n");
    assert_eq!(
        fs::read_to_string(root.join("lib/generated/b.dart")).unwrap(),
        "Icon(Icons.pets)\n"
    );
}

#[test]
fn test_config_import_line_override() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        ".iconshift.toml",
        "[iconshift]\nimport_line = \"import 'package:lucide_icons_flutter/lucide_icons.dart';\"\n",
    );
    write(root, "lib/a.dart", "import 'x.dart';\nIcon(Icons.close)\n");

    run_iconshift(&["run", "replace-icons", "--root", root.to_str().unwrap()]);

    assert_eq!(
        fs::read_to_string(root.join("lib/a.dart")).unwrap(),
        "import 'x.dart';\nimport 'package:lucide_icons_flutter/lucide_icons.dart';\nIcon(LucideIcons.x)\n"
    );
}

#[test]
fn test_json_summary() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "lib/a.dart", "Icon(Icons.close)\n");

    let (code, output) = run_iconshift(&[
        "run",
        "replace-icons",
        "--json",
        "--root",
        root.to_str().unwrap(),
    ]);

    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["migration"], "replace-icons");
    assert_eq!(value["modified"], 1);
    assert_eq!(value["files"][0]["path"], "lib/a.dart");
    assert_eq!(value["files"][0]["status"], "modified");
    assert_eq!(value["files"][0]["hits"][0]["rule_set"], "material");
}

#[test]
fn test_verbose_lists_rules() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "lib/a.dart",
        "Icon(Icons.close) Icon(Icons.home) Icon(Icons.search) Icon(Icons.settings) Icon(Icons.menu)\n",
    );

    let (_, output) = run_iconshift(&["run", "replace-icons", "-v", "--root", root.to_str().unwrap()]);

    assert!(output.contains("- Icons.close -> LucideIcons.x (1)"), "{output}");
    assert!(output.contains("... and "));
}
