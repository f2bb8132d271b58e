use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use strata_cli::{Args, run};

/// Collects all .toml files from a directory
fn collect_manifests(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos are at workspace root, relative to workspace not the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(manifest: &Path, output_dir: &Path) -> Args {
    Args {
        input: manifest.to_string_lossy().to_string(),
        output_dir: output_dir.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

fn svg_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("svg"))
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_manifests(demos_path());

    assert!(!valid_demos.is_empty(), "No demo manifests found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_dir = temp_dir
            .path()
            .join(demo_path.file_stem().unwrap().to_string_lossy().as_ref());

        if let Err(e) = run(&args_for(demo_path, &output_dir)) {
            failed_demos.push((demo_path.clone(), e));
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} demos passed", valid_demos.len());
}

#[test]
fn e2e_architecture_demo_writes_every_diagram() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("nested").join("diagrams");

    let manifest = demos_path().join("architecture.toml");
    let written = run(&args_for(&manifest, &output_dir)).expect("architecture demo should render");

    assert_eq!(written, 11);
    assert_eq!(svg_files(&output_dir).len(), 11);

    let first = output_dir.join("24.2.1_模版及基础信息配置功能架构图.svg");
    let svg = fs::read_to_string(first).expect("first diagram should exist");
    assert!(svg.starts_with("<?xml"));
    assert_eq!(svg.matches("data-role=\"band\"").count(), 6);
    assert_eq!(svg.matches("data-role=\"connector\"").count(), 5);
    assert_eq!(svg.matches("data-role=\"cell\"").count(), 30);
    assert!(svg.contains("数字人模板设计"));
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_manifests(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error manifests found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_dir = temp_dir.path().join(format!(
            "error_{}",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args_for(demo_path, &output_dir)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }

        assert!(
            svg_files(&output_dir).is_empty(),
            "{} wrote output despite failing",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError manifests that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error manifest(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error manifests failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_empty_manifest_succeeds_without_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let manifest = temp_dir.path().join("empty.toml");
    fs::write(&manifest, "# nothing here\n").unwrap();
    let output_dir = temp_dir.path().join("out");

    let written = run(&args_for(&manifest, &output_dir)).expect("empty manifest is not an error");
    assert_eq!(written, 0);
    assert!(!output_dir.exists());
}

#[test]
fn e2e_file_outside_output_dir_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let manifest = temp_dir.path().join("escape.toml");
    let source = r#"
        [[diagram]]
        title = "Up"
        file = "../up.svg"

        [[diagram.layer]]
        name = "Only"
        "#;
    fs::write(&manifest, source).unwrap();
    let output_dir = temp_dir.path().join("out");

    let err = run(&args_for(&manifest, &output_dir)).unwrap_err();

    assert!(matches!(err, strata::StrataError::Manifest { .. }));
    assert!(!temp_dir.path().join("up.svg").exists());
    assert!(!output_dir.exists());
}

#[test]
fn e2e_explicit_config_sets_default_canvas() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[canvas]\nwidth = 1400\nheight = 900\n").unwrap();

    let manifest = temp_dir.path().join("one.toml");
    fs::write(
        &manifest,
        "[[diagram]]\ntitle = \"One\"\n\n[[diagram.layer]]\nname = \"Only\"\n",
    )
    .unwrap();

    let output_dir = temp_dir.path().join("out");
    let mut args = args_for(&manifest, &output_dir);
    args.config = Some(config.to_string_lossy().to_string());
    run(&args).expect("render with config");

    let svg = fs::read_to_string(output_dir.join("One.svg")).unwrap();
    assert!(svg.contains("viewBox=\"0 0 1400 900\""));
}

#[test]
fn e2e_missing_manifest_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let err = run(&args_for(
        &temp_dir.path().join("absent.toml"),
        &temp_dir.path().join("out"),
    ))
    .unwrap_err();

    assert!(matches!(err, strata::StrataError::Io(_)));
}
