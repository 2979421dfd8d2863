//! Integration tests for manifest determinism

use super::test_utils::{config_for, sample_project, write_file};
use sha2::{Digest, Sha256};
use sml_manifest::generator::{build_manifest, generate};
use sml_manifest::manifest::render_manifest;
use sml_manifest::tree::hasher::compute_content_hash;
use std::fs;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn version_of(root: &std::path::Path) -> String {
    build_manifest(&config_for(root)).unwrap().1.version
}

/// Running twice over an unchanged tree yields byte-identical output
#[test]
fn test_regeneration_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    sample_project(temp_dir.path());

    let first = generate(&config_for(temp_dir.path())).unwrap();
    let first_bytes = fs::read(&first.output_path).unwrap();

    let second = generate(&config_for(temp_dir.path())).unwrap();
    let second_bytes = fs::read(&second.output_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

/// Two-file example: entries sorted by path bytes, version from those tuples
#[test]
fn test_two_file_example() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "UI.sml", b"0123456789");
    write_file(temp_dir.path(), "icon.png", b"abcde");

    let (_, manifest) = build_manifest(&config_for(temp_dir.path())).unwrap();

    let ui_hash = compute_content_hash(b"0123456789");
    let icon_hash = compute_content_hash(b"abcde");

    let mut digest = Sha256::new();
    digest.update(format!("UI.sml\0{}\010\n", ui_hash).as_bytes());
    digest.update(format!("icon.png\0{}\05\n", icon_hash).as_bytes());
    let expected_version = format!("auto-{}", &hex::encode(digest.finalize())[..16]);

    let expected = format!(
        "Manifest {{\n    version: \"{v}\"\n    entry: \"UI.sml\"\n\n    Files {{\n        \
         File {{ path: \"UI.sml\" hash: \"sha256:{ui}\" size: 10 }}\n        \
         File {{ path: \"icon.png\" hash: \"sha256:{icon}\" size: 5 }}\n    }}\n}}\n",
        v = expected_version,
        ui = ui_hash,
        icon = icon_hash,
    );

    assert_eq!(manifest.version, expected_version);
    assert_eq!(render_manifest(&manifest), expected);
}

#[test]
fn test_content_change_changes_version() {
    let temp_dir = TempDir::new().unwrap();
    sample_project(temp_dir.path());
    let before = version_of(temp_dir.path());

    write_file(temp_dir.path(), "icon.png", b"abcdf");

    assert_ne!(before, version_of(temp_dir.path()));
}

#[test]
fn test_addition_removal_and_rename_change_version() {
    let temp_dir = TempDir::new().unwrap();
    sample_project(temp_dir.path());
    let base = version_of(temp_dir.path());

    write_file(temp_dir.path(), "extra.txt", b"more");
    let added = version_of(temp_dir.path());
    assert_ne!(base, added);

    fs::rename(
        temp_dir.path().join("extra.txt"),
        temp_dir.path().join("renamed.txt"),
    )
    .unwrap();
    let renamed = version_of(temp_dir.path());
    assert_ne!(added, renamed);

    fs::remove_file(temp_dir.path().join("renamed.txt")).unwrap();
    assert_eq!(base, version_of(temp_dir.path()));
}

#[test]
fn test_mtime_does_not_change_version() {
    let temp_dir = TempDir::new().unwrap();
    sample_project(temp_dir.path());
    let before = version_of(temp_dir.path());

    let file = fs::OpenOptions::new()
        .write(true)
        .open(temp_dir.path().join("icon.png"))
        .unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(86_400))
        .unwrap();
    drop(file);

    assert_eq!(before, version_of(temp_dir.path()));
}

#[test]
fn test_existing_manifest_does_not_affect_version() {
    let temp_dir = TempDir::new().unwrap();
    sample_project(temp_dir.path());
    let before = version_of(temp_dir.path());

    generate(&config_for(temp_dir.path())).unwrap();

    assert_eq!(before, version_of(temp_dir.path()));
}

#[test]
fn test_file_list_sorted_without_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    sample_project(temp_dir.path());
    write_file(temp_dir.path(), "a-b.txt", b"1");
    write_file(temp_dir.path(), "a/b.txt", b"2");
    write_file(temp_dir.path(), "Z.txt", b"3");

    let (_, manifest) = build_manifest(&config_for(temp_dir.path())).unwrap();
    let paths: Vec<_> = manifest.files.iter().map(|f| f.path.clone()).collect();

    let mut sorted = paths.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(paths, sorted);
    assert!(paths.iter().all(|p| !p.contains('\\')));
}
