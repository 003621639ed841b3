//! End-to-end runs of the binary against temp data files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use folder_tree::data::{load_folders, save_folders};
use folder_tree::{Folder, default_org_id};
use tempfile::{TempDir, tempdir};
use uuid::Uuid;

fn fixture() -> (TempDir, std::path::PathBuf) {
    let td = tempdir().unwrap();
    let org = default_org_id();
    let folders = vec![
        Folder::new("alpha", org, "alpha"),
        Folder::new("bravo", org, "alpha.bravo"),
        Folder::new("charlie", org, "alpha.bravo.charlie"),
        Folder::new("delta", org, "alpha.delta"),
        Folder::new("foxtrot", Uuid::new_v4(), "foxtrot"),
    ];
    let path = td.path().join("folders.json");
    save_folders(&path, &folders).unwrap();
    (td, path)
}

fn run(cfg_dir: &Path, args: &[&str]) -> Output {
    let me = assert_cmd::cargo::cargo_bin!("folder_tree");
    Command::new(me)
        .env("FOLDER_TREE_CONFIG", cfg_dir.join("none.xml"))
        .args(args)
        .output()
        .expect("spawn binary")
}

#[test]
fn binary_print_config_succeeds() {
    let td = tempdir().unwrap();
    let out = run(td.path(), &["--print-config"]);
    assert!(out.status.success(), "binary should succeed with --print-config");
}

#[test]
fn children_prints_json() {
    let (td, data) = fixture();
    let out = run(td.path(), &["--data", data.to_str().unwrap(), "children", "alpha"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let got: Vec<Folder> = serde_json::from_slice(&out.stdout).unwrap();
    let names: Vec<_> = got.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["bravo", "charlie", "delta"]);
}

#[test]
fn list_text_format() {
    let (td, data) = fixture();
    let out = run(
        td.path(),
        &["--data", data.to_str().unwrap(), "--format", "text", "list"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.contains("charlie | alpha.bravo.charlie | "));
}

#[test]
fn rejected_move_exits_with_store_status() {
    let (td, data) = fixture();
    let out = run(td.path(), &["--data", data.to_str().unwrap(), "move", "bravo", "charlie"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("move into own subtree"));
}

#[test]
fn move_with_save_rewrites_file() {
    let (td, data) = fixture();
    let out = run(
        td.path(),
        &["--data", data.to_str().unwrap(), "move", "bravo", "delta", "--save"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let saved = load_folders(&data).unwrap();
    let charlie = saved.iter().find(|f| f.name == "charlie").unwrap();
    assert_eq!(charlie.paths, "alpha.delta.bravo.charlie");
}

#[test]
fn generate_writes_seeded_file() {
    let td = tempdir().unwrap();
    let target = td.path().join("gen.json");
    let out = run(
        td.path(),
        &["--seed", "5", "generate", "--out", target.to_str().unwrap()],
    );
    assert!(out.status.success());
    let written = load_folders(&target).unwrap();
    assert_eq!(written, folder_tree::sample::generate_seeded(5));
    assert!(fs::metadata(&target).unwrap().len() > 0);
}

#[test]
fn successful_move_reports_new_path() {
    let (td, data) = fixture();
    let out = run(td.path(), &["--data", data.to_str().unwrap(), "move", "bravo", "delta"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Moved bravo -> alpha.delta.bravo"));
}

// dirs resolves the data directory from XDG_DATA_HOME on Linux only.
#[cfg(target_os = "linux")]
#[test]
fn default_data_file_is_written_then_read_back() {
    let td = tempdir().unwrap();
    let xdg = td.path().join("xdg");
    let run_xdg = |args: &[&str]| {
        Command::new(assert_cmd::cargo::cargo_bin!("folder_tree"))
            .env("FOLDER_TREE_CONFIG", td.path().join("none.xml"))
            .env("XDG_DATA_HOME", &xdg)
            .args(args)
            .output()
            .expect("spawn binary")
    };

    let out = run_xdg(&["--seed", "5", "generate", "--save"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let default_file = xdg.join("folder_tree").join("sample.json");
    assert_eq!(load_folders(&default_file).unwrap(), folder_tree::sample::generate_seeded(5));

    // Replace the file so a read-back cannot be confused with regenerated data.
    let org = default_org_id();
    save_folders(&default_file, &[Folder::new("solo", org, "solo")]).unwrap();
    let out = run_xdg(&["--seed", "5", "list"]);
    assert!(out.status.success());
    let got: Vec<Folder> = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(got, [Folder::new("solo", org, "solo")]);

    let out = run_xdg(&["move", "solo", "solo", "--save"]);
    assert_eq!(out.status.code(), Some(2));
}
