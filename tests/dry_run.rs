use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use tidy_move::{Mode, TargetSpec, engine};
use walkdir::WalkDir;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn snapshot(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.path().to_path_buf())
        .collect()
}

#[test]
fn dry_run_never_mutates_the_filesystem() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    let dst = td.path().join("dst");
    write(&src.join("a.txt"), "a");
    write(&src.join("sub").join("b.txt"), "b");
    // Destination does not exist yet; even its root must stay uncreated.

    let before = snapshot(td.path());

    let mut spec = TargetSpec::new(&src, &dst, Mode::Move);
    spec.dry_run = true;
    let summary = engine::process_target(&spec).unwrap();

    assert_eq!(summary.previewed, 2);
    assert_eq!(summary.moved, 0);
    assert_eq!(before, snapshot(td.path()), "dry-run changed the filesystem");
}

#[test]
fn dry_run_previews_are_collision_consistent() {
    // Two sources flattening to the same name must preview two distinct
    // destinations, even though neither is ever written.
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    let dst = td.path().join("dst");
    write(&src.join("x").join("same.txt"), "1");
    write(&src.join("y").join("same.txt"), "2");

    let mut spec = TargetSpec::new(&src, &dst, Mode::Copy);
    spec.preserve_structure = false;
    spec.dry_run = true;
    let summary = engine::process_target(&spec).unwrap();

    assert_eq!(summary.previewed, 2);
    assert_eq!(summary.failed, 0);
    assert!(!dst.exists());
}
