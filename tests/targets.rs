use std::fs;
use std::path::Path;
use tempfile::tempdir;
use tidy_move::{Mode, RunConfig, TargetEntry, TargetSpec, engine};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn disabled_target_performs_zero_filesystem_operations() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    let dst = td.path().join("dst");
    write(&src.join("a.txt"), "a");

    let mut spec = TargetSpec::new(&src, &dst, Mode::Move);
    spec.enabled = false;
    let cfg = RunConfig {
        targets: vec![TargetEntry::Resolved(spec)],
        ..Default::default()
    };

    let summary = engine::run_targets(&cfg);
    assert_eq!(summary.targets_skipped, 1);
    assert!(summary.targets.is_empty());
    assert!(src.join("a.txt").exists());
    assert!(!dst.exists());
}

#[test]
fn run_continues_past_broken_targets() {
    let td = tempdir().unwrap();
    let good_src = td.path().join("good");
    let good_dst = td.path().join("good_out");
    write(&good_src.join("a.txt"), "a");

    let cfg = RunConfig {
        targets: vec![
            TargetEntry::Invalid {
                index: 0,
                reason: "missing <source_dir>".to_string(),
            },
            TargetEntry::Resolved(TargetSpec::new(
                td.path().join("does_not_exist"),
                td.path().join("never_made"),
                Mode::Copy,
            )),
            TargetEntry::Resolved(TargetSpec::new(&good_src, &good_dst, Mode::Copy)),
        ],
        ..Default::default()
    };

    let summary = engine::run_targets(&cfg);
    assert_eq!(summary.targets_skipped, 2);
    assert_eq!(summary.targets.len(), 1);
    assert_eq!(summary.targets[0].copied, 1);
    assert!(good_dst.join("a.txt").exists());
    assert!(!td.path().join("never_made").exists());
}

#[test]
fn targets_are_processed_in_order() {
    // The second target picks up what the first one dropped off.
    let td = tempdir().unwrap();
    let stage1 = td.path().join("inbox");
    let stage2 = td.path().join("staging");
    let stage3 = td.path().join("archive");
    write(&stage1.join("doc.txt"), "payload");

    let cfg = RunConfig {
        targets: vec![
            TargetEntry::Resolved(TargetSpec::new(&stage1, &stage2, Mode::Move)),
            TargetEntry::Resolved(TargetSpec::new(&stage2, &stage3, Mode::Move)),
        ],
        ..Default::default()
    };

    let summary = engine::run_targets(&cfg);
    assert_eq!(summary.targets.len(), 2);
    assert!(stage3.join("doc.txt").exists());
    assert!(!stage1.join("doc.txt").exists());
    assert!(!stage2.join("doc.txt").exists());
}
