use assert_fs::prelude::*;
use std::process::{Command, Output};

fn run(temp: &assert_fs::TempDir, args: &[&std::ffi::OsStr]) -> Output {
    let me = assert_cmd::cargo::cargo_bin!("tidy_move");
    Command::new(me)
        .args(args)
        .current_dir(temp.path())
        .env_remove("TIDY_MOVE_CONFIG")
        // Keep discovery away from any real user config.
        .env("XDG_CONFIG_HOME", temp.child("xdg").path())
        .env("HOME", temp.child("home").path())
        .output()
        .expect("spawn binary")
}

fn os(s: &str) -> &std::ffi::OsStr {
    std::ffi::OsStr::new(s)
}

#[test]
fn missing_explicit_config_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    let out = run(&temp, &[os("--config"), os("/no/such/tidy_move.xml")]);
    assert!(!out.status.success(), "missing explicit config must fail");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ERROR"), "stderr was: {stderr}");
    assert!(stderr.contains("/no/such/tidy_move.xml"));
}

#[test]
fn malformed_config_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    let cfg = temp.child("broken.xml");
    cfg.write_str("<config><targets>").unwrap();

    let out = run(&temp, &[os("--config"), cfg.path().as_os_str()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Malformed config file"), "stderr was: {stderr}");
}

#[test]
fn config_without_targets_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    let cfg = temp.child("empty.xml");
    cfg.write_str("<config><defaults/></config>").unwrap();

    let out = run(&temp, &[os("--config"), cfg.path().as_os_str()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no <targets>"), "stderr was: {stderr}");
}

#[test]
fn print_config_exits_cleanly() {
    let temp = assert_fs::TempDir::new().unwrap();
    let out = run(&temp, &[os("--print-config")]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("tidy_move.xml"), "stdout was: {stdout}");
}

#[test]
fn print_config_reports_the_env_override() {
    let temp = assert_fs::TempDir::new().unwrap();
    let me = assert_cmd::cargo::cargo_bin!("tidy_move");
    let out = Command::new(me)
        .arg("--print-config")
        .current_dir(temp.path())
        .env("TIDY_MOVE_CONFIG", temp.child("special.xml").path())
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("TIDY_MOVE_CONFIG"), "stdout was: {stdout}");
    assert!(stdout.contains("special.xml"), "stdout was: {stdout}");
}

#[test]
fn config_driven_run_moves_matching_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("in");
    src.create_dir_all().unwrap();
    src.child("logs/app.log").write_str("log line").unwrap();
    src.child("readme.md").write_str("docs").unwrap();
    let dst = temp.child("out");

    let cfg = temp.child("tidy.xml");
    cfg.write_str(&format!(
        r#"<!-- test config -->
<config>
  <defaults>
    <include_extensions>log</include_extensions>
    <preserve_structure>true</preserve_structure>
  </defaults>
  <targets>
    <target>
      <source_dir>{}</source_dir>
      <destination_dir>{}</destination_dir>
      <mode>move</mode>
    </target>
  </targets>
</config>"#,
        src.path().display(),
        dst.path().display()
    ))
    .unwrap();

    let out = run(
        &temp,
        &[
            os("--config"),
            cfg.path().as_os_str(),
            os("--log-level"),
            os("info"),
        ],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("DONE"), "stdout was: {stdout}");
    // At verbose levels, filtered-out files get a per-file SKIP line.
    assert!(stdout.contains("SKIP"), "stdout was: {stdout}");
    assert!(stdout.contains("readme.md"), "stdout was: {stdout}");

    assert!(dst.child("logs/app.log").path().exists());
    assert!(!src.child("logs/app.log").path().exists());
    assert!(src.child("readme.md").path().exists());
    assert!(!dst.child("readme.md").path().exists());
}

#[test]
fn dry_run_flag_forces_preview_over_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("in");
    src.create_dir_all().unwrap();
    src.child("a.txt").write_str("a").unwrap();
    let dst = temp.child("out");

    let cfg = temp.child("tidy.xml");
    cfg.write_str(&format!(
        r#"<config>
  <targets>
    <target>
      <source_dir>{}</source_dir>
      <destination_dir>{}</destination_dir>
      <mode>move</mode>
    </target>
  </targets>
</config>"#,
        src.path().display(),
        dst.path().display()
    ))
    .unwrap();

    let out = run(
        &temp,
        &[os("--config"), cfg.path().as_os_str(), os("--dry-run")],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("DRYRUN"), "stdout was: {stdout}");

    assert!(src.child("a.txt").path().exists());
    assert!(!dst.path().exists());
}

#[test]
fn legacy_positional_invocation_copies_txt_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("in");
    src.create_dir_all().unwrap();
    src.child("keep.txt").write_str("keep").unwrap();
    src.child("skip.bin").write_str("skip").unwrap();
    let dst = temp.child("out");

    let out = run(
        &temp,
        &[
            src.path().as_os_str(),
            dst.path().as_os_str(),
            os("copy"),
        ],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    assert!(dst.child("keep.txt").path().exists());
    assert!(!dst.child("skip.bin").path().exists());
    assert!(src.child("keep.txt").path().exists());
}
