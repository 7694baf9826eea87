// tests/cli.rs — End-to-end runs of the icongen binary
//
// Each test gets its own scratch directory under the system temp dir and runs
// the binary with that directory as the working directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CATALOG: &str = r#"[
    {"id": 1006412, "file": "1006412.png"},
    {"id": 21934, "file": "21934.png"},
    {"id": 7, "file": "7_64_15.png", "name": "ignored"},
    {"id": 1, "file": "icon_42_logo.png"}
]"#;

const EXPECTED: &str = "// auto-generated
package icons

import \"fyne.io/fyne/v2\"

var id2fileMap = map[int32]*fyne.StaticResource{
\t1006412: resource1006412Png,
\t7: resource76415Png,
\t1: resourceicon42logoPng,
}
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("icongen-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_icongen"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to launch icongen")
}

#[test]
fn test_default_paths_write_mapping_file() {
    let dir = scratch_dir("defaults");
    fs::write(dir.join("icons.json"), CATALOG).unwrap();

    let out = run_in(&dir, &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());
    assert_eq!(fs::read_to_string(dir.join("mapping.go")).unwrap(), EXPECTED);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_explicit_paths() {
    let dir = scratch_dir("explicit");
    fs::create_dir_all(dir.join("gen")).unwrap();
    fs::write(dir.join("catalog.json"), CATALOG).unwrap();

    let out = run_in(&dir, &["catalog.json", "gen/icons_map.go"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(dir.join("gen/icons_map.go")).unwrap(), EXPECTED);
    assert!(!dir.join("mapping.go").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_stdout_mode() {
    let dir = scratch_dir("stdout");
    fs::write(dir.join("icons.json"), CATALOG).unwrap();

    let out = run_in(&dir, &["icons.json", "-"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), EXPECTED);
    assert!(!dir.join("mapping.go").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_excluded_id_has_no_line() {
    let dir = scratch_dir("excluded");
    fs::write(dir.join("icons.json"), CATALOG).unwrap();

    let out = run_in(&dir, &["icons.json", "-"]);
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(!text.contains("21934"));

    let entry_lines = text.lines().filter(|l| l.starts_with('\t')).count();
    assert_eq!(entry_lines, 3);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_runs_are_byte_identical() {
    let dir = scratch_dir("idempotent");
    fs::write(dir.join("icons.json"), CATALOG).unwrap();

    assert!(run_in(&dir, &[]).status.success());
    let first = fs::read(dir.join("mapping.go")).unwrap();
    assert!(run_in(&dir, &[]).status.success());
    let second = fs::read(dir.join("mapping.go")).unwrap();
    assert_eq!(first, second);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_id_fails_without_output() {
    let dir = scratch_dir("missing-id");
    fs::write(dir.join("icons.json"), r#"[{"file": "x.png"}]"#).unwrap();

    let out = run_in(&dir, &[]);
    assert!(!out.status.success());
    assert!(!dir.join("mapping.go").exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("record #0"));

    let out = run_in(&dir, &["icons.json", "-"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_malformed_json_fails_without_output() {
    let dir = scratch_dir("malformed");
    fs::write(dir.join("icons.json"), r#"[{"id": 1, "file": "1.png"}"#).unwrap();

    let out = run_in(&dir, &["icons.json", "-"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let out = run_in(&dir, &[]);
    assert!(!out.status.success());
    assert!(!dir.join("mapping.go").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_catalog_fails() {
    let dir = scratch_dir("no-catalog");

    let out = run_in(&dir, &[]);
    assert!(!out.status.success());
    assert!(!dir.join("mapping.go").exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("icons.json"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_failure_keeps_previous_output() {
    let dir = scratch_dir("keep-previous");
    fs::write(dir.join("mapping.go"), "previous\n").unwrap();
    fs::write(dir.join("icons.json"), r#"[{"id": "nope", "file": "x.png"}]"#).unwrap();

    let out = run_in(&dir, &[]);
    assert!(!out.status.success());
    assert_eq!(fs::read_to_string(dir.join("mapping.go")).unwrap(), "previous\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_unwritable_destination_fails() {
    let dir = scratch_dir("no-out-dir");
    fs::write(dir.join("icons.json"), CATALOG).unwrap();

    let out = run_in(&dir, &["icons.json", "missing/dir/mapping.go"]);
    assert!(!out.status.success());
    assert!(!dir.join("missing").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_help_and_bad_args() {
    let dir = scratch_dir("args");

    let out = run_in(&dir, &["--help"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage: icongen"));

    let out = run_in(&dir, &["a.json", "b.go", "c.go"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage: icongen"));

    let _ = fs::remove_dir_all(&dir);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_catalog_path() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = scratch_dir("non-utf8-path");
    let name = OsString::from_vec(b"ic\xffons.json".to_vec());
    fs::write(dir.join(&name), CATALOG).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_icongen"))
        .arg(&name)
        .arg("-")
        .current_dir(&dir)
        .output()
        .expect("failed to launch icongen");
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), EXPECTED);

    let missing = OsString::from_vec(b"gone\xfe.json".to_vec());
    let out = Command::new(env!("CARGO_BIN_EXE_icongen"))
        .arg(&missing)
        .current_dir(&dir)
        .output()
        .expect("failed to launch icongen");
    assert_eq!(out.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&out.stderr).contains("panicked"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_captured_stderr_has_plain_text() {
    let dir = scratch_dir("plain-stderr");

    let out = Command::new(env!("CARGO_BIN_EXE_icongen"))
        .current_dir(&dir)
        .env("TERM", "xterm-256color")
        .output()
        .expect("failed to launch icongen");
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot read icon catalog icons.json"));
    assert!(!stderr.contains('\u{1b}'), "escape codes in: {:?}", stderr);

    let _ = fs::remove_dir_all(&dir);
}
