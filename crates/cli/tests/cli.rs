use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn pathstat<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_pathstat"))
        .args(args)
        .output()
        .expect("run pathstat binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn no_operands_prints_usage_and_exits_einval() {
    let out = pathstat::<_, &str>([]);

    assert_eq!(out.status.code(), Some(22), "expected EINVAL exit");
    assert!(stdout(&out).is_empty(), "no report lines expected");

    let err = stderr(&out);
    assert!(err.contains("no paths provided"), "stderr was: {err}");
    assert!(err.contains("Usage"), "stderr was: {err}");
}

#[test]
fn help_flag_exits_success() {
    let out = pathstat(["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("--dereference"));
}

#[test]
fn unknown_flag_is_rejected() {
    let out = pathstat(["--no-such-flag", "/"]);
    assert_ne!(out.status.code(), Some(0));
    assert!(stdout(&out).is_empty());
}

#[test]
fn regular_file_report_names_size_and_type() {
    let tmp = tempdir().expect("create temp dir");
    let path = tmp.path().join("data.bin");
    fs::write(&path, vec![0u8; 1024]).expect("write file");

    let out = pathstat([path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));

    let text = stdout(&out);
    assert!(text.contains("Size: 1024"), "report was:\n{text}");
    assert!(text.contains("regular file"), "report was:\n{text}");
    assert!(
        text.starts_with(&format!("  File: `{}'\n", path.display())),
        "report was:\n{text}"
    );
}

#[test]
fn directory_mode_0755_renders_expected_access_line() {
    let tmp = tempdir().expect("create temp dir");
    let dir = tmp.path().join("subdir");
    fs::create_dir(&dir).expect("create dir");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("chmod dir");

    let out = pathstat([dir.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));

    let text = stdout(&out);
    assert!(
        text.contains("Access: (0755/drwxr-xr-x)"),
        "report was:\n{text}"
    );
    assert!(text.contains("directory"), "report was:\n{text}");
}

#[test]
fn symlink_without_dereference_shows_arrow() {
    let tmp = tempdir().expect("create temp dir");
    let target = tmp.path().join("target.txt");
    fs::write(&target, b"hello").expect("write target");
    let link = tmp.path().join("link");
    symlink(&target, &link).expect("create symlink");

    let out = pathstat([link.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));

    let text = stdout(&out);
    assert!(
        text.starts_with(&format!(
            "  File: `{}' -> `{}'\n",
            link.display(),
            target.display()
        )),
        "report was:\n{text}"
    );
    assert!(text.contains("symbolic link"), "report was:\n{text}");
}

#[test]
fn symlink_with_dereference_reports_the_target() {
    let tmp = tempdir().expect("create temp dir");
    let target = tmp.path().join("target.txt");
    fs::write(&target, b"hello").expect("write target");
    let link = tmp.path().join("link");
    symlink(&target, &link).expect("create symlink");

    let out = pathstat(["-L", link.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));

    let text = stdout(&out);
    assert!(!text.contains("->"), "report was:\n{text}");
    assert!(text.contains("regular file"), "report was:\n{text}");
    assert!(text.contains("Size: 5"), "report was:\n{text}");
}

#[test]
fn missing_path_reports_enoent_and_no_block() {
    let tmp = tempdir().expect("create temp dir");
    let missing = tmp.path().join("no-such-file");

    let out = pathstat([missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2), "expected ENOENT exit");
    assert!(stdout(&out).is_empty());
    assert!(
        stderr(&out).contains(missing.to_str().unwrap()),
        "diagnostic should name the path, was: {}",
        stderr(&out)
    );
}

#[test]
fn run_stops_at_the_first_failed_lookup() {
    let tmp = tempdir().expect("create temp dir");
    let first = tmp.path().join("first.txt");
    fs::write(&first, b"a").expect("write first");
    let missing = tmp.path().join("gone");
    let last = tmp.path().join("last.txt");
    fs::write(&last, b"b").expect("write last");

    let out = pathstat([
        first.to_str().unwrap(),
        missing.to_str().unwrap(),
        last.to_str().unwrap(),
    ]);

    assert_eq!(out.status.code(), Some(2), "expected ENOENT exit");

    // The path before the failure is reported; the one after is not.
    let text = stdout(&out);
    assert!(text.contains(first.to_str().unwrap()), "stdout was:\n{text}");
    assert!(!text.contains(last.to_str().unwrap()), "stdout was:\n{text}");
}

#[test]
fn multiple_paths_print_in_argument_order() {
    let tmp = tempdir().expect("create temp dir");
    let a = tmp.path().join("a.txt");
    let b = tmp.path().join("b.txt");
    fs::write(&a, b"a").expect("write a");
    fs::write(&b, b"b").expect("write b");

    let out = pathstat([a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));

    let text = stdout(&out);
    let pos_a = text.find(a.to_str().unwrap()).expect("report for a");
    let pos_b = text.find(b.to_str().unwrap()).expect("report for b");
    assert!(pos_a < pos_b, "reports out of order:\n{text}");
}

#[test]
fn report_block_has_the_fixed_line_layout() {
    let out = pathstat(["/"]);
    assert_eq!(out.status.code(), Some(0));

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7, "report was:\n{text}");
    assert!(lines[0].starts_with("  File: "));
    assert!(lines[1].starts_with("  Size: "));
    assert!(lines[2].starts_with("Device: "));
    assert!(lines[3].starts_with("Access: ("));
    assert!(lines[4].starts_with("Access: "));
    assert!(lines[5].starts_with("Modify: "));
    assert!(lines[6].starts_with("Change: "));
    assert!(Path::new("/").is_dir() && text.contains("directory"));
}
