use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const MALFORMED: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2\n";
const DUPLICATED: &str = "v 0 0 0\nv 0 0 0\nv 1 0 0\nf 1 2 3\n";

fn objweld(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_objweld"))
        .args(args)
        .env("OBJWELD_LOG_FILTER", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn welds_stdin_to_stdout() {
    let out = objweld(&[], DUPLICATED);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "v 0 0 0\nv 1 0 0\n\nf 1 1 2\n"
    );
}

#[test]
fn welds_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.obj");
    let output = dir.path().join("out.obj");
    fs::write(&input, DUPLICATED).unwrap();

    let out = objweld(&["-o", path_arg(&output), path_arg(&input)], "");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "v 0 0 0\nv 1 0 0\n\nf 1 1 2\n"
    );
}

#[test]
fn failure_leaves_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.obj");
    let output = dir.path().join("out.obj");
    fs::write(&input, MALFORMED).unwrap();
    fs::write(&output, "previous contents\n").unwrap();

    let out = objweld(&["-o", path_arg(&output), path_arg(&input)], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous contents\n");
}

#[test]
fn failure_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.obj");

    let out = objweld(&["-o", path_arg(&output), "-"], MALFORMED);
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn failure_writes_nothing_to_stdout() {
    let out = objweld(&[], MALFORMED);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.obj");

    let out = objweld(&[path_arg(&input)], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}
