// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::{coreutils, create_test_file, label};

#[test]
fn counts_single_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = create_test_file(dir.path(), "test.txt", b"Hello World\nThis is a test\nThird line");

    coreutils()
        .arg("wc")
        .arg(&file)
        .assert()
        .success()
        .stdout(format!("       2       7      38 {}\n", label(&file)));
}

#[test]
fn counts_stdin_when_no_files() {
    coreutils()
        .arg("wc")
        .write_stdin("Hello\nWorld\n")
        .assert()
        .success()
        .stdout("       2       2      12\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_stdin() {
    coreutils()
        .arg("wc")
        .write_stdin("")
        .assert()
        .success()
        .stdout("       0       0       0\n");
}

#[test]
fn command_name_is_case_insensitive() {
    coreutils()
        .args(["WC", "-l"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout("       3\n");
}

#[test]
fn chars_flag_reports_bytes() {
    // two-byte UTF-8 character, still counted per byte
    coreutils()
        .args(["wc", "-m"])
        .write_stdin("é\n")
        .assert()
        .success()
        .stdout("       3\n");
}

#[test]
fn selected_fields_keep_fixed_order() {
    coreutils()
        .args(["wc", "-c", "-l"])
        .write_stdin("one two\n")
        .assert()
        .success()
        .stdout("       1       8\n");
}

#[cfg(target_os = "linux")]
#[test]
fn counts_file_with_non_utf8_name() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let name = std::ffi::OsStr::from_bytes(b"caf\xe9.txt");
    let file = dir.path().join(name);
    std::fs::write(&file, b"hello\n").expect("write non-UTF-8 named file");

    coreutils()
        .arg("wc")
        .arg(&file)
        .assert()
        .success()
        .stdout(format!("       1       1       6 {}\n", label(&file)))
        .stderr(predicate::str::is_empty());
}
