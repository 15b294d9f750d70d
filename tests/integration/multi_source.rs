// tests/integration/multi_source.rs
use predicates::prelude::*;

use crate::common::{coreutils, create_test_file, label};

#[test]
fn prints_total_for_two_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = create_test_file(dir.path(), "file1.txt", b"the quick brown fox\nJumps\n");
    let second = create_test_file(dir.path(), "file2.txt", b"over the lazy dog\nand then it\n");

    let expected = format!(
        "       2       5      26 {}\n       2       7      30 {}\n       4      12      56 total\n",
        label(&first),
        label(&second)
    );

    coreutils().arg("wc").arg(&first).arg(&second).assert().success().stdout(expected);
}

#[test]
fn unreadable_file_is_reported_and_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let present = create_test_file(dir.path(), "present.txt", b"Hello\nWorld\n");
    let missing = dir.path().join("missing.txt");

    let expected = format!(
        "       2       2      12 {}\n       2       2      12 total\n",
        label(&present)
    );

    coreutils()
        .arg("wc")
        .arg(&present)
        .arg(&missing)
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::starts_with(format!("wc: {}: ", label(&missing))));
}

#[test]
fn all_files_missing_prints_only_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");

    coreutils()
        .arg("wc")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(label(&a)).and(predicate::str::contains(label(&b))));
}

#[test]
fn single_missing_file_prints_no_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("gone");

    coreutils()
        .arg("wc")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wc: "));
}
