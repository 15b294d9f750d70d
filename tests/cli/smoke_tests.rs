use predicates::prelude::*;

use crate::common::coreutils;

#[test]
fn shows_command_listing_without_arguments() {
    coreutils()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Available commands:"))
        .stdout(predicate::str::contains("wc"));
}

#[test]
fn unknown_command_fails_with_listing() {
    coreutils()
        .arg("frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown command: frobnicate"))
        .stdout(predicate::str::contains(
            "wc         Print newline, word, and byte counts for each file",
        ));
}

#[test]
fn wc_help() {
    coreutils()
        .args(["wc", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wc [OPTIONS] [FILE]..."));
}

#[test]
fn wc_rejects_unknown_flag() {
    coreutils()
        .args(["wc", "-z"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("-z"));
}
