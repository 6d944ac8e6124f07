//! These tests are mostly here just to ensure that invalid arguments will
//! be caught when passing them.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::hoststats_command;

#[test]
fn test_unknown_flag() {
    hoststats_command(&["--nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_file_flag_requires_a_value() {
    hoststats_command(&["--file"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn test_version() {
    hoststats_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hoststats"));
}

#[test]
fn test_help() {
    hoststats_command(&["-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metrics"));
}
