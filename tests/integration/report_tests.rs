//! End-to-end runs against the real `/proc`, so these only run on Linux.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::hoststats_command;

const TIMESTAMP_PATTERN: &str = r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}";

fn line_pattern(fields: &str) -> String {
    format!("^{TIMESTAMP_PATTERN} {fields}\n$")
}

#[test]
fn test_default_run_reports_all_metrics_in_order() {
    hoststats_command(&[])
        .assert()
        .success()
        .stdout(predicate::str::is_match(line_pattern(
            r"cpu_usage:\d+\.\d% mem_usage:\d+MB proc_quantity:\d+",
        ))
        .unwrap());
}

#[test]
fn test_memory_only_run_reports_a_single_field() {
    hoststats_command(&["--memory"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(line_pattern(r"mem_usage:\d+MB")).unwrap());
}

#[test]
fn test_process_and_memory_run_keeps_report_order() {
    hoststats_command(&["-p", "-m"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(line_pattern(r"mem_usage:\d+MB proc_quantity:\d+")).unwrap(),
        );
}

#[test]
fn test_file_flag_appends_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.txt");
    let path_arg = path.to_str().unwrap();

    for _ in 0..2 {
        hoststats_command(&["-p", "-f", path_arg]).assert().success();
    }

    let contents = fs::read_to_string(&path).unwrap();
    let line_matcher =
        predicate::str::is_match(format!("^{TIMESTAMP_PATTERN} proc_quantity:\\d+$")).unwrap();

    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert!(line_matcher.eval(line), "unexpected report line: {line}");
    }
    assert!(contents.ends_with('\n'));
}
