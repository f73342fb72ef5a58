//! `lisible batch` end to end

use predicates::prelude::*;
use serde_json::Value;

use crate::helpers::{fixture, lisible, pinned_home, temp_home};

fn json_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

#[test]
fn results_follow_input_order() {
    let home = pinned_home();
    let names = ["academic.txt", "beginner.txt", "school.txt", "academic.txt"];
    let output = lisible(home.path())
        .args(["batch", "--workers", "3"])
        .args(names.iter().map(|n| fixture(n)))
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    assert_eq!(lines.len(), names.len());
    for (line, name) in lines.iter().zip(names) {
        assert!(line["file"].as_str().unwrap().ends_with(name));
    }
    assert_eq!(lines[0]["result"], lines[3]["result"]);
    assert_eq!(lines[1]["result"]["target_level"], "A1");
}

#[test]
fn unreadable_file_gets_an_error_line() {
    let home = temp_home();
    let output = lisible(home.path())
        .arg("batch")
        .arg(fixture("beginner.txt"))
        .arg(home.path().join("missing.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    assert_eq!(lines.len(), 2);
    assert!(lines[0]["result"].is_object());
    assert!(lines[1]["error"].is_string());
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 of 2 files could not be read"));
}

#[test]
fn shared_options_apply_to_every_file() {
    let home = temp_home();
    let output = lisible(home.path())
        .args(["batch", "-t", "C1"])
        .arg(fixture("school.txt"))
        .arg(fixture("beginner.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    for line in json_lines(&output.stdout) {
        assert_eq!(line["result"]["target_level"], "C1");
        assert_eq!(line["result"]["mode"], "light");
    }
}

#[test]
fn at_least_one_file_is_required() {
    let home = temp_home();
    lisible(home.path())
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
