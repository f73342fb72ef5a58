//! `lisible analyze` end to end

use predicates::prelude::*;

use crate::helpers::{fixture, lisible, pinned_home, stdout_json, temp_home};

#[test]
fn report_for_beginner_text() {
    let home = pinned_home();
    lisible(home.path())
        .arg("analyze")
        .arg(fixture("beginner.txt"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level:       A1 (band A1-A2)")
                .and(predicate::str::contains("Sentences:   3")),
        );
}

#[test]
fn report_lists_hard_words() {
    let home = pinned_home();
    lisible(home.path())
        .arg("analyze")
        .arg(fixture("academic.txt"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level:       C1")
                .and(predicate::str::contains("Hardest words:"))
                .and(predicate::str::contains("dichotomie")),
        );
}

#[test]
fn json_report_uses_field_names() {
    let home = temp_home();
    let output = lisible(home.path())
        .args(["analyze", "--json"])
        .write_stdin("Le chat dort. Il fait beau.")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["estimated_level"], "A1");
    assert_eq!(json["sentences"], 2);
    assert_eq!(json["level_band"], serde_json::json!(["A1", "A2"]));
}

#[test]
fn empty_input_reports_a1() {
    let home = temp_home();
    let output = lisible(home.path())
        .args(["analyze", "--json"])
        .write_stdin("")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["tokens"], 0);
}

#[test]
fn custom_frequency_file_is_used() {
    let home = temp_home();
    let table = home.path().join("freq.tsv");
    std::fs::write(&table, "chat\t1\n").unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(
        &config,
        format!("[lexicon]\nfrequency_file = {:?}\n", table.display().to_string()),
    )
    .unwrap();

    let output = lisible(home.path())
        .args(["analyze", "--json", "--config"])
        .arg(&config)
        .write_stdin("Le chat est là.")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let hard: Vec<&str> = json["word_difficulty"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["difficulty"] == "hard")
        .map(|e| e["form"].as_str().unwrap())
        .collect();
    assert_eq!(hard, vec!["chat"]);
}

#[test]
fn everyday_text_is_rated_beginner_by_the_model() {
    let home = temp_home();
    let output = lisible(home.path())
        .args(["analyze", "--json"])
        .write_stdin(
            "Les enfants jouent dans le jardin. Ma mère regarde les voitures dans la rue. \
             Nous parlons de nos maisons.",
        )
        .output()
        .unwrap();
    assert!(output.status.success());

    let level = stdout_json(&output)["estimated_level"].as_str().unwrap().to_string();
    assert!(level == "A1" || level == "A2", "got {}", level);
}

#[test]
fn unreadable_frequency_file_is_fatal() {
    let home = temp_home();
    let config = home.path().join("config.toml");
    std::fs::write(&config, "[lexicon]\nfrequency_file = \"/nonexistent/freq.tsv\"\n").unwrap();

    lisible(home.path())
        .args(["analyze", "--config"])
        .arg(&config)
        .write_stdin("Le chat dort.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frequency file"));
}
