//! `lisible simplify` end to end

use predicates::prelude::*;

use crate::helpers::{fixture, lisible, pinned_home, stdout_json, temp_home, EXAMPLE};

#[test]
fn stdin_to_a1_prints_text_and_rationale() {
    let home = pinned_home();
    lisible(home.path())
        .args(["simplify", "--target", "A1"])
        .write_stdin(EXAMPLE)
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Mais")
                .and(predicate::str::contains("faire"))
                .and(predicate::str::contains("il est impératif de").not()),
        )
        .stderr(predicate::str::contains("Simplification vers A1. (Rule-based)"));
}

#[test]
fn file_input_with_c1_target_elevates() {
    let home = temp_home();
    lisible(home.path())
        .args(["simplify", "-t", "C1"])
        .arg(fixture("school.txt"))
        .assert()
        .success()
        .stdout("Le matin, je me rends à l'école avec mon frère.\n");
}

#[test]
fn dash_reads_stdin() {
    let home = temp_home();
    lisible(home.path())
        .args(["simplify", "-"])
        .write_stdin("Le chat dort.")
        .assert()
        .success()
        .stdout("Le chat dort.\n")
        .stderr(predicate::str::contains("Mode automatique : détecté A1 -> cible A1."));
}

#[test]
fn json_output_carries_both_analyses() {
    let home = pinned_home();
    let output = lisible(home.path())
        .args(["simplify", "--json"])
        .arg(fixture("academic.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["strategy"], "auto");
    assert_eq!(json["mode"], "standard");
    assert_eq!(json["target_level"], "B2");
    assert_eq!(json["max_len"], 22);
    assert_eq!(json["analysis_original"]["estimated_level"], "C1");
    assert!(json["analysis_simplified"]["word_difficulty"].is_array());
    assert!(json["stages"].is_array());
}

#[test]
fn blank_input_gives_the_empty_result() {
    let home = temp_home();
    let output = lisible(home.path())
        .args(["simplify", "--json", "--target", "B1"])
        .write_stdin("   \n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["simplified"], "");
    assert_eq!(json["strategy_explanation"], "Empty text.");
    assert!(json["analysis_original"].is_null());
}

#[test]
fn verbose_adds_levels_and_stages() {
    let home = temp_home();
    lisible(home.path())
        .args(["simplify", "-v", "--target", "A1"])
        .write_stdin(EXAMPLE)
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Level: ")
                .and(predicate::str::contains("Stages: connectors -> patterns -> phrasal")),
        );
}

#[test]
fn missing_input_file_fails() {
    let home = temp_home();
    lisible(home.path())
        .args(["simplify", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn config_defaults_apply_when_flags_are_absent() {
    let home = temp_home();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[simplify]\nstrategy = \"target\"\ntarget = \"C1\"\n").unwrap();

    lisible(home.path())
        .args(["simplify", "--config"])
        .arg(&config)
        .arg(fixture("school.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("je me rends"))
        .stderr(predicate::str::contains("Simplification vers C1 (style soutenu)."));
}
