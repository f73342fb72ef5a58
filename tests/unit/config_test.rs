//! Unit tests for config module

use lisible::rewrite::{Engine, SplitPolicy};
use lisible::{CefrLevel, Config, SimplificationRequest};
use std::fs;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.simplify.mode, "standard");
    assert_eq!(config.simplify.strategy, "auto");
    assert!(config.simplify.target.is_none());
    assert_eq!(config.simplify.engine, Engine::Rules);
    assert_eq!(config.simplify.split_policy, SplitPolicy::Comma);
    assert_eq!(config.llm.command, "ollama");
    assert!(config.llm.extra_args.is_empty());
    assert!(config.lexicon.frequency_file.is_none());
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.simplify.target = Some("B1".to_string());
    config.llm.extra_args = vec!["--verbose".to_string()];
    config.batch.workers = Some(4);

    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn optional_fields_are_not_serialized_when_unset() {
    let toml_str = toml::to_string(&Config::default()).unwrap();
    assert!(!toml_str.contains("target"));
    assert!(!toml_str.contains("frequency_file"));
    assert!(!toml_str.contains("workers"));
}

#[test]
fn engine_parses_from_toml() {
    let config: Config = toml::from_str("[simplify]\nengine = \"llm\"\n").unwrap();
    assert_eq!(config.simplify.engine, Engine::Llm);
    assert!(toml::from_str::<Config>("[simplify]\nengine = \"gpt\"\n").is_err());
}

#[test]
fn load_from_rejects_invalid_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[batch]\nworkers = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("batch.workers"));
}

#[test]
fn custom_lexicon_changes_estimates() {
    let temp = TempDir::new().unwrap();
    let table = temp.path().join("freq.tsv");
    fs::write(&table, "# tiny table\nlion\t1\nrugit\t1.5\n").unwrap();

    let mut config = Config::default();
    config.lexicon.frequency_file = Some(table.to_string_lossy().into_owned());
    let analyzer = config.build_analyzer().unwrap();

    let analysis = analyzer.analyze("Le chat dort. Le lion rugit.");
    let hard: Vec<&str> = analysis.hard_words().map(|w| w.form.as_str()).collect();
    assert_eq!(hard, vec!["lion", "rugit"]);
    assert!(analysis.word_difficulty.iter().any(|w| w.form == "chat"));
}

#[test]
fn malformed_lexicon_is_fatal() {
    let temp = TempDir::new().unwrap();
    let table = temp.path().join("freq.tsv");
    fs::write(&table, "chat\tbeaucoup\n").unwrap();

    let mut config = Config::default();
    config.lexicon.frequency_file = Some(table.to_string_lossy().into_owned());
    assert!(config.build_simplifier().is_err());
}

#[test]
fn built_simplifier_honours_split_policy() {
    let mut config = Config::default();
    config.simplify.split_policy = SplitPolicy::Punctuation;
    let simplifier = config.build_simplifier().unwrap();

    let request = SimplificationRequest::new(
        "Voici la liste des choses à faire demain : lire, écrire et compter.",
    )
    .target("A1");
    let result = simplifier.simplify(&request);
    assert_eq!(result.target_level, Some(CefrLevel::A1));
    assert!(result
        .simplified
        .starts_with("Voici la liste des choses à faire demain."));
}
