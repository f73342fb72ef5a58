//! Unit tests for tokenization and the frequency lexicon

use std::fs;
use std::io::Cursor;

use lisible::nlp::{
    FrequencyLexicon, Lexicon, LexiconError, RuleTokenizer, Tokenizer, ZipfLexicon, FLOOR_SCORE,
};
use tempfile::TempDir;

use crate::helpers::{load_fixture, pinned_lexicon};

#[test]
fn fixtures_round_trip_through_tokens() {
    for name in ["beginner.txt", "academic.txt", "school.txt"] {
        let text = load_fixture(name);
        let doc = RuleTokenizer::new().tokenize(&text);
        let rebuilt: String = doc.tokens.iter().map(|t| t.text_with_ws()).collect();
        assert_eq!(rebuilt, text, "{}", name);
    }
}

#[test]
fn sentence_texts_cover_every_fixture_sentence() {
    let doc = RuleTokenizer::new().tokenize(&load_fixture("academic.txt"));
    let sentences: Vec<&str> = doc.sentence_texts().collect();
    assert_eq!(sentences.len(), 2);
    assert!(sentences[0].starts_with("Cependant"));
    assert!(sentences[1].ends_with("éventualités."));
}

#[test]
fn french_model_knows_everyday_words() {
    let lexicon = ZipfLexicon::french().unwrap();
    for word in ["le", "chat", "matin", "école", "Pomme", "mangeons", "parlons"] {
        assert!(lexicon.frequency(word) >= 3.0, "{} should be common", word);
    }
    assert!(lexicon.frequency("dichotomie") < 3.0);
    assert_eq!(lexicon.frequency("zorglubxq"), FLOOR_SCORE);
}

#[test]
fn pinned_fixture_scores_override_the_model() {
    let lexicon = pinned_lexicon();
    assert!(lexicon.overrides().len() > 400);
    assert_eq!(lexicon.frequency("procéder"), 3.35);
    assert_eq!(lexicon.frequency("dichotomie"), 2.05);
}

#[test]
fn reader_skips_comments_and_clamps_scores() {
    let table = "# header\n\nchat\t4.8\nsoleil 9.5\nbrume\t-2\n";
    let lexicon = FrequencyLexicon::from_reader(Cursor::new(table)).unwrap();
    assert_eq!(lexicon.len(), 3);
    assert_eq!(lexicon.frequency("CHAT"), 4.8);
    assert_eq!(lexicon.frequency("soleil"), 7.0);
    assert_eq!(lexicon.frequency("brume"), 0.0);
}

#[test]
fn parse_error_reports_line_number() {
    match FrequencyLexicon::parse_str("chat\t4.8\nchien\n") {
        Err(LexiconError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn missing_file_is_an_io_error_naming_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.tsv");
    let err = FrequencyLexicon::from_path(&path).unwrap_err();
    assert!(matches!(err, LexiconError::Io { .. }));
    assert!(err.to_string().contains("absent.tsv"));
}

#[test]
fn file_table_matches_in_memory_table() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("freq.tsv");
    fs::write(&path, "maison\t5.2\nvélo\t4.1\n").unwrap();

    let from_file = FrequencyLexicon::from_path(&path).unwrap();
    let in_memory = FrequencyLexicon::from_pairs([("maison", 5.2), ("vélo", 4.1)]);
    for word in ["maison", "vélo", "train"] {
        assert_eq!(from_file.frequency(word), in_memory.frequency(word));
    }
}
