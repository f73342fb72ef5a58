//! Unit tests for difficulty classification and level estimation

use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

use lisible::analysis::{
    classify_word, estimate_level, Difficulty, TextAnalyzer, TextMetrics,
};
use lisible::nlp::FrequencyLexicon;
use lisible::CefrLevel;

use crate::helpers::{analyzer_with, load_fixture, pinned_analyzer, FlatLexicon, SilentTokenizer};

fn metrics(tokens: usize, avg: f64, ratio: f64) -> TextMetrics {
    TextMetrics {
        sentences: 1,
        tokens,
        avg_sentence_length: avg,
        hard_ratio: ratio,
    }
}

#[test]
fn no_tokens_means_a1_and_no_words() {
    let analyzer = TextAnalyzer::new(Arc::new(SilentTokenizer), Arc::new(FlatLexicon(1.0)));
    let analysis = analyzer.analyze("Du texte que personne ne découpe.");
    assert_eq!(analysis.token_count, 0);
    assert_eq!(analysis.estimated_level, CefrLevel::A1);
    assert!(analysis.word_difficulty.is_empty());
    assert_eq!(analysis.explanation, "Texte vide ou presque vide.");
}

#[test]
fn bucket_depends_only_on_score() {
    for (score, expected) in [
        (7.0, Difficulty::Easy),
        (4.0, Difficulty::Easy),
        (3.999, Difficulty::Medium),
        (3.0, Difficulty::Medium),
        (2.999, Difficulty::Hard),
        (0.0, Difficulty::Hard),
    ] {
        assert_eq!(classify_word("mot", &FlatLexicon(score)), expected, "score {}", score);
    }
}

#[test]
fn unknown_word_is_hard() {
    let lexicon = FrequencyLexicon::from_pairs([("chat", 5.0)]);
    assert_eq!(classify_word("zorglub", &lexicon), Difficulty::Hard);
}

#[test]
fn word_list_is_hard_first_then_by_count() {
    let analyzer = analyzer_with(&[
        ("le", 7.0),
        ("chat", 3.5),
        ("voit", 5.0),
        ("rare", 3.2),
    ]);
    let analysis = analyzer.analyze("Le chat voit le zèbre. Le chat voit le rare gnou. Le gnou rare.");
    let order: Vec<(&str, Difficulty, usize)> = analysis
        .word_difficulty
        .iter()
        .map(|e| (e.form.as_str(), e.difficulty, e.count))
        .collect();

    let rank = |d: Difficulty| match d {
        Difficulty::Hard => 0,
        Difficulty::Medium => 1,
        Difficulty::Easy => 2,
    };
    for pair in order.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(rank(a.1) <= rank(b.1), "{:?} before {:?}", a, b);
        if a.1 == b.1 {
            assert!(a.2 >= b.2, "{:?} before {:?}", a, b);
        }
    }
    assert_eq!(order[0], ("gnou", Difficulty::Hard, 2));
    assert_eq!(order[1], ("zèbre", Difficulty::Hard, 1));
}

#[test]
fn surface_forms_are_case_sensitive() {
    let analyzer = analyzer_with(&[("le", 7.0)]);
    let analysis = analyzer.analyze("Le chien et le chat.");
    let forms: Vec<&str> = analysis.word_difficulty.iter().map(|e| e.form.as_str()).collect();
    assert!(forms.contains(&"Le"));
    assert!(forms.contains(&"le"));
    let upper = analysis.word_difficulty.iter().find(|e| e.form == "Le").unwrap();
    assert_eq!(upper.lemma, "le");
}

#[test]
fn length_alone_escalates_to_c1() {
    assert_eq!(estimate_level(&metrics(50, 25.0, 0.0)).level, CefrLevel::C1);
}

#[test]
fn ratio_alone_escalates_to_c1() {
    assert_eq!(estimate_level(&metrics(50, 5.0, 0.20)).level, CefrLevel::C1);
}

#[test]
fn ladder_tiers_and_bands() {
    let cases = [
        (metrics(3, 3.0, 0.9), CefrLevel::A1, [CefrLevel::A1, CefrLevel::A2]),
        (metrics(40, 21.0, 0.0), CefrLevel::B2, [CefrLevel::B1, CefrLevel::B2]),
        (metrics(40, 10.0, 0.10), CefrLevel::B1, [CefrLevel::A2, CefrLevel::B1]),
        (metrics(40, 13.0, 0.0), CefrLevel::A2, [CefrLevel::A1, CefrLevel::A2]),
        (metrics(40, 12.0, 0.03), CefrLevel::A1, [CefrLevel::A1, CefrLevel::A2]),
    ];
    for (m, level, band) in cases {
        let estimate = estimate_level(&m);
        assert_eq!(estimate.level, level, "{:?}", m);
        assert_eq!(estimate.band, band, "{:?}", m);
    }
}

#[test]
fn explanation_embeds_rounded_numbers() {
    let estimate = estimate_level(&metrics(40, 17.04, 0.0862));
    assert_eq!(estimate.level, CefrLevel::B1);
    assert_eq!(
        estimate.explanation,
        "Niveau estimé B1 basé sur une longueur moyenne de 17.0 mots et une proportion de mots rares d’environ 8.6 %."
    );
    assert_eq!(
        estimate.band_explanation,
        "Complexité moyenne avec quelques mots moins fréquents."
    );
}

#[test]
fn beginner_fixture_is_a1() {
    let analysis = pinned_analyzer().analyze(&load_fixture("beginner.txt"));
    assert_eq!(analysis.estimated_level, CefrLevel::A1);
    assert_eq!(analysis.sentence_count, 3);
    assert_eq!(analysis.hard_words().count(), 0);
}

#[test]
fn academic_fixture_is_c1() {
    let analysis = pinned_analyzer().analyze(&load_fixture("academic.txt"));
    assert_eq!(analysis.estimated_level, CefrLevel::C1);
    assert_eq!(analysis.level_band, [CefrLevel::B2, CefrLevel::C1]);
    assert!(analysis.hard_words().any(|w| w.form == "dichotomie"));
}

#[test]
fn cached_analysis_matches_uncached() {
    let text = load_fixture("academic.txt");
    let plain = pinned_analyzer();
    let cached = plain.clone().with_cache(4);

    let first = cached.analyze(&text);
    let second = cached.analyze(&text);
    assert_eq!(first, plain.analyze(&text));
    assert_eq!(first, second);
    assert_eq!(cached.cache().map(|c| c.len()), Some(1));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let analyzer = TextAnalyzer::default().with_cache(8);
    assert_eq!(analyzer.analyze("  Le chat dort.\n"), analyzer.analyze("Le chat dort."));
    assert_eq!(analyzer.cache().map(|c| c.len()), Some(1));
}

const EVERYDAY: &str = "Les enfants jouent dans le jardin. Ma mère regarde les voitures dans la rue. \
                        Nous parlons de nos maisons.";

#[test]
fn everyday_inflected_text_is_beginner_level() {
    let analysis = TextAnalyzer::default().analyze(EVERYDAY);
    assert!(analysis.estimated_level <= CefrLevel::A2, "{:?}", analysis);
    assert_eq!(analysis.sentence_count, 3);
    assert_eq!(analysis.hard_words().count(), 0);
}

#[test]
fn decomposed_input_gets_the_same_analysis() {
    let analyzer = TextAnalyzer::default();
    let decomposed = "Je vais a\u{300} l'e\u{301}cole avec mon fre\u{300}re.";
    let composed = "Je vais à l'école avec mon frère.";

    let analysis = analyzer.analyze(decomposed);
    assert_eq!(analysis, analyzer.analyze(composed));
    assert_eq!(analysis.token_count, 9);
    assert_eq!(analysis.estimated_level, CefrLevel::A1);
    assert_eq!(analysis.hard_ratio(), 0.0);

    let nfd: String = EVERYDAY.nfd().collect();
    assert_eq!(analyzer.analyze(&nfd), analyzer.analyze(EVERYDAY));
}
