//! Integration tests for the full analysis pipeline.
//!
//! These tests load the lexicon fixtures under `testdata/` through the
//! manifest and validate scoring end to end, from raw book text down to
//! per-sentence evidence.

use std::path::PathBuf;

use sentiscore::lexicon::{self, LexiconManifest, LexiconStore};
use sentiscore::{assess_book, Analyzer};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn load_analyzer() -> Analyzer {
    let manifest_path = testdata_path().join("sentiscore.yaml");
    let manifest = LexiconManifest::parse_file(&manifest_path).expect("should parse manifest");
    lexicon::validate(&manifest).expect("manifest should validate");
    let store = LexiconStore::load(&manifest).expect("lexicon should load");
    Analyzer::new(store)
}

#[test]
fn test_manifest_resolves_against_its_directory() {
    let manifest_path = testdata_path().join("sentiscore.yaml");
    let manifest = LexiconManifest::parse_file(&manifest_path).unwrap();

    assert_eq!(
        manifest.boosters,
        testdata_path().join("lexicon/boosters.txt")
    );
    assert!(lexicon::validate(&manifest).is_ok());
}

#[test]
fn test_loaded_polarity_values_are_clamped() {
    let analyzer = load_analyzer();
    let store = analyzer.store();

    // emoticons.txt carries :D = 2 and emotions.txt carries feliz = 2
    assert_eq!(store.emoticon(":d"), Some(1));
    assert_eq!(store.emotion("feliz"), Some(1));
}

#[test]
fn test_secondary_emotion_table_wins_collisions() {
    let analyzer = load_analyzer();

    // sentilex says contente = -1, the emotion table corrects it to +1
    assert_eq!(analyzer.store().emotion("contente"), Some(1));
}

#[test]
fn test_idiom_patterns_come_from_sentilex() {
    let analyzer = load_analyzer();
    let keys: Vec<&str> = analyzer
        .store()
        .idiom_patterns()
        .iter()
        .map(|p| p.key())
        .collect();

    assert!(keys.contains(&"sabe bem"));
    assert!(keys.contains(&"fazer falta"));
    assert!(analyzer.store().idiom_patterns().iter().all(|p| p.len() >= 2));
}

#[test]
fn test_book_chapter_and_sentence_totals() {
    let analyzer = load_analyzer();
    let text = std::fs::read_to_string(testdata_path().join("book.txt")).unwrap();

    let book = assess_book(&analyzer, &text);

    assert_eq!(book.chapters.len(), 2);
    assert_eq!(book.chapters[0].title, "1");
    assert_eq!(book.chapters[1].title, "2");

    // chapter 1: idiom (+1), negated zero-sum sentence (0), emoticon (+1)
    assert_eq!(book.chapters[0].score, 2.0);
    // chapter 2: two negative emotions (-2), dampened question (+0.5)
    assert_eq!(book.chapters[1].score, -1.5);
    assert_eq!(book.score, 0.5);
    assert_eq!(book.chapter_scores(), vec![2.0, -1.5]);

    // the reduction law holds for every level
    for chapter in &book.chapters {
        let sum: f64 = chapter.sentences.iter().map(|s| s.score).sum();
        assert_eq!(chapter.score, sum);
    }
    let sum: f64 = book.chapters.iter().map(|c| c.score).sum();
    assert_eq!(book.score, sum);
}

#[test]
fn test_front_matter_is_not_scored() {
    let analyzer = load_analyzer();
    let text = std::fs::read_to_string(testdata_path().join("book.txt")).unwrap();

    let book = assess_book(&analyzer, &text);
    for chapter in &book.chapters {
        for sentence in &chapter.sentences {
            assert!(!sentence.text.contains("prefácio"));
        }
    }
}

#[test]
fn test_idiom_sentence_scores_once() {
    let analyzer = load_analyzer();

    let assessment = analyzer.assess("A música alta sabe bem.");
    assert_eq!(assessment.score, 1.0);
    assert_eq!(assessment.word_count, 4);
    assert_eq!(assessment.evidence.positive.len(), 1);
    assert_eq!(assessment.evidence.positive[0].term, "sabe bem");
}

#[test]
fn test_negation_flips_and_question_dampens_last() {
    let analyzer = load_analyzer();

    // +1 from the idiom, flipped by "não", then halved by "quando"
    let assessment = analyzer.assess("Quando é que não sabe bem?");
    assert_eq!(assessment.score, -0.5);
    assert!(!assessment.evidence.negators_found.is_empty());
}

#[test]
fn test_booster_multiplies_the_sum() {
    let analyzer = load_analyzer();

    let assessment = analyzer.assess("o dia foi muito bom");
    assert_eq!(assessment.score, 2.0);
    assert_eq!(assessment.evidence.boosters_found.len(), 1);
}

#[test]
fn test_irony_inverts_the_sign() {
    let analyzer = load_analyzer();

    let assessment = analyzer.assess("até parece que o dia foi bom");
    assert_eq!(assessment.score, -1.0);
    assert_eq!(assessment.evidence.irony_found.len(), 1);
    assert_eq!(assessment.evidence.irony_found[0].term, "até parece");
}

#[test]
fn test_assessments_are_idempotent() {
    let analyzer = load_analyzer();

    let first = analyzer.assess("Tenho um teclado novo, mas não funciona.");
    let second = analyzer.assess("Tenho um teclado novo, mas não funciona.");
    assert_eq!(first, second);
}

#[test]
fn test_missing_table_fails_before_scoring() {
    let manifest_path = testdata_path().join("sentiscore.yaml");
    let mut manifest = LexiconManifest::parse_file(&manifest_path).unwrap();
    manifest.sentilex = testdata_path().join("lexicon/missing.txt");

    assert!(lexicon::validate(&manifest).is_err());
    assert!(LexiconStore::load(&manifest).is_err());
}
