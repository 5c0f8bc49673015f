//! The per-sentence analysis pipeline.
//!
//! Wires an annotator, the idiom matcher, and the lexicon store into one
//! entry point. Built once, then shared read-only across scoring workers.

use crate::annotate::{Annotator, SimpleAnnotator};
use crate::idiom::IdiomMatcher;
use crate::lexicon::LexiconStore;
use crate::score::{score_sentence, SentenceAssessment};

/// Owns the immutable pieces of the pipeline: lexicon, compiled idiom
/// patterns, and the annotation engine.
pub struct Analyzer {
    store: LexiconStore,
    matcher: IdiomMatcher,
    annotator: Box<dyn Annotator>,
}

impl Analyzer {
    /// Build an analyzer with the built-in whitespace annotator.
    pub fn new(store: LexiconStore) -> Self {
        Self::with_annotator(store, Box::new(SimpleAnnotator))
    }

    /// Build an analyzer around an external annotation engine.
    pub fn with_annotator(store: LexiconStore, annotator: Box<dyn Annotator>) -> Self {
        let matcher = IdiomMatcher::new(store.idiom_patterns().to_vec());
        Self {
            store,
            matcher,
            annotator,
        }
    }

    /// Annotate, merge idioms, and score one sentence. Never fails.
    pub fn assess(&self, text: &str) -> SentenceAssessment {
        let tokens = self.annotator.annotate(text);
        let merged = self.matcher.merge(&tokens);
        score_sentence(text, &merged, &self.store)
    }

    pub fn store(&self) -> &LexiconStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Token;
    use crate::lexicon::LexiconManifest;
    use std::fs;
    use tempfile::TempDir;

    fn fixture_store(temp: &TempDir) -> LexiconStore {
        let write = |name: &str, content: &str| {
            fs::write(temp.path().join(name), content).unwrap();
        };
        write("boosters.txt", "muito\t1\n");
        write("emoticons.txt", ":)\t1\n");
        write(
            "sentilex.txt",
            "sabe bem.PoS=IDIOM;TG=HUM:N0;POL:N0=1;ANOT=MAN\n",
        );
        write("emotions.txt", "bom\t1\n");
        write("irony.txt", "até parece\n");
        write("negating.txt", "não\n");
        write("question.txt", "quando\n");
        write("slang.txt", "bué\tmuito\n");
        LexiconStore::load(&LexiconManifest {
            boosters: temp.path().join("boosters.txt"),
            emoticons: temp.path().join("emoticons.txt"),
            sentilex: temp.path().join("sentilex.txt"),
            emotions: temp.path().join("emotions.txt"),
            irony: temp.path().join("irony.txt"),
            negating: temp.path().join("negating.txt"),
            question: temp.path().join("question.txt"),
            slang: temp.path().join("slang.txt"),
        })
        .unwrap()
    }

    #[test]
    fn test_assess_runs_the_full_pipeline() {
        let temp = TempDir::new().unwrap();
        let analyzer = Analyzer::new(fixture_store(&temp));

        let assessment = analyzer.assess("a música sabe bem");
        assert_eq!(assessment.score, 1.0);
        assert_eq!(assessment.word_count, 3);
    }

    #[test]
    fn test_custom_annotator_is_used() {
        struct Fixed;
        impl Annotator for Fixed {
            fn annotate(&self, _text: &str) -> Vec<Token> {
                vec![Token::word("bom", "bom", "Adj")]
            }
        }

        let temp = TempDir::new().unwrap();
        let analyzer = Analyzer::with_annotator(fixture_store(&temp), Box::new(Fixed));

        let assessment = analyzer.assess("texto irrelevante aqui");
        assert_eq!(assessment.score, 1.0);
        assert_eq!(assessment.word_count, 1);
    }
}
