//! Per-sentence evidence classification and the score rule pipeline.
//!
//! Scoring is a total function: any token sequence yields an assessment,
//! and an empty sentence scores zero. The pipeline is linear — per-token
//! lookups, then whole-text signals, then the composition rules in a fixed
//! order (boost, irony, negation, question).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::annotate::Token;
use crate::lexicon::LexiconStore;

/// Question dampener, applied after the sign-flip rules.
const QUESTION_FACTOR: f64 = 0.5;

/// One lexicon or rule match that fed a sentence's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub term: String,
    pub contribution: f64,
}

impl Evidence {
    fn new(term: &str, contribution: f64) -> Self {
        Self {
            term: term.to_string(),
            contribution,
        }
    }
}

/// Categorized, ordered record of every match behind one sentence score.
///
/// Append-only while a sentence is scored. Term-set matches (negators,
/// irony) carry a zero contribution; their effect is the rule they trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceTrail {
    pub positive: Vec<Evidence>,
    pub negative: Vec<Evidence>,
    pub neutral: Vec<Evidence>,
    pub negators_found: Vec<Evidence>,
    pub boosters_found: Vec<Evidence>,
    pub irony_found: Vec<Evidence>,
    pub emotions_found: Vec<Evidence>,
}

impl EvidenceTrail {
    /// All categories with their display names, in report order.
    pub fn categories(&self) -> [(&'static str, &[Evidence]); 7] {
        [
            ("positive", self.positive.as_slice()),
            ("negative", self.negative.as_slice()),
            ("neutral", self.neutral.as_slice()),
            ("negators", self.negators_found.as_slice()),
            ("boosters", self.boosters_found.as_slice()),
            ("irony", self.irony_found.as_slice()),
            ("emotions", self.emotions_found.as_slice()),
        ]
    }
}

/// Scored sentence plus the evidence that produced the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceAssessment {
    /// Lower-cased sentence text, as used by the containment rules.
    pub text: String,
    pub evidence: EvidenceTrail,
    pub score: f64,
    /// Non-punctuation merged tokens.
    pub word_count: usize,
}

/// Score one merged token sequence against the lexicon.
///
/// `text` is the raw sentence the tokens came from; it is lower-cased here
/// and drives the whole-text containment rules.
pub fn score_sentence(text: &str, tokens: &[Token], store: &LexiconStore) -> SentenceAssessment {
    let text = text.to_lowercase();
    let words: Vec<&Token> = tokens.iter().filter(|t| !t.is_punct).collect();

    let mut evidence = EvidenceTrail::default();
    let mut additive = 0.0;
    let mut boost = 1.0;

    // Single-word sentences look up the lemma, multi-word sentences the
    // surface form. Preserved source behavior; see DESIGN.md.
    let multi_word = text.split_whitespace().nth(1).is_some();

    for token in &words {
        let key = if multi_word {
            token.surface.to_lowercase()
        } else {
            token.lemma.to_lowercase()
        };

        let mut contribution = 0.0;
        if let Some(value) = store.booster(&key) {
            // boosters scale the final sum instead of adding to it
            boost += f64::from(value);
            evidence
                .boosters_found
                .push(Evidence::new(&key, f64::from(value)));
        } else if let Some(value) = store.emoticon(&key) {
            contribution = f64::from(value);
            evidence.emotions_found.push(Evidence::new(&key, contribution));
        } else if let Some(value) = store.emotion(&key) {
            contribution = f64::from(value);
            evidence.emotions_found.push(Evidence::new(&key, contribution));
        }
        additive += contribution;

        if contribution > 0.0 {
            evidence.positive.push(Evidence::new(&key, contribution));
        } else if contribution < 0.0 {
            evidence.negative.push(Evidence::new(&key, contribution));
        } else {
            evidence.neutral.push(Evidence::new(&key, 0.0));
        }
    }

    let has_irony = record_contained(&text, store.irony_terms(), &mut evidence.irony_found);
    let has_negation =
        record_contained(&text, store.negating_words(), &mut evidence.negators_found);
    let is_question = store
        .question_words()
        .iter()
        .any(|t| text.contains(t.as_str()));

    let mut score = additive * boost;
    if has_irony {
        score = -score;
    }
    if has_negation {
        score = -score;
    }
    if is_question {
        score *= QUESTION_FACTOR;
    }

    SentenceAssessment {
        text,
        evidence,
        score,
        word_count: words.len(),
    }
}

/// Record every term contained in the lowered text, in set order.
fn record_contained(text: &str, terms: &BTreeSet<String>, out: &mut Vec<Evidence>) -> bool {
    let mut found = false;
    for term in terms {
        if text.contains(term.as_str()) {
            out.push(Evidence::new(term, 0.0));
            found = true;
        }
    }
    found
}
