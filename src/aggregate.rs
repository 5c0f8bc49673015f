//! Folding sentence assessments into chapter and book totals.
//!
//! No scoring rules live here: chapter and book scores are plain sums of
//! their parts, so the reduction is order-independent and sentences can be
//! scored in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analyzer::Analyzer;
use crate::score::SentenceAssessment;

/// All sentence assessments of one chapter plus their summed score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterResult {
    pub title: String,
    pub sentences: Vec<SentenceAssessment>,
    pub score: f64,
}

/// An entire book's chapter results plus the summed book score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookResult {
    pub chapters: Vec<ChapterResult>,
    pub score: f64,
}

impl BookResult {
    /// Ordered per-chapter scores for downstream reporting.
    pub fn chapter_scores(&self) -> Vec<f64> {
        self.chapters.iter().map(|c| c.score).collect()
    }
}

/// Raw chapter text split out of a book: title line plus sentence lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChapter {
    pub title: String,
    pub sentences: Vec<String>,
}

/// Split book text into chapters on `#`.
///
/// Text before the first `#` is front matter and skipped. Within a chapter
/// the first line is the title; the remaining non-empty lines are
/// sentences.
pub fn split_book(text: &str) -> Vec<RawChapter> {
    text.split('#')
        .skip(1)
        .map(|chapter| {
            let mut lines = chapter.lines();
            let title = lines.next().unwrap_or_default().trim().to_string();
            let sentences = lines
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
            RawChapter { title, sentences }
        })
        .collect()
}

/// Score every sentence of one chapter and fold the total.
///
/// Sentences have no data dependency on one another, so they are scored in
/// parallel against the shared read-only analyzer; the collect preserves
/// sentence order and the sum is commutative.
pub fn assess_chapter(analyzer: &Analyzer, chapter: &RawChapter) -> ChapterResult {
    let sentences: Vec<SentenceAssessment> = chapter
        .sentences
        .par_iter()
        .map(|sentence| analyzer.assess(sentence))
        .collect();
    let score = sentences.iter().map(|a| a.score).sum();
    ChapterResult {
        title: chapter.title.clone(),
        sentences,
        score,
    }
}

/// Score a whole book: every chapter in order, then the summed total.
pub fn assess_book(analyzer: &Analyzer, text: &str) -> BookResult {
    let chapters: Vec<ChapterResult> = split_book(text)
        .iter()
        .map(|chapter| assess_chapter(analyzer, chapter))
        .collect();
    let score = chapters.iter().map(|c| c.score).sum();
    BookResult { chapters, score }
}
