//! Sentiscore - lexicon-based sentiment scoring with evidence trails.
//!
//! Sentiscore assigns a numeric sentiment score to a unit of text (a
//! sentence, and by aggregation a chapter or book) using lexicon lookups
//! and a small set of contextual adjustment rules, and records the
//! evidence behind every score.
//!
//! # Architecture
//!
//! The scoring pipeline is annotate -> merge idioms -> score -> aggregate:
//!
//! - `lexicon`: manifest plus fail-fast loaders for the lookup tables
//! - `annotate`: token records and the external-annotator seam
//! - `idiom`: multiword pattern matching over token sequences
//! - `score`: per-token classification and the score rule pipeline
//! - `analyzer`: facade wiring the pipeline for one sentence
//! - `aggregate`: chapter/book splitting and score reduction
//! - `report`: pretty, JSON, and per-chapter file output
//!
//! The [`LexiconStore`] is immutable after loading, so one [`Analyzer`]
//! can be shared across threads; independent sentences are scored in
//! parallel during aggregation.

pub mod aggregate;
pub mod analyzer;
pub mod annotate;
pub mod cli;
pub mod idiom;
pub mod lexicon;
pub mod report;
pub mod score;

pub use aggregate::{assess_book, assess_chapter, split_book, BookResult, ChapterResult, RawChapter};
pub use analyzer::Analyzer;
pub use annotate::{Annotator, SimpleAnnotator, Token};
pub use idiom::{IdiomMatcher, IdiomPattern};
pub use lexicon::{LexiconError, LexiconManifest, LexiconStore};
pub use score::{score_sentence, Evidence, EvidenceTrail, SentenceAssessment};
