//! Output rendering for assessments.
//!
//! Supports three output forms:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption
//! - Chapter files: one plain-text report per chapter, written on disk
//!   next to an analyzed book

use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::aggregate::{BookResult, ChapterResult};
use crate::score::SentenceAssessment;

// =============================================================================
// JSON Format
// =============================================================================

/// JSON envelope for a book run.
#[derive(Serialize, Deserialize)]
pub struct JsonBookReport {
    pub version: String,
    pub path: String,
    pub lexicon: String,
    pub score: f64,
    pub chapter_scores: Vec<f64>,
    pub chapters: Vec<ChapterResult>,
}

/// JSON envelope for a batch of individually scored sentences.
#[derive(Serialize, Deserialize)]
pub struct JsonSentenceReport {
    pub version: String,
    pub lexicon: String,
    pub sentences: Vec<SentenceAssessment>,
}

/// Write a book result as JSON to stdout.
pub fn write_json_book(path: &str, lexicon: &str, book: &BookResult) -> anyhow::Result<()> {
    let report = JsonBookReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        lexicon: lexicon.to_string(),
        score: book.score,
        chapter_scores: book.chapter_scores(),
        chapters: book.chapters.clone(),
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

/// Write sentence assessments as JSON to stdout.
pub fn write_json_sentences(
    lexicon: &str,
    sentences: &[SentenceAssessment],
) -> anyhow::Result<()> {
    let report = JsonSentenceReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        lexicon: lexicon.to_string(),
        sentences: sentences.to_vec(),
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write a book result in pretty (human-readable) format.
pub fn write_pretty_book(path: &str, lexicon: &str, book: &BookResult) {
    write_header();

    print!("  {}", "Analyzing: ".dimmed());
    println!("{}", path);
    print!("  {}", "Lexicon:   ".dimmed());
    println!("{}", lexicon);
    println!();

    println!("  {} ({}):", "Chapters".bold(), book.chapters.len());
    for chapter in &book.chapters {
        let sentence_count = chapter.sentences.len();
        let plural = if sentence_count != 1 { "s" } else { "" };
        print!("    {:<24}", chapter.title);
        print_colored_score(chapter.score);
        println!(
            "  {}",
            format!("({} sentence{})", sentence_count, plural).dimmed()
        );
    }
    println!();

    print!("  {} ", "Book score:".bold());
    print_colored_score(book.score);
    println!();
    println!();
}

/// Write one sentence assessment in pretty format.
pub fn write_pretty_sentence(assessment: &SentenceAssessment) {
    print!("  {} ", "Score:".bold());
    print_colored_score(assessment.score);
    println!("  {}", format!("({} words)", assessment.word_count).dimmed());

    println!("  {}", "Evidence:".bold());
    for (name, items) in assessment.evidence.categories() {
        if items.is_empty() {
            continue;
        }
        let rendered: Vec<String> = items
            .iter()
            .map(|e| format!("{} ({:+})", e.term, e.contribution))
            .collect();
        println!("    {:<10} {}", name.dimmed(), rendered.join(", "));
    }
    println!();
}

fn write_header() {
    println!();
    print!("  ");
    print!("{}", "sentiscore".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();
}

fn print_colored_score(score: f64) {
    let rendered = format!("{:+.2}", score);
    if score > 0.0 {
        print!("{}", rendered.green());
    } else if score < 0.0 {
        print!("{}", rendered.red());
    } else {
        print!("{}", rendered.yellow());
    }
}

// =============================================================================
// Chapter report files
// =============================================================================

/// Write one `chapter_<n>.txt` per chapter under `dir`.
///
/// The directory is created when missing. Files carry every sentence's
/// word count, score, and evidence categories plus the chapter total.
pub fn write_chapter_reports(dir: &Path, book: &BookResult) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    for (index, chapter) in book.chapters.iter().enumerate() {
        let path = dir.join(format!("chapter_{}.txt", index));
        fs::write(&path, render_chapter(chapter)?)?;
    }
    Ok(())
}

fn render_chapter(chapter: &ChapterResult) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "Chapter {}", chapter.title)?;

    for sentence in &chapter.sentences {
        writeln!(out)?;
        writeln!(out, "Sentence: {}", sentence.text)?;
        writeln!(out, "Words: {}", sentence.word_count)?;
        writeln!(out, "Sentiment score: {}", sentence.score)?;
        writeln!(out, "Evidence:")?;
        for (name, items) in sentence.evidence.categories() {
            let rendered: Vec<String> = items
                .iter()
                .map(|e| format!("({}, {})", e.term, e.contribution))
                .collect();
            writeln!(out, "\t{}: [{}]", name, rendered.join(", "))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Chapter score: {}", chapter.score)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{Evidence, EvidenceTrail};
    use tempfile::TempDir;

    fn sample_book() -> BookResult {
        let sentence = SentenceAssessment {
            text: "o dia foi bom".to_string(),
            evidence: EvidenceTrail {
                positive: vec![Evidence {
                    term: "bom".to_string(),
                    contribution: 1.0,
                }],
                ..EvidenceTrail::default()
            },
            score: 1.0,
            word_count: 4,
        };
        let chapter = ChapterResult {
            title: "1".to_string(),
            sentences: vec![sentence],
            score: 1.0,
        };
        BookResult {
            chapters: vec![chapter],
            score: 1.0,
        }
    }

    #[test]
    fn test_book_report_roundtrips_through_json() {
        let book = sample_book();
        let report = JsonBookReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            path: "book.txt".to_string(),
            lexicon: "sentiscore.yaml".to_string(),
            score: book.score,
            chapter_scores: book.chapter_scores(),
            chapters: book.chapters.clone(),
        };

        let json = serde_json::to_string(&report).unwrap();
        let parsed: JsonBookReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.score, 1.0);
        assert_eq!(parsed.chapter_scores, vec![1.0]);
        assert_eq!(parsed.chapters, book.chapters);
    }

    #[test]
    fn test_chapter_reports_written_per_chapter() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("chapters");
        let book = sample_book();

        write_chapter_reports(&dir, &book).unwrap();

        let content = fs::read_to_string(dir.join("chapter_0.txt")).unwrap();
        assert!(content.contains("Chapter 1"));
        assert!(content.contains("Sentence: o dia foi bom"));
        assert!(content.contains("Words: 4"));
        assert!(content.contains("positive: [(bom, 1)]"));
        assert!(content.contains("Chapter score: 1"));
    }

    #[test]
    fn test_render_includes_every_category() {
        let book = sample_book();
        let rendered = render_chapter(&book.chapters[0]).unwrap();
        for name in [
            "positive", "negative", "neutral", "negators", "boosters", "irony", "emotions",
        ] {
            assert!(rendered.contains(name), "missing category {}", name);
        }
    }
}
