//! Command-line interface for sentiscore.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::BufRead;
use std::path::PathBuf;

use crate::aggregate::{self, BookResult};
use crate::analyzer::Analyzer;
use crate::lexicon::{self, LexiconManifest, LexiconStore};
use crate::report;
use crate::score::SentenceAssessment;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Lexicon-based sentiment scoring with evidence trails.
///
/// Sentiscore assigns a numeric sentiment score to sentences, chapters,
/// and whole books using lexicon lookups and a small set of contextual
/// rules (boosters, negation, irony, interrogation), and explains every
/// score with the lexicon matches that produced it.
#[derive(Parser)]
#[command(name = "sentiscore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a whole book, chapter by chapter
    #[command(visible_alias = "book")]
    Analyze(AnalyzeArgs),
    /// Score sentences from arguments or stdin
    Sentence(SentenceArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the book text file (chapters delimited by '#')
    pub book: PathBuf,

    /// Path to the lexicon manifest YAML (default: auto-discover)
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Directory to write per-chapter text reports into
    #[arg(long)]
    pub report_dir: Option<PathBuf>,
}

/// Arguments for the sentence command.
#[derive(Parser)]
pub struct SentenceArgs {
    /// Sentences to score (reads stdin lines when empty)
    pub text: Vec<String>,

    /// Path to the lexicon manifest YAML (default: auto-discover)
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Resolve, parse, and validate the manifest, then load the lexicon.
fn load_analyzer(lexicon: Option<&PathBuf>) -> anyhow::Result<(PathBuf, Analyzer)> {
    let manifest_path = match lexicon {
        Some(p) => p.clone(),
        None => lexicon::discover_manifest()?,
    };
    let manifest = LexiconManifest::parse_file(&manifest_path)?;
    lexicon::validate(&manifest)?;
    let store = LexiconStore::load(&manifest)?;
    Ok((manifest_path, Analyzer::new(store)))
}

fn validate_format(format: &str) -> bool {
    format == "pretty" || format == "json"
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    if !validate_format(&args.format) {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let (manifest_path, analyzer) = match load_analyzer(args.lexicon.as_ref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Run 'sentiscore analyze --lexicon <manifest>' to point at one");
            return Ok(EXIT_ERROR);
        }
    };

    let text = match std::fs::read_to_string(&args.book) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: cannot read book {:?}: {}", args.book, e);
            return Ok(EXIT_ERROR);
        }
    };

    let raw_chapters = aggregate::split_book(&text);
    if raw_chapters.is_empty() {
        eprintln!("Warning: no chapters found (chapters are delimited by '#')");
        return Ok(EXIT_SUCCESS);
    }

    // Chapters run sequentially with a progress bar; sentences within a
    // chapter are scored in parallel.
    let bar = ProgressBar::new(raw_chapters.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("  {bar:30} {pos}/{len} chapters {msg}")
            .expect("static template"),
    );
    let mut chapters = Vec::with_capacity(raw_chapters.len());
    for chapter in &raw_chapters {
        bar.set_message(chapter.title.clone());
        chapters.push(aggregate::assess_chapter(&analyzer, chapter));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let score = chapters.iter().map(|c| c.score).sum();
    let book = BookResult { chapters, score };

    if let Some(dir) = &args.report_dir {
        report::write_chapter_reports(dir, &book)?;
    }

    let book_path = args.book.to_string_lossy();
    let lexicon_path = manifest_path.to_string_lossy();
    match args.format.as_str() {
        "json" => report::write_json_book(&book_path, &lexicon_path, &book)?,
        _ => report::write_pretty_book(&book_path, &lexicon_path, &book),
    }

    Ok(EXIT_SUCCESS)
}

/// Run the sentence command.
pub fn run_sentence(args: &SentenceArgs) -> anyhow::Result<i32> {
    if !validate_format(&args.format) {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let (manifest_path, analyzer) = match load_analyzer(args.lexicon.as_ref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let lines: Vec<String> = if args.text.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?
    } else {
        args.text.clone()
    };

    let assessments: Vec<SentenceAssessment> = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| analyzer.assess(l))
        .collect();

    match args.format.as_str() {
        "json" => {
            report::write_json_sentences(&manifest_path.to_string_lossy(), &assessments)?;
        }
        _ => {
            for assessment in &assessments {
                println!();
                println!("  {}", assessment.text);
                report::write_pretty_sentence(assessment);
            }
        }
    }

    Ok(EXIT_SUCCESS)
}
