//! Lexicon tables and the manifest that names them.
//!
//! All lookup surfaces load once at startup into an immutable
//! [`LexiconStore`]. A malformed line or unreadable file aborts the whole
//! load: a partially loaded lexicon would silently skew every score, so
//! there is no degraded mode.
//!
//! Source formats:
//! - polarity tables (boosters, emoticons, emotions): `word<TAB>value`,
//!   value clamped to its sign
//! - Sentilex table: `key.PoS=<tag>;...;POL:N0=<int>;...`, `IDIOM` entries
//!   double as multiword patterns
//! - term sets (irony, negating, question): one term per line
//! - slang table: `word<TAB>replacement`, values kept verbatim

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::idiom::IdiomPattern;

/// Default manifest file names to search for.
pub const DEFAULT_MANIFEST_NAMES: &[&str] = &["sentiscore.yaml", ".sentiscore.yaml"];

/// Errors raised while loading lexicon tables.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: {reason}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

fn malformed(path: &Path, line: usize, reason: impl Into<String>) -> LexiconError {
    LexiconError::MalformedLine {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

fn read_table(path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Paths of the eight lexicon source tables.
///
/// Relative paths are resolved against the manifest file's directory when
/// loaded through [`LexiconManifest::parse_file`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LexiconManifest {
    pub boosters: PathBuf,
    pub emoticons: PathBuf,
    pub sentilex: PathBuf,
    pub emotions: PathBuf,
    pub irony: PathBuf,
    pub negating: PathBuf,
    pub question: PathBuf,
    pub slang: PathBuf,
}

impl LexiconManifest {
    /// Parse a manifest from a YAML file and resolve its paths.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read manifest {}: {}", path.display(), e))?;
        let mut manifest: LexiconManifest = serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid manifest {}: {}", path.display(), e))?;

        if let Some(base) = path.parent() {
            manifest.resolve_against(base);
        }
        Ok(manifest)
    }

    fn resolve_against(&mut self, base: &Path) {
        for table in [
            &mut self.boosters,
            &mut self.emoticons,
            &mut self.sentilex,
            &mut self.emotions,
            &mut self.irony,
            &mut self.negating,
            &mut self.question,
            &mut self.slang,
        ] {
            if table.is_relative() {
                *table = base.join(&*table);
            }
        }
    }

    /// Every table a manifest names, with its role.
    pub fn tables(&self) -> [(&'static str, &Path); 8] {
        [
            ("boosters", self.boosters.as_path()),
            ("emoticons", self.emoticons.as_path()),
            ("sentilex", self.sentilex.as_path()),
            ("emotions", self.emotions.as_path()),
            ("irony", self.irony.as_path()),
            ("negating", self.negating.as_path()),
            ("question", self.question.as_path()),
            ("slang", self.slang.as_path()),
        ]
    }
}

/// Validate that every table a manifest names is readable.
pub fn validate(manifest: &LexiconManifest) -> anyhow::Result<()> {
    for (role, path) in manifest.tables() {
        if !path.is_file() {
            anyhow::bail!("{} table not found: {}", role, path.display());
        }
    }
    Ok(())
}

/// Discover a manifest file in the current directory.
pub fn discover_manifest() -> anyhow::Result<PathBuf> {
    for name in DEFAULT_MANIFEST_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
    }
    anyhow::bail!(
        "no lexicon manifest found (looked for {})",
        DEFAULT_MANIFEST_NAMES.join(", ")
    )
}

/// Load a `word<TAB>value` table, clamping every value to its sign.
///
/// A missing tab or non-integer value is a hard error; blank lines are
/// allowed so trailing newlines do not break a table.
pub fn load_polarity_table(path: &Path) -> Result<HashMap<String, i32>, LexiconError> {
    let content = read_table(path)?;
    let mut table = HashMap::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let (word, value) = line
            .split_once('\t')
            .ok_or_else(|| malformed(path, idx + 1, "expected word<TAB>value"))?;
        let value: i32 = value.trim().parse().map_err(|_| {
            malformed(path, idx + 1, format!("non-integer value {:?}", value.trim()))
        })?;
        table.insert(word.trim().to_lowercase(), value.signum());
    }
    Ok(table)
}

/// Load a `word<TAB>replacement` table, keeping values verbatim.
pub fn load_slang_table(path: &Path) -> Result<HashMap<String, String>, LexiconError> {
    let content = read_table(path)?;
    let mut table = HashMap::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let (word, value) = line
            .split_once('\t')
            .ok_or_else(|| malformed(path, idx + 1, "expected word<TAB>replacement"))?;
        table.insert(word.trim().to_lowercase(), value.trim().to_string());
    }
    Ok(table)
}

/// Load a term set: one term per line, lower-cased, blank lines skipped.
pub fn load_term_set(path: &Path) -> Result<BTreeSet<String>, LexiconError> {
    let content = read_table(path)?;
    Ok(content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect())
}

lazy_static! {
    /// First polarity slot of a Sentilex line. Later slots (`POL:N1=`) are
    /// intentionally ignored.
    static ref SENTILEX_POLARITY: Regex = Regex::new(r"POL:N0=(-?\d+)").unwrap();
}

/// Load a Sentilex-style table: `key.PoS=<tag>;...;POL:N0=<int>;...`.
///
/// The key is everything before the first `.` of the first field; entries
/// tagged `IDIOM` additionally register a multiword pattern. A single-word
/// `IDIOM` key cannot form a pattern and is rejected as malformed.
pub fn load_sentilex(
    path: &Path,
) -> Result<(Vec<IdiomPattern>, HashMap<String, i32>), LexiconError> {
    let content = read_table(path)?;
    let mut polarities = HashMap::new();
    let mut idioms = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let head = line.split(';').next().unwrap_or_default();
        let (name, pos) = head
            .split_once('=')
            .ok_or_else(|| malformed(path, line_no, "first field must be key.PoS=<tag>"))?;
        let (key, _) = name
            .split_once('.')
            .ok_or_else(|| malformed(path, line_no, "key has no part-of-speech suffix"))?;
        let key = key.to_lowercase();

        let polarity: i32 = SENTILEX_POLARITY
            .captures(line)
            .ok_or_else(|| malformed(path, line_no, "missing POL:N0 field"))?[1]
            .parse()
            .map_err(|_| malformed(path, line_no, "polarity out of range"))?;

        if pos.trim() == "IDIOM" {
            let pattern = IdiomPattern::parse(&key).ok_or_else(|| {
                malformed(path, line_no, "IDIOM key must contain at least two words")
            })?;
            idioms.push(pattern);
        }
        polarities.insert(key, polarity);
    }

    Ok((idioms, polarities))
}

/// Immutable lookup surfaces for scoring.
///
/// Built once by [`LexiconStore::load`]; no mutation API is exposed, so a
/// store can be shared freely across scoring workers.
#[derive(Debug, Default)]
pub struct LexiconStore {
    boosters: HashMap<String, i32>,
    emoticons: HashMap<String, i32>,
    emotions: HashMap<String, i32>,
    slang: HashMap<String, String>,
    irony_terms: BTreeSet<String>,
    negating_words: BTreeSet<String>,
    question_words: BTreeSet<String>,
    idioms: Vec<IdiomPattern>,
}

impl LexiconStore {
    /// Load every table a manifest names.
    ///
    /// The Sentilex polarities seed the emotions map and the secondary
    /// emotion table overwrites any collision (last write wins). Boosters,
    /// emoticons, and slang are independent namespaces.
    pub fn load(manifest: &LexiconManifest) -> Result<Self, LexiconError> {
        let boosters = load_polarity_table(&manifest.boosters)?;
        let emoticons = load_polarity_table(&manifest.emoticons)?;
        let (idioms, mut emotions) = load_sentilex(&manifest.sentilex)?;
        for (word, value) in load_polarity_table(&manifest.emotions)? {
            emotions.insert(word, value);
        }
        let irony_terms = load_term_set(&manifest.irony)?;
        let negating_words = load_term_set(&manifest.negating)?;
        let question_words = load_term_set(&manifest.question)?;
        let slang = load_slang_table(&manifest.slang)?;

        Ok(Self {
            boosters,
            emoticons,
            emotions,
            slang,
            irony_terms,
            negating_words,
            question_words,
            idioms,
        })
    }

    /// Booster value for a lower-cased key.
    pub fn booster(&self, key: &str) -> Option<i32> {
        self.boosters.get(key).copied()
    }

    /// Emoticon polarity for a lower-cased key.
    pub fn emoticon(&self, key: &str) -> Option<i32> {
        self.emoticons.get(key).copied()
    }

    /// Emotion polarity for a lower-cased key. Includes merged idiom
    /// polarities from the Sentilex table.
    pub fn emotion(&self, key: &str) -> Option<i32> {
        self.emotions.get(key).copied()
    }

    /// Slang replacement for a lower-cased key.
    pub fn slang(&self, key: &str) -> Option<&str> {
        self.slang.get(key).map(String::as_str)
    }

    pub fn irony_terms(&self) -> &BTreeSet<String> {
        &self.irony_terms
    }

    pub fn negating_words(&self) -> &BTreeSet<String> {
        &self.negating_words
    }

    pub fn question_words(&self) -> &BTreeSet<String> {
        &self.question_words
    }

    /// Multiword patterns registered by `IDIOM`-tagged Sentilex entries.
    pub fn idiom_patterns(&self) -> &[IdiomPattern] {
        &self.idioms
    }
}
