//! Multiword-expression matching over token sequences.
//!
//! An idiom carries one lexicon entry and must be scored once under its own
//! polarity, not token-by-token under whatever single-word entries overlap
//! it. The matcher collapses every idiom span into a single merged token
//! before classification runs.

use crate::annotate::Token;

/// An ordered sequence of lower-cased literal tokens for one multiword
/// lexicon key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdiomPattern {
    key: String,
    tokens: Vec<String>,
}

impl IdiomPattern {
    /// Parse a multiword lexicon key into a pattern, case-folded and split
    /// on spaces. Returns `None` for keys with fewer than two words.
    pub fn parse(key: &str) -> Option<Self> {
        let tokens: Vec<String> = key
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if tokens.len() < 2 {
            return None;
        }
        Some(Self {
            key: tokens.join(" "),
            tokens,
        })
    }

    /// The lexicon key this pattern was derived from.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of tokens the pattern spans. Always >= 2, so there is no
    /// `is_empty` counterpart.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// The pattern's constituent tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// A window of `len()` tokens starting at `start` matches iff each
    /// token's lower-cased surface equals the corresponding element.
    fn matches_at(&self, tokens: &[Token], start: usize) -> bool {
        if start + self.tokens.len() > tokens.len() {
            return false;
        }
        self.tokens
            .iter()
            .zip(&tokens[start..])
            .all(|(pat, tok)| tok.surface.to_lowercase() == *pat)
    }
}

/// Applies a fixed pattern set to token sequences.
///
/// Matching is left-to-right and non-overlapping; at a given start position
/// the longest matching pattern wins. An empty pattern set is a no-op.
#[derive(Debug, Clone, Default)]
pub struct IdiomMatcher {
    // Longest first, ties by key, so a scan is deterministic.
    patterns: Vec<IdiomPattern>,
}

impl IdiomMatcher {
    pub fn new(mut patterns: Vec<IdiomPattern>) -> Self {
        patterns.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| a.key().cmp(b.key()))
        });
        patterns.dedup();
        Self { patterns }
    }

    /// Collapse idiom spans in `tokens`, returning a new sequence.
    ///
    /// Consumed windows are not reconsidered for shorter patterns, and the
    /// input is never mutated.
    pub fn merge(&self, tokens: &[Token]) -> Vec<Token> {
        if self.patterns.is_empty() {
            return tokens.to_vec();
        }

        let mut merged = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            match self.patterns.iter().find(|p| p.matches_at(tokens, i)) {
                Some(pattern) => {
                    merged.push(Token::merged_idiom(pattern.key()));
                    i += pattern.len();
                }
                None => {
                    merged.push(tokens[i].clone());
                    i += 1;
                }
            }
        }
        merged
    }

    pub fn patterns(&self) -> &[IdiomPattern] {
        &self.patterns
    }
}
