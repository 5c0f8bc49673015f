//! Annotation boundary: token records and the tokenizer seam.
//!
//! Linguistic annotation (tokenization, lemmatization, part-of-speech
//! tagging) belongs to an external engine; the scoring core only requires
//! the four fields of [`Token`]. [`SimpleAnnotator`] is a naive built-in
//! that splits on whitespace and peels punctuation, so the pipeline runs
//! end-to-end without an external dependency.

use lazy_static::lazy_static;
use regex::Regex;

/// Part-of-speech tag carried by merged idiom tokens.
pub const IDIOM_POS: &str = "IDIOM";

/// One annotated token, in original text order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub lemma: String,
    pub pos: String,
    pub is_punct: bool,
}

impl Token {
    /// Word token with a known lemma and tag.
    pub fn word(surface: &str, lemma: &str, pos: &str) -> Self {
        Self {
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            is_punct: false,
        }
    }

    /// Punctuation token; never counts toward scoring or word count.
    pub fn punctuation(surface: &str) -> Self {
        Self {
            surface: surface.to_string(),
            lemma: surface.to_string(),
            pos: "PUNCT".to_string(),
            is_punct: true,
        }
    }

    /// Synthetic token covering a merged idiom span. Surface and lemma are
    /// both the idiom key.
    pub fn merged_idiom(key: &str) -> Self {
        Self {
            surface: key.to_string(),
            lemma: key.to_string(),
            pos: IDIOM_POS.to_string(),
            is_punct: false,
        }
    }
}

/// Produces a token sequence for one sentence of raw text.
///
/// Implementations must emit tokens in original text order with all four
/// `Token` fields populated. Everything else about the annotation algorithm
/// (lemmatization quality, tag set, language) is up to the engine.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Vec<Token>;
}

lazy_static! {
    /// Common western emoticon shapes, e.g. `:)`, `;-(`, `:D`, `=P`.
    static ref EMOTICON: Regex = Regex::new(r"^[:;=8xX][-~'^o]?[()\[\]{}DdPpOoCc/\\|*3<>]+$").unwrap();
}

/// Whitespace tokenizer with punctuation peeling.
///
/// Lemmas are the lower-cased surface forms; no real lemmatization or
/// part-of-speech tagging is attempted. Emoticon-shaped tokens are kept
/// whole as words so the emoticon lexicon can see them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAnnotator;

impl Annotator for SimpleAnnotator {
    fn annotate(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            split_chunk(chunk, &mut tokens);
        }
        tokens
    }
}

fn is_punct_char(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '¿' | '¡' | '«' | '»' | '…' | '–' | '—')
}

/// Split one whitespace-delimited chunk into leading punctuation, the word
/// body, and trailing punctuation. Word-internal punctuation (hyphens,
/// apostrophes) stays in the body.
fn split_chunk(chunk: &str, out: &mut Vec<Token>) {
    if EMOTICON.is_match(chunk) {
        let lemma = chunk.to_lowercase();
        out.push(Token::word(chunk, &lemma, "SYM"));
        return;
    }
    if chunk.chars().all(is_punct_char) {
        out.push(Token::punctuation(chunk));
        return;
    }

    let leading: String = chunk.chars().take_while(|c| is_punct_char(*c)).collect();
    let trailing: String = chunk
        .chars()
        .rev()
        .take_while(|c| is_punct_char(*c))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let body = &chunk[leading.len()..chunk.len() - trailing.len()];

    if !leading.is_empty() {
        out.push(Token::punctuation(&leading));
    }
    if !body.is_empty() {
        let lemma = body.to_lowercase();
        out.push(Token::word(body, &lemma, "WORD"));
    }
    if !trailing.is_empty() {
        out.push(Token::punctuation(&trailing));
    }
}
