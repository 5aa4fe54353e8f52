//! Injected text capabilities: word-boundary tokenization and stemming.
//!
//! The pipeline does not own a tokenization or stemming algorithm. Both are
//! modeled as capabilities behind small traits so an alternate implementation
//! (another language, another stemmer family) can be substituted without
//! touching pipeline logic. The default implementations are the ecosystem
//! standards: UAX #29 word segmentation and the Snowball English stemmer.

use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into an ordered sequence of surface-form words.
pub trait Tokenize: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Reduces a word to its root form by removing inflectional suffixes.
pub trait Stem: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Default tokenizer: UAX #29 word boundaries via `unicode-segmentation`.
///
/// Punctuation never appears as a token, so most non-word noise is gone
/// before per-token normalization even runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenize for WordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }
}

/// Default stemmer: Snowball English via `rust-stemmers`.
pub struct EnglishStemmer {
    inner: Stemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishStemmer").finish_non_exhaustive()
    }
}

impl Stem for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_skips_punctuation_and_whitespace() {
        let tokens = WordTokenizer.tokenize("Rich and smooth, rounded -- yet bright!");
        assert_eq!(
            tokens,
            vec!["Rich", "and", "smooth", "rounded", "yet", "bright"]
        );
    }

    #[test]
    fn tokenizer_keeps_internal_apostrophes() {
        let tokens = WordTokenizer.tokenize("it's a wine");
        assert_eq!(tokens, vec!["it's", "a", "wine"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WordTokenizer.tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn stemmer_reduces_plurals() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.stem("aromas"), "aroma");
        assert_eq!(stemmer.stem("notes"), "note");
        assert_eq!(stemmer.stem("oak"), "oak");
    }

    #[test]
    fn stemmer_passes_digits_through() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.stem("2040"), "2040");
    }
}
