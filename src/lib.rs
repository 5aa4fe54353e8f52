//! # tastelex
//!
//! Converts free-text wine tasting notes into a small, controlled vocabulary
//! of canonical descriptors. Raw reviewer prose ("marmalade, toffee,
//! vanilla...") is reduced to a deduplicated set of terms drawn from a fixed,
//! hierarchical lexicon — each raw term resolving, at the caller's choice, to
//! its broad class ("fruit"), subcategory ("citrus"), or specific canonical
//! descriptor.
//!
//! ## Pipeline
//!
//! One call per text, a straight-line sequence with no suspension points:
//!
//! 1. **Tokenize** the text at word boundaries ([`WordTokenizer`]).
//! 2. **Normalize** each token — lowercase, exclusion check, stem, strip
//!    punctuation, drop short/numeric residue ([`normalize_token`]).
//! 3. **Generate bigrams** from the surviving sequence ([`bigrams`]), so
//!    multi-word lexicon entries like "tonka bean" are found.
//! 4. **Map** unigrams then bigrams through the lexicon at the requested
//!    level, first occurrence wins ([`Lexicon::map_terms`]).
//! 5. **Deduplicate** into the final descriptor set.
//!
//! The lexicon and exclusion set are built once per run, validated up front
//! (construction is the only fallible phase), and shared read-only across all
//! calls — which is why batches of texts parallelize trivially.
//!
//! ## Example
//!
//! ```
//! use tastelex::{ExclusionSet, Lexicon, LexiconRow, Normalizer};
//!
//! let rows: Vec<LexiconRow> = serde_json::from_str(
//!     r#"[
//!       {"descriptor_raw": "citrus",  "descriptor_level_1": "fruit", "descriptor_level_3": "citrus"},
//!       {"descriptor_raw": "vanilla", "descriptor_level_1": "oak",   "descriptor_level_3": "vanilla"}
//!     ]"#,
//! )
//! .expect("rows parse");
//!
//! let lexicon = Lexicon::from_rows(rows).expect("lexicon builds");
//! let exclusions = ExclusionSet::from_words(["and", "the", "with"]);
//! let normalizer = Normalizer::new(lexicon, exclusions);
//!
//! let descriptors = normalizer.normalize("Citrus and vanilla aromas, citrus finish.");
//! assert_eq!(descriptors.len(), 2);
//! assert!(descriptors.contains("citrus"));
//! assert!(descriptors.contains("vanilla"));
//! ```

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

mod config;
mod error;
mod exclusion;
mod lexicon;
mod normalize;
mod text;

pub use crate::config::{ConfigError, NormalizerConfig};
pub use crate::error::BuildError;
pub use crate::exclusion::{ExclusionSet, COUNTRY_COLUMN, VARIETY_COLUMN};
pub use crate::lexicon::{DescriptorLevel, Lexicon, LexiconEntry, LexiconRow};
pub use crate::normalize::{bigrams, normalize_token};
pub use crate::text::{EnglishStemmer, Stem, Tokenize, WordTokenizer};

/// The pipeline context: lexicon, exclusion set, and text capabilities.
///
/// Construct once, then call [`normalize`](Self::normalize) per text. All
/// state is immutable after construction, so a `Normalizer` can be shared
/// across threads freely.
pub struct Normalizer {
    config: NormalizerConfig,
    lexicon: Lexicon,
    exclusions: ExclusionSet,
    tokenizer: Box<dyn Tokenize>,
    stemmer: Box<dyn Stem>,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.config)
            .field("lexicon_entries", &self.lexicon.len())
            .field("excluded_words", &self.exclusions.len())
            .finish_non_exhaustive()
    }
}

impl Normalizer {
    /// Creates a normalizer with the default configuration and the default
    /// capabilities (UAX #29 tokenizer, Snowball English stemmer).
    pub fn new(lexicon: Lexicon, exclusions: ExclusionSet) -> Self {
        // The default config always validates; only caller-supplied configs
        // can fail, through `with_config`.
        Self::assemble(NormalizerConfig::default(), lexicon, exclusions)
    }

    /// Creates a normalizer with an explicit configuration.
    ///
    /// The configuration is validated here, at construction — the per-text
    /// entry points never fail.
    pub fn with_config(
        config: NormalizerConfig,
        lexicon: Lexicon,
        exclusions: ExclusionSet,
    ) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self::assemble(config, lexicon, exclusions))
    }

    /// Replaces the tokenizer and stemmer capabilities.
    ///
    /// Lets callers substitute another segmentation scheme or stemmer family
    /// without touching pipeline logic.
    pub fn with_capabilities(
        mut self,
        tokenizer: Box<dyn Tokenize>,
        stemmer: Box<dyn Stem>,
    ) -> Self {
        self.tokenizer = tokenizer;
        self.stemmer = stemmer;
        self
    }

    fn assemble(config: NormalizerConfig, lexicon: Lexicon, exclusions: ExclusionSet) -> Self {
        info!(
            version = config.version,
            lexicon_entries = lexicon.len(),
            excluded_words = exclusions.len(),
            "normalizer_ready"
        );
        Self {
            config,
            lexicon,
            exclusions,
            tokenizer: Box::new(WordTokenizer),
            stemmer: Box::new(EnglishStemmer::new()),
        }
    }

    /// Normalizes one text at the configured default level.
    ///
    /// See [`normalize_at`](Self::normalize_at).
    pub fn normalize(&self, text: &str) -> HashSet<String> {
        self.normalize_at(text, self.config.default_level)
    }

    /// Normalizes one text into its canonical descriptor set at `level`.
    ///
    /// Total over any input: degenerate text (empty, non-linguistic, nothing
    /// but excluded words) yields an empty set rather than an error. For a
    /// fixed lexicon, exclusion set, and capabilities, the output is a
    /// deterministic function of the input text; iteration order of the set
    /// carries no meaning.
    pub fn normalize_at(&self, text: &str, level: DescriptorLevel) -> HashSet<String> {
        let start = Instant::now();

        let tokens = self.tokenizer.tokenize(text);
        let raw_tokens = tokens.len();

        let mut unigrams: Vec<String> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if let Some(term) = normalize_token(token, &self.exclusions, self.stemmer.as_ref()) {
                unigrams.push(term);
            }
        }

        // Unigrams first, then bigrams: ties in first-occurrence mapping go
        // to the single-word reading.
        let pairs = bigrams(&unigrams);
        let kept_terms = unigrams.len();
        let mut candidates = unigrams;
        candidates.extend(pairs);

        let mapped = self
            .lexicon
            .map_terms(candidates.iter().map(String::as_str), level);
        let descriptors: HashSet<String> = mapped.into_iter().collect();

        debug!(
            raw_tokens,
            kept_terms,
            descriptors = descriptors.len(),
            elapsed_micros = start.elapsed().as_micros() as u64,
            "normalize_complete"
        );
        descriptors
    }

    /// Normalizes a batch of texts at `level`; output is index-aligned with
    /// the input.
    ///
    /// With [`NormalizerConfig::parallel_batch`] set, texts are processed on
    /// the rayon pool. Per-text calls share only read-only state, so the two
    /// modes produce identical output.
    pub fn normalize_batch<S>(&self, texts: &[S], level: DescriptorLevel) -> Vec<HashSet<String>>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let results: Vec<HashSet<String>> = if self.config.parallel_batch {
            texts
                .par_iter()
                .map(|text| self.normalize_at(text.as_ref(), level))
                .collect()
        } else {
            texts
                .iter()
                .map(|text| self.normalize_at(text.as_ref(), level))
                .collect()
        };

        info!(
            texts = texts.len(),
            parallel = self.config.parallel_batch,
            elapsed_micros = start.elapsed().as_micros() as u64,
            "batch_complete"
        );
        results
    }

    /// Records which surface forms collapsed onto which normalized stem.
    ///
    /// A diagnostic view for auditing normalization quality, not part of the
    /// production flow. Tokens that were filtered out group under the `None`
    /// key. Each distinct surface form is recorded once, in first-seen order.
    pub fn word_mapping(&self, text: &str) -> HashMap<Option<String>, Vec<String>> {
        let mut mapping: HashMap<Option<String>, Vec<String>> = HashMap::new();
        for token in self.tokenizer.tokenize(text) {
            let normalized = normalize_token(token, &self.exclusions, self.stemmer.as_ref());
            let surfaces = mapping.entry(normalized).or_default();
            if !surfaces.iter().any(|seen| seen == token) {
                surfaces.push(token.to_string());
            }
        }
        mapping
    }

    /// The lexicon this normalizer maps against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The exclusion set this normalizer filters with.
    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }
}

/// Counts how often each descriptor occurs across many descriptor sets.
///
/// The per-text sets are already deduplicated, so this is a document
/// frequency: in how many texts did the descriptor appear. Sorted by
/// descending count, ties broken by term so the order is deterministic;
/// `top_n` truncates the result when set.
pub fn descriptor_frequencies<'a, I>(lists: I, top_n: Option<usize>) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a HashSet<String>>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for list in lists {
        for descriptor in list {
            *counts.entry(descriptor.as_str()).or_insert(0) += 1;
        }
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(descriptor, count)| (descriptor.to_string(), count))
        .collect();
    out.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(n) = top_n {
        out.truncate(n);
    }
    out
}
