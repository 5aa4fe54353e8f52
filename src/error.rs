//! Error types produced when constructing the pipeline's shared state.
//!
//! All errors here are configuration-time failures: they occur while building
//! the lexicon, the exclusion set, or the [`Normalizer`](crate::Normalizer)
//! itself, and they halt construction. Once those objects exist, per-text
//! normalization is total over well-formed input and never returns an error —
//! a degenerate text simply yields an empty descriptor set.
//!
//! Errors are typed, cloneable, and comparable so callers can handle specific
//! cases and tests can assert on them precisely.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building the lexicon, the exclusion set, or a
/// [`Normalizer`](crate::Normalizer).
///
/// The enum is marked `#[non_exhaustive]` to allow future additions without
/// breaking existing code. Callers should include a catch-all arm when
/// matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// The dataset table does not expose a required categorical column.
    ///
    /// The exclusion-set builder needs the `Variety` and `Country` columns to
    /// collect proper nouns that must never become descriptors. A table where
    /// no row carries the column cannot be processed; this is surfaced
    /// immediately and is not retried.
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    /// The descriptor lexicon contains no rows.
    ///
    /// An empty lexicon would map every text to the empty set, which is
    /// always a misconfiguration (wrong file, wrong parse) rather than an
    /// intentional state.
    #[error("descriptor lexicon contains no rows")]
    EmptyLexicon,

    /// The supplied [`NormalizerConfig`](crate::NormalizerConfig) failed
    /// validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
