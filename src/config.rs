//! Configuration types for the normalization pipeline.
//!
//! This module defines [`NormalizerConfig`], which controls runtime behavior of
//! the [`Normalizer`](crate::Normalizer). The struct is cheap to clone and easy
//! to deserialize from external configuration formats such as JSON or TOML.
//!
//! ```rust
//! use tastelex::NormalizerConfig;
//!
//! // Use defaults for development
//! let config = NormalizerConfig::default();
//!
//! // Validate before use
//! config.validate().expect("invalid configuration");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lexicon::DescriptorLevel;

/// Runtime configuration for the normalization pipeline.
///
/// `version` is a monotonically increasing schema version for the pipeline.
/// Any behavior change that can affect which descriptors a text maps to
/// (tokenizer, stemmer, filtering rules) must be accompanied by a new
/// configuration version, so that previously extracted descriptor sets can be
/// told apart from ones produced under the new rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Semantic version of the normalization configuration.
    ///
    /// Version 0 is reserved and rejected by [`validate`](Self::validate).
    ///
    /// Default: `1`
    pub version: u32,

    /// Lexicon level used by [`Normalizer::normalize`](crate::Normalizer::normalize)
    /// when the caller does not pick one explicitly.
    ///
    /// Default: [`DescriptorLevel::Specific`]
    #[serde(default)]
    pub default_level: DescriptorLevel,

    /// Run batch normalization on the rayon thread pool.
    ///
    /// Per-text calls read only immutable shared state, so a batch of texts
    /// is embarrassingly parallel. This is an optimization knob, never a
    /// correctness requirement; output is identical either way.
    ///
    /// Default: `false`
    #[serde(default)]
    pub parallel_batch: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            default_level: DescriptorLevel::Specific,
            parallel_batch: false,
        }
    }
}

impl NormalizerConfig {
    /// Validates internal consistency of this configuration.
    ///
    /// Inexpensive, in-memory only. Call at process start-up so
    /// misconfigurations surface before any text is processed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::ReservedVersion);
        }
        Ok(())
    }
}

/// Errors that can occur when validating a [`NormalizerConfig`].
///
/// These are configuration-time issues, intended to be surfaced during
/// start-up rather than per text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Configuration version 0 is reserved and invalid.
    #[error("config version must be >= 1")]
    ReservedVersion,
}
