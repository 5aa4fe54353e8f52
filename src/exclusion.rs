//! The exclusion set: words that must never survive normalization.
//!
//! Two kinds of terms are "unknowable" as descriptors: ordinary stopwords, and
//! proper nouns from the dataset itself — grape variety and country names that
//! appear constantly in reviews without describing the wine. Both are merged
//! into one case-normalized membership set, built once per dataset and
//! read-only afterwards.
//!
//! The dataset arrives as loosely-typed JSON rows (whatever the upstream
//! loader produced); only the `Variety` and `Country` columns are consulted
//! here. A table that lacks either column entirely cannot be processed and
//! fails construction immediately.

use std::collections::HashSet;

use serde_json::Value;
use tracing::info;

use crate::error::BuildError;

/// Dataset column holding grape variety names.
pub const VARIETY_COLUMN: &str = "Variety";
/// Dataset column holding country names.
pub const COUNTRY_COLUMN: &str = "Country";

/// Case-normalized set of words excluded from descriptor extraction.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl ExclusionSet {
    /// Builds the exclusion set from a stopword list and a dataset table.
    ///
    /// Stopwords are taken as already-lowercase, one term each. From the
    /// dataset, the distinct non-null `Variety` and `Country` values are
    /// collected; each value is whitespace-split into its constituent words
    /// before lowercasing, so a multi-word name like "New Zealand" excludes
    /// "new" and "zealand" as separate words rather than the whole phrase.
    ///
    /// A non-empty table where no row carries one of the required columns
    /// fails with [`BuildError::MissingColumn`].
    pub fn build<I, S>(stopwords: I, dataset: &[Value]) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: HashSet<String> = stopwords.into_iter().map(Into::into).collect();
        let stopword_count = words.len();

        for column in [VARIETY_COLUMN, COUNTRY_COLUMN] {
            if !dataset.is_empty() && !dataset.iter().any(|row| row.get(column).is_some()) {
                return Err(BuildError::MissingColumn(column));
            }

            // Distinct first, then split: repeated rows contribute once.
            let distinct: HashSet<&str> = dataset
                .iter()
                .filter_map(|row| row.get(column))
                .filter_map(Value::as_str)
                .collect();

            for value in distinct {
                for word in value.split_whitespace() {
                    words.insert(word.to_lowercase());
                }
            }
        }

        info!(
            stopwords = stopword_count,
            total = words.len(),
            "exclusion_set_built"
        );
        Ok(Self { words })
    }

    /// Builds an exclusion set directly from words, bypassing the dataset.
    ///
    /// Intended for tests and for callers that precompute their own list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership test; callers probe with an already-lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of excluded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
