//! The descriptor lexicon: a controlled vocabulary for tasting terms.
//!
//! Reviewer prose is noisy ("marmalade, toffee, vanilla..."); the lexicon maps
//! each normalized unigram or bigram onto canonical descriptors at three
//! ascending levels of abstraction. Level 1 is the broadest class ("fruit"),
//! level 2 a subcategory ("citrus"), level 3 the specific canonical descriptor
//! closest to the raw term ("citrus_fruit" → "citrus").
//!
//! The source data is a wide table with one column per level, keyed by
//! `descriptor_raw`. [`LexiconRow`] mirrors that shape for deserialization;
//! internally each key maps to a small fixed [`LexiconEntry`] record so
//! lookups never touch column names. Loading the table (CSV, JSON, database)
//! is the caller's concern — rows arrive here already parsed.
//!
//! The lexicon is built once per run and treated as immutable, read-only
//! shared state for every normalization call after that.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::BuildError;

/// Abstraction level at which a raw term resolves to a canonical descriptor.
///
/// `#[repr(u8)]` pins the discriminants to the level numbers used by the
/// source table's `descriptor_level_{1,2,3}` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DescriptorLevel {
    /// Broadest class, e.g. "fruit".
    Category = 1,
    /// Subcategory, e.g. "citrus".
    Subcategory = 2,
    /// Specific canonical descriptor closest to the raw term.
    Specific = 3,
}

impl Default for DescriptorLevel {
    fn default() -> Self {
        DescriptorLevel::Specific
    }
}

/// One row of the descriptor mapping table, as loaded from external data.
///
/// Field names match the source table's columns so a CSV or JSON reader can
/// deserialize rows directly. A missing value at some level leaves the term
/// unmapped at that level; it is not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexiconRow {
    pub descriptor_raw: String,
    #[serde(default)]
    pub descriptor_level_1: Option<String>,
    #[serde(default)]
    pub descriptor_level_2: Option<String>,
    #[serde(default)]
    pub descriptor_level_3: Option<String>,
}

/// Canonical descriptors for one raw term, one value per abstraction level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub level_1: Option<String>,
    pub level_2: Option<String>,
    pub level_3: Option<String>,
}

impl LexiconEntry {
    /// The canonical descriptor at `level`, if the source row had one.
    pub fn at(&self, level: DescriptorLevel) -> Option<&str> {
        match level {
            DescriptorLevel::Category => self.level_1.as_deref(),
            DescriptorLevel::Subcategory => self.level_2.as_deref(),
            DescriptorLevel::Specific => self.level_3.as_deref(),
        }
    }
}

/// Immutable raw-term → canonical-descriptor mapping table.
///
/// Keys are exact-match strings as stored (normalized unigrams and bigrams);
/// lookups are O(1) expected.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    /// Builds a lexicon from deserialized table rows.
    ///
    /// Keys are expected to be unique; on a duplicate the first row wins and
    /// the duplicate is logged and dropped. An empty table is a fatal
    /// configuration error.
    pub fn from_rows<I>(rows: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = LexiconRow>,
    {
        let mut entries: HashMap<String, LexiconEntry> = HashMap::new();
        for row in rows {
            let LexiconRow {
                descriptor_raw,
                descriptor_level_1,
                descriptor_level_2,
                descriptor_level_3,
            } = row;
            if entries.contains_key(&descriptor_raw) {
                warn!(key = %descriptor_raw, "duplicate lexicon key, first row kept");
                continue;
            }
            entries.insert(
                descriptor_raw,
                LexiconEntry {
                    level_1: descriptor_level_1,
                    level_2: descriptor_level_2,
                    level_3: descriptor_level_3,
                },
            );
        }

        if entries.is_empty() {
            return Err(BuildError::EmptyLexicon);
        }

        info!(entries = entries.len(), "lexicon_loaded");
        Ok(Self { entries })
    }

    /// Exact-match lookup of `term`, resolved at `level`.
    ///
    /// Returns `None` both when the key is absent and when the row carries no
    /// value at the requested level (the term is effectively unmapped there).
    pub fn resolve(&self, term: &str, level: DescriptorLevel) -> Option<&str> {
        self.entries.get(term).and_then(|entry| entry.at(level))
    }

    /// Whether `term` is a key in the mapping table.
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Maps candidate terms to canonical descriptors at `level`.
    ///
    /// Walks `terms` in order, silently dropping terms absent from the table,
    /// and appends each resolved descriptor the first time it is seen
    /// (first-occurrence-wins; later duplicates are skipped). The caller owns
    /// any final set conversion.
    pub fn map_terms<'a, I>(&self, terms: I, level: DescriptorLevel) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut mapped: Vec<String> = Vec::new();
        for term in terms {
            if let Some(descriptor) = self.resolve(term, level) {
                if !mapped.iter().any(|seen| seen == descriptor) {
                    mapped.push(descriptor.to_string());
                }
            }
        }
        mapped
    }

    /// All descriptors at `level` whose entry belongs to a level-1 `category`.
    ///
    /// Supports category-restricted reporting downstream, e.g. "only the
    /// fruit descriptors of this cluster".
    pub fn descriptors_in_category(
        &self,
        category: &str,
        level: DescriptorLevel,
    ) -> HashSet<&str> {
        self.entries
            .values()
            .filter(|entry| entry.level_1.as_deref() == Some(category))
            .filter_map(|entry| entry.at(level))
            .collect()
    }

    /// Number of raw-term keys in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(raw: &str, l1: &str, l2: &str, l3: &str) -> LexiconRow {
        LexiconRow {
            descriptor_raw: raw.to_string(),
            descriptor_level_1: Some(l1.to_string()),
            descriptor_level_2: Some(l2.to_string()),
            descriptor_level_3: Some(l3.to_string()),
        }
    }

    fn sample() -> Lexicon {
        Lexicon::from_rows(vec![
            row("citrus", "fruit", "citrus_fruit", "citrus"),
            row("vanilla", "oak", "vanilla_oak", "vanilla"),
            row("tonka bean", "oak", "sweet_oak", "tonka_bean"),
        ])
        .expect("sample lexicon builds")
    }

    #[test]
    fn empty_table_rejected() {
        let res = Lexicon::from_rows(Vec::new());
        assert!(matches!(res, Err(BuildError::EmptyLexicon)));
    }

    #[test]
    fn resolve_walks_levels() {
        let lexicon = sample();
        assert_eq!(
            lexicon.resolve("citrus", DescriptorLevel::Category),
            Some("fruit")
        );
        assert_eq!(
            lexicon.resolve("citrus", DescriptorLevel::Subcategory),
            Some("citrus_fruit")
        );
        assert_eq!(
            lexicon.resolve("citrus", DescriptorLevel::Specific),
            Some("citrus")
        );
        assert_eq!(lexicon.resolve("barnyard", DescriptorLevel::Specific), None);
    }

    #[test]
    fn missing_level_value_is_unmapped_not_error() {
        let lexicon = Lexicon::from_rows(vec![LexiconRow {
            descriptor_raw: "flint".to_string(),
            descriptor_level_1: Some("mineral".to_string()),
            descriptor_level_2: None,
            descriptor_level_3: None,
        }])
        .expect("builds");
        assert!(lexicon.contains("flint"));
        assert_eq!(
            lexicon.resolve("flint", DescriptorLevel::Category),
            Some("mineral")
        );
        assert_eq!(lexicon.resolve("flint", DescriptorLevel::Specific), None);
    }

    #[test]
    fn duplicate_key_keeps_first_row() {
        let lexicon = Lexicon::from_rows(vec![
            row("citrus", "fruit", "citrus_fruit", "citrus"),
            row("citrus", "oak", "wrong", "wrong"),
        ])
        .expect("builds");
        assert_eq!(lexicon.len(), 1);
        assert_eq!(
            lexicon.resolve("citrus", DescriptorLevel::Category),
            Some("fruit")
        );
    }

    #[test]
    fn map_terms_preserves_first_seen_order_and_dedups() {
        let lexicon = sample();
        let terms = ["citrus", "vanilla", "citrus", "swirl"];
        let mapped = lexicon.map_terms(terms.iter().copied(), DescriptorLevel::Specific);
        assert_eq!(mapped, vec!["citrus".to_string(), "vanilla".to_string()]);
    }

    #[test]
    fn map_terms_dedups_on_resolved_value() {
        // Two raw keys resolving to the same level-1 class collapse to one.
        let lexicon = sample();
        let terms = ["vanilla", "tonka bean"];
        let mapped = lexicon.map_terms(terms.iter().copied(), DescriptorLevel::Category);
        assert_eq!(mapped, vec!["oak".to_string()]);
    }

    #[test]
    fn category_view_filters_on_level_1() {
        let lexicon = sample();
        let oak = lexicon.descriptors_in_category("oak", DescriptorLevel::Specific);
        assert_eq!(
            oak,
            ["vanilla", "tonka_bean"].iter().copied().collect()
        );
        assert!(lexicon
            .descriptors_in_category("earth", DescriptorLevel::Specific)
            .is_empty());
    }

    #[test]
    fn rows_deserialize_with_sparse_columns() {
        let row: LexiconRow =
            serde_json::from_str(r#"{"descriptor_raw": "flint", "descriptor_level_1": "mineral"}"#)
                .expect("deserialize");
        assert_eq!(row.descriptor_raw, "flint");
        assert_eq!(row.descriptor_level_1.as_deref(), Some("mineral"));
        assert!(row.descriptor_level_3.is_none());
    }
}
