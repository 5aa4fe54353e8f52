//! Per-token normalization and bigram candidate generation.
//!
//! A surface token survives normalization only if it is not excluded, and its
//! cleaned stem is longer than one character and not purely numeric. Everything
//! else is discarded, so a sentence routinely yields fewer normalized terms
//! than raw tokens — callers must tolerate the gaps.

use unicode_categories::UnicodeCategories;

use crate::exclusion::ExclusionSet;
use crate::text::Stem;

/// Normalizes one surface token, or discards it.
///
/// Steps, in order: lowercase; drop if the lowercased form is excluded
/// (stopwords and known proper nouns never become descriptors); stem; strip
/// all punctuation from the stem; drop if the result is empty, a single
/// character, or all digits. The exclusion check runs before stemming so the
/// exclusion set keeps matching its own surface vocabulary.
pub fn normalize_token(
    token: &str,
    exclusions: &ExclusionSet,
    stemmer: &dyn Stem,
) -> Option<String> {
    let lowered = token.to_lowercase();
    if exclusions.contains(&lowered) {
        return None;
    }

    let stemmed = stemmer.stem(&lowered);
    let cleaned: String = stemmed.chars().filter(|ch| !ch.is_punctuation()).collect();

    let mut chars = cleaned.chars();
    // len <= 1 covers the empty string as well.
    if chars.next().is_none() || chars.next().is_none() {
        return None;
    }
    if cleaned.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    Some(cleaned)
}

/// Derives adjacent-pair candidate terms from normalized tokens.
///
/// Pairs whose two halves are identical are skipped, so degenerate "x x"
/// bigrams never reach the lexicon. Order follows the source sequence and no
/// deduplication happens here. Fewer than two input terms yield no bigrams.
pub fn bigrams(terms: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for pair in terms.windows(2) {
        if pair[0] != pair[1] {
            out.push(format!("{} {}", pair[0], pair[1]));
        }
    }
    out
}
