//! Spacing variants
//!
//! Multi-word seeds are commonly typed joined, underscored, dashed or as a
//! single fragment.

use rustc_hash::FxHashSet;

/// Original, space-free, underscore-joined, dash-joined and each fragment
///
/// Joined forms identical to the original (or empty) are skipped; the set
/// always contains the original word.
#[must_use]
pub fn spacing_variants(word: &str) -> FxHashSet<String> {
    let mut variants = FxHashSet::default();
    variants.insert(word.to_string());

    for joiner in ["", "_", "-"] {
        let joined = word.replace(' ', joiner);
        if joined != word && !joined.is_empty() {
            variants.insert(joined);
        }
    }

    for fragment in word.split_whitespace() {
        variants.insert(fragment.to_string());
    }

    variants
}
