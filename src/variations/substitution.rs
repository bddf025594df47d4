//! Character substitution variants
//!
//! Each character either stays or is replaced by one of its configured
//! substitutes; the result is the full cross-product over positions.

use crate::core::Odometer;
use rustc_hash::{FxHashMap, FxHashSet};

type Substitutions = FxHashMap<char, Vec<String>>;

// Per character: the original slice first, then its substitutes
fn position_options<'a>(word: &'a str, substitutions: &'a Substitutions) -> Vec<Vec<&'a str>> {
    word.char_indices()
        .map(|(offset, ch)| {
            let original = &word[offset..offset + ch.len_utf8()];
            let mut forms = vec![original];
            if let Some(substitutes) = substitutions.get(&ch) {
                forms.extend(substitutes.iter().map(String::as_str));
            }
            forms
        })
        .collect()
}

/// Size of the full substitution cross-product of `word`, saturating
#[must_use]
pub fn substitution_count(word: &str, substitutions: &Substitutions) -> u64 {
    word.chars()
        .map(|ch| substitutions.get(&ch).map_or(1, |subs| subs.len() as u64 + 1))
        .fold(1u64, u64::saturating_mul)
}

/// Every substitution combination of `word`, including `word` itself
#[must_use]
pub fn substitution_variants(word: &str, substitutions: &Substitutions) -> FxHashSet<String> {
    let options = position_options(word, substitutions);

    let mut odometer = Odometer::new(options.iter().map(Vec::len).collect());
    let mut variants = FxHashSet::default();

    while let Some(choice) = odometer.advance() {
        let variant: String = options
            .iter()
            .zip(choice)
            .map(|(forms, &pick)| forms[pick])
            .collect();
        variants.insert(variant);
    }

    variants.insert(word.to_string());
    variants
}

/// `word` plus every variant that replaces exactly one character
#[must_use]
pub fn single_substitution_variants(
    word: &str,
    substitutions: &Substitutions,
) -> FxHashSet<String> {
    let mut variants = FxHashSet::default();
    variants.insert(word.to_string());

    for (offset, ch) in word.char_indices() {
        let Some(substitutes) = substitutions.get(&ch) else {
            continue;
        };
        let (head, tail) = (&word[..offset], &word[offset + ch.len_utf8()..]);
        for substitute in substitutes {
            variants.insert(format!("{head}{substitute}{tail}"));
        }
    }
    variants
}
