//! Case variants
//!
//! Every upper/lower combination over the letters of a word. The number of
//! variants doubles with each letter, so words over the configured limit fall
//! back to the common forms only.

use crate::core::Odometer;
use rustc_hash::FxHashSet;

/// Per-character case options: one entry for caseless characters, two otherwise
fn case_options(word: &str) -> Vec<Vec<String>> {
    word.chars()
        .map(|ch| {
            let lower: String = ch.to_lowercase().collect();
            let upper: String = ch.to_uppercase().collect();
            if lower == upper {
                vec![lower]
            } else {
                vec![lower, upper]
            }
        })
        .collect()
}

/// Number of characters with distinct upper and lower forms
#[must_use]
pub fn cased_letter_count(word: &str) -> usize {
    case_options(word)
        .iter()
        .filter(|options| options.len() > 1)
        .count()
}

/// First character upper-cased, the rest lower-cased
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// Every case combination of `word`, including `word` itself
///
/// # Examples
/// ```
/// use craftlist::variations::case_variants;
///
/// let variants = case_variants("ab");
/// assert_eq!(variants.len(), 4);
/// assert!(variants.contains("aB"));
/// ```
#[must_use]
pub fn case_variants(word: &str) -> FxHashSet<String> {
    let options = case_options(word);
    let mut odometer = Odometer::new(options.iter().map(Vec::len).collect());
    let mut variants = FxHashSet::default();

    while let Some(choice) = odometer.advance() {
        let variant: String = options
            .iter()
            .zip(choice)
            .map(|(forms, &pick)| forms[pick].as_str())
            .collect();
        variants.insert(variant);
    }

    variants.insert(word.to_string());
    variants
}

/// Original, lowercase, uppercase and capitalized forms
#[must_use]
pub fn common_case_variants(word: &str) -> FxHashSet<String> {
    [
        word.to_string(),
        word.to_lowercase(),
        word.to_uppercase(),
        capitalize(word),
    ]
    .into_iter()
    .collect()
}
