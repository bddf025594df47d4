//! Variation expansion
//!
//! A seed word is expanded in three stages: spacing, then case, then
//! character substitution. Each stage feeds every variant of the previous one
//! and the union of the final stage is the word's variant set.

mod case;
mod spacing;
mod substitution;

pub use case::{capitalize, case_variants, cased_letter_count, common_case_variants};
pub use spacing::spacing_variants;
pub use substitution::{single_substitution_variants, substitution_count, substitution_variants};

use crate::config::{GeneratorConfig, defaults::DEFAULT_MAX_SUBSTITUTION_VARIANTS};
use crate::error::{CraftError, PoolKind};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Expands seed words into their variant sets
#[derive(Debug, Clone)]
pub struct VariationExpander {
    substitutions: FxHashMap<char, Vec<String>>,
    max_case_letters: usize,
    max_substitution_variants: u64,
}

impl VariationExpander {
    #[must_use]
    pub fn new(substitutions: &BTreeMap<char, Vec<String>>, max_case_letters: usize) -> Self {
        Self {
            substitutions: substitutions
                .iter()
                .map(|(&ch, subs)| (ch, subs.clone()))
                .collect(),
            max_case_letters,
            max_substitution_variants: DEFAULT_MAX_SUBSTITUTION_VARIANTS,
        }
    }

    /// Cap the substitution cross-product of a single word
    #[must_use]
    pub const fn with_substitution_limit(mut self, limit: u64) -> Self {
        self.max_substitution_variants = limit;
        self
    }

    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.substitutions, config.max_case_letters)
            .with_substitution_limit(config.max_substitution_variants)
    }

    /// All variants of one word, the word itself included
    ///
    /// # Examples
    /// ```
    /// use craftlist::variations::VariationExpander;
    /// use std::collections::BTreeMap;
    ///
    /// let expander = VariationExpander::new(&BTreeMap::new(), 12);
    /// let variants = expander.expand("e c");
    /// assert_eq!(variants.len(), 20);
    /// assert!(variants.contains("E-c"));
    /// ```
    #[must_use]
    pub fn expand(&self, word: &str) -> FxHashSet<String> {
        let cased: FxHashSet<String> = spacing_variants(word)
            .iter()
            .flat_map(|variant| self.case_stage(variant))
            .collect();

        cased
            .iter()
            .flat_map(|variant| self.substitution_stage(variant))
            .collect()
    }

    fn case_stage(&self, word: &str) -> FxHashSet<String> {
        let letters = cased_letter_count(word);
        if letters > self.max_case_letters {
            warn!(
                word,
                letters,
                limit = self.max_case_letters,
                "too many letters for full case expansion, using common forms"
            );
            return common_case_variants(word);
        }
        case_variants(word)
    }

    fn substitution_stage(&self, word: &str) -> FxHashSet<String> {
        let variants = substitution_count(word, &self.substitutions);
        if variants > self.max_substitution_variants {
            warn!(
                word,
                variants,
                limit = self.max_substitution_variants,
                "too many substitution combinations, substituting one position at a time"
            );
            return single_substitution_variants(word, &self.substitutions);
        }
        substitution_variants(word, &self.substitutions)
    }

    /// Union of the variants of every word in `words`, sorted
    ///
    /// # Errors
    /// Returns `CraftError::EmptyPool` if `words` is empty.
    pub fn expand_pool(&self, kind: PoolKind, words: &[String]) -> Result<Vec<String>, CraftError> {
        if words.is_empty() {
            return Err(CraftError::EmptyPool(kind));
        }

        let merged = words
            .par_iter()
            .map(|word| self.expand(word))
            .reduce(FxHashSet::default, |mut acc, mut set| {
                if acc.len() < set.len() {
                    std::mem::swap(&mut acc, &mut set);
                }
                acc.extend(set);
                acc
            });

        let mut pool: Vec<String> = merged.into_iter().collect();
        pool.sort_unstable();

        info!(pool = %kind, seeds = words.len(), variants = pool.len(), "expanded pool");
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander(entries: &[(char, &[&str])]) -> VariationExpander {
        let table: BTreeMap<char, Vec<String>> = entries
            .iter()
            .map(|&(ch, subs)| (ch, subs.iter().map(|s| (*s).to_string()).collect()))
            .collect();
        VariationExpander::new(&table, 12)
    }

    fn sorted(set: FxHashSet<String>) -> Vec<String> {
        let mut values: Vec<String> = set.into_iter().collect();
        values.sort();
        values
    }

    #[test]
    fn simple_word_without_substitutions() {
        let mut expected = vec!["evi", "evI", "eVi", "Evi", "EVi", "eVI", "EvI", "EVI"];
        expected.sort_unstable();
        assert_eq!(sorted(expander(&[]).expand("evi")), expected);
    }

    #[test]
    fn word_with_spaces() {
        let mut expected = vec![
            "e c", "E c", "e C", "E C", "ec", "Ec", "eC", "EC", "e_c", "E_c", "e_C", "E_C", "e-c",
            "E-c", "e-C", "E-C", "e", "E", "c", "C",
        ];
        expected.sort_unstable();
        assert_eq!(sorted(expander(&[]).expand("e c")), expected);
    }

    #[test]
    fn substitutions_apply_after_case() {
        let mut expected = vec![
            "evi", "evI", "eVi", "Evi", "EVi", "eVI", "EvI", "EVI", "3vi", "3vI", "3Vi", "3VI",
        ];
        expected.sort_unstable();
        assert_eq!(sorted(expander(&[('e', &["3"])]).expand("evi")), expected);
    }

    #[test]
    fn original_is_always_included() {
        let expander = expander(&[('a', &["4", "@"]), ('s', &["$"])]);
        for word in ["Password", "evil corp", "x", ""] {
            assert!(expander.expand(word).contains(word), "{word:?} missing");
        }
    }

    #[test]
    fn expansion_is_deterministic() {
        let expander = expander(&[('o', &["0"])]);
        assert_eq!(expander.expand("foo bar"), expander.expand("foo bar"));
    }

    #[test]
    fn empty_word_yields_empty_string() {
        assert_eq!(sorted(expander(&[]).expand("")), vec![""]);
    }

    #[test]
    fn long_words_fall_back_to_common_forms() {
        let table = BTreeMap::new();
        let expander = VariationExpander::new(&table, 3);
        assert_eq!(
            sorted(expander.expand("abcd")),
            vec!["ABCD", "Abcd", "abcd"]
        );
        assert_eq!(expander.expand("abc").len(), 8);
    }

    #[test]
    fn large_substitution_products_fall_back_to_single_positions() {
        let bounded = expander(&[('a', &["4", "@"])]).with_substitution_limit(10);
        let variants = bounded.expand("aaaa");
        // "aaaa" has 81 combinations, over the limit
        assert!(variants.contains("4aaa"));
        assert!(variants.contains("AA@A"));
        assert!(!variants.contains("44aa"));

        let unbounded = expander(&[('a', &["4", "@"])]);
        assert!(unbounded.expand("aaaa").contains("44aa"));
    }

    #[test]
    fn substitution_limit_comes_from_config() {
        let config = GeneratorConfig {
            substitutions: BTreeMap::from([('a', vec!["4".to_string(), "@".to_string()])]),
            max_case_letters: 0,
            max_substitution_variants: 10,
            ..GeneratorConfig::default()
        };
        let mut variants: Vec<String> = VariationExpander::from_config(&config)
            .expand("aaaa")
            .into_iter()
            .collect();
        variants.sort();
        let substituted = |v: &String| v.chars().filter(|c| !c.is_alphabetic()).count();
        assert!(variants.iter().all(|v| substituted(v) <= 1));
        assert!(variants.contains(&"a@aa".to_string()));
    }

    #[test]
    fn pool_merges_and_sorts() {
        let expander = expander(&[]);
        let pool = expander
            .expand_pool(PoolKind::CustomWords, &["b".to_string(), "a".to_string(), "A".to_string()])
            .unwrap();
        assert_eq!(pool, vec!["A", "B", "a", "b"]);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let err = expander(&[])
            .expand_pool(PoolKind::CommonWords, &[])
            .unwrap_err();
        assert!(matches!(err, CraftError::EmptyPool(PoolKind::CommonWords)));
    }
}
