//! Materialized value pools for one run

use crate::config::GeneratorConfig;
use crate::core::expand_number_patterns;
use crate::error::{CraftError, PoolKind};
use crate::variations::VariationExpander;
use crate::wordlists::SeedWords;
use tracing::info;

/// Every value a template slot can take, shared by the enumerator and the
/// counting engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPools {
    pub custom: Vec<String>,
    pub common: Vec<String>,
    /// `None` when no SSIDs were supplied; templates using `<SSID>` are skipped
    pub network_ids: Option<Vec<String>>,
    pub numbers: Vec<String>,
    pub separators: Vec<String>,
    pub years: Vec<i32>,
}

impl WordPools {
    /// Expand the seeds and configured lists into pools
    ///
    /// # Errors
    /// Returns `CraftError::EmptyPool` when the custom words, the common words
    /// or a supplied SSID list is empty.
    pub fn build(config: &GeneratorConfig, seeds: &SeedWords) -> Result<Self, CraftError> {
        let expander = VariationExpander::from_config(config);

        let custom = expander.expand_pool(PoolKind::CustomWords, &seeds.custom)?;
        let common = expander.expand_pool(PoolKind::CommonWords, &config.common_words)?;
        let network_ids = seeds
            .network_ids
            .as_deref()
            .map(|ids| expander.expand_pool(PoolKind::NetworkIds, ids))
            .transpose()?;
        let numbers = expand_number_patterns(&config.number_patterns);

        info!(
            numbers = numbers.len(),
            separators = config.separators.len(),
            years = config.years().count(),
            "built value pools"
        );

        Ok(Self {
            custom,
            common,
            network_ids,
            numbers,
            separators: config.separators.clone(),
            years: config.years().collect(),
        })
    }

    /// Size of the network-id pool, zero when unset
    #[must_use]
    pub fn network_id_count(&self) -> usize {
        self.network_ids.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            min_year: 2020,
            max_year: 2022,
            common_words: vec!["wifi".to_string()],
            separators: vec!["-".to_string(), "_".to_string()],
            substitutions: BTreeMap::new(),
            number_patterns: vec!["1".to_string(), "d".to_string()],
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn builds_all_pools() {
        let seeds = SeedWords::new(vec!["ab".to_string()], None);
        let pools = WordPools::build(&config(), &seeds).unwrap();

        assert_eq!(pools.custom, vec!["AB", "Ab", "aB", "ab"]);
        assert_eq!(pools.common.len(), 16);
        assert_eq!(pools.network_ids, None);
        assert_eq!(pools.network_id_count(), 0);
        assert_eq!(pools.numbers.len(), 11);
        assert_eq!(pools.years, vec![2020, 2021, 2022]);
        assert_eq!(pools.separators, vec!["-", "_"]);
    }

    #[test]
    fn supplied_ssids_are_expanded() {
        let seeds = SeedWords::new(vec!["x".to_string()], Some(vec!["n".to_string()]));
        let pools = WordPools::build(&config(), &seeds).unwrap();
        assert_eq!(pools.network_ids, Some(vec!["N".to_string(), "n".to_string()]));
    }

    #[test]
    fn empty_custom_words_fail() {
        let seeds = SeedWords::new(Vec::new(), None);
        let err = WordPools::build(&config(), &seeds).unwrap_err();
        assert!(matches!(err, CraftError::EmptyPool(PoolKind::CustomWords)));
    }

    #[test]
    fn supplied_but_empty_ssids_fail() {
        let seeds = SeedWords::new(vec!["x".to_string()], Some(Vec::new()));
        let err = WordPools::build(&config(), &seeds).unwrap_err();
        assert!(matches!(err, CraftError::EmptyPool(PoolKind::NetworkIds)));
    }
}
