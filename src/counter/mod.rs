//! Output size estimation
//!
//! Predicts how many candidates a run writes without rendering any of them.
//! Each template becomes a sequence of length distributions (literal text, one
//! per role, one per separator slot) which are convolved left to right, then
//! the counts inside the length bounds are summed.
//!
//! A non-separator role repeated in a template takes the same value at every
//! occurrence, so it contributes one distribution with its lengths scaled by
//! the repetition count. `<YEAR>` and `<SHORTYEAR>` share one year choice and
//! form a single component. Separator slots are independent of each other.

mod distribution;

pub use distribution::LengthDistribution;

use crate::config::GeneratorConfig;
use crate::core::{PatternTemplate, Role, Segment};
use crate::generator::{JobEnumerator, WordPools};
use tracing::{debug, info};

/// Headroom above the maximum length kept while convolving
pub const LENGTH_SLACK: usize = 10;

/// Estimate for one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEstimate {
    pub pattern: String,
    /// Jobs the template yields, ignoring length bounds
    pub combinations: u128,
    /// Candidates within the length bounds
    pub valid: u128,
}

/// Estimate for a whole run, templates in configured order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Estimate {
    pub total: u128,
    pub total_combinations: u128,
    pub patterns: Vec<PatternEstimate>,
}

impl Estimate {
    /// Look up a template by its pattern text
    #[must_use]
    pub fn get(&self, pattern: &str) -> Option<&PatternEstimate> {
        self.patterns.iter().find(|estimate| estimate.pattern == pattern)
    }
}

/// Counts candidates per template from the materialized pools
#[derive(Debug, Clone)]
pub struct Counter<'a> {
    pools: &'a WordPools,
    min_length: usize,
    max_length: usize,
    custom: LengthDistribution,
    common: LengthDistribution,
    network_ids: Option<LengthDistribution>,
    numbers: LengthDistribution,
    separators: LengthDistribution,
}

impl<'a> Counter<'a> {
    #[must_use]
    pub fn new(pools: &'a WordPools, min_length: usize, max_length: usize) -> Self {
        Self {
            pools,
            min_length,
            max_length,
            custom: LengthDistribution::from_values(&pools.custom),
            common: LengthDistribution::from_values(&pools.common),
            network_ids: pools
                .network_ids
                .as_deref()
                .map(LengthDistribution::from_values),
            numbers: LengthDistribution::from_values(&pools.numbers),
            separators: LengthDistribution::from_values(&pools.separators),
        }
    }

    #[must_use]
    pub fn from_config(pools: &'a WordPools, config: &GeneratorConfig) -> Self {
        Self::new(pools, config.min_password_length, config.max_password_length)
    }

    /// Distribution for the shared year choice, rendered `full` times as a
    /// full year and `short` times as a two-digit year
    fn year_distribution(&self, full: usize, short: usize) -> LengthDistribution {
        LengthDistribution::from_lengths(
            self.pools
                .years
                .iter()
                .map(|year| year.to_string().len() * full + 2 * short),
        )
    }

    /// Ordered components of a template, or `None` if it cannot be rendered
    fn components(&self, template: &PatternTemplate) -> Option<Vec<LengthDistribution>> {
        let mut components = Vec::with_capacity(template.segments().len());
        let mut placed: Vec<Role> = Vec::new();

        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => {
                    components.push(LengthDistribution::fixed(text.len(), 1));
                }
                Segment::Slot(Role::Separator) => components.push(self.separators.clone()),
                Segment::Slot(role) if role.is_year() => {
                    if placed.contains(&Role::Year) {
                        continue;
                    }
                    placed.push(Role::Year);
                    components.push(self.year_distribution(
                        template.occurrences(Role::Year),
                        template.occurrences(Role::ShortYear),
                    ));
                }
                Segment::Slot(role) => {
                    if placed.contains(role) {
                        continue;
                    }
                    placed.push(*role);
                    let base = match role {
                        Role::CustomWord => &self.custom,
                        Role::CommonWord => &self.common,
                        Role::NetworkId => self.network_ids.as_ref()?,
                        _ => &self.numbers,
                    };
                    components.push(base.scaled(template.occurrences(*role)));
                }
            }
        }

        Some(components)
    }

    /// Candidates from `template` whose length, in bytes, lies within the
    /// bounds; zero when the bounds are inverted
    ///
    /// # Examples
    /// ```
    /// use craftlist::core::PatternTemplate;
    /// use craftlist::counter::Counter;
    /// use craftlist::generator::WordPools;
    ///
    /// let pools = WordPools {
    ///     custom: vec!["evil".into(), "corp".into()],
    ///     separators: vec!["-".into(), "_".into()],
    ///     years: vec![2025, 2026],
    ///     ..WordPools::default()
    /// };
    /// let template = PatternTemplate::parse("<CUSTOM><SEP><YEAR>").unwrap();
    /// assert_eq!(Counter::new(&pools, 1, 64).count_valid(&template), 8);
    /// ```
    #[must_use]
    pub fn count_valid(&self, template: &PatternTemplate) -> u128 {
        if self.min_length > self.max_length {
            return 0;
        }
        let Some(components) = self.components(template) else {
            return 0;
        };

        let limit = self.max_length.saturating_add(LENGTH_SLACK);
        let mut running = LengthDistribution::unit();
        for component in &components {
            running = running.convolve(component, limit);
            if running.is_empty() {
                return 0;
            }
        }

        running.count_within(self.min_length..=self.max_length)
    }

    /// Jobs `template` yields, ignoring length bounds
    #[must_use]
    pub fn combinations(&self, template: &PatternTemplate) -> u128 {
        JobEnumerator::new(std::slice::from_ref(template), self.pools).combination_count(template)
    }

    /// Per-template and total estimates
    #[must_use]
    pub fn estimate(&self, templates: &[PatternTemplate]) -> Estimate {
        let mut estimate = Estimate::default();

        for template in templates {
            let pattern = PatternEstimate {
                pattern: template.source().to_string(),
                combinations: self.combinations(template),
                valid: self.count_valid(template),
            };
            debug!(
                pattern = %template,
                combinations = %pattern.combinations,
                valid = %pattern.valid,
                "estimated pattern"
            );

            estimate.total = estimate.total.saturating_add(pattern.valid);
            estimate.total_combinations =
                estimate.total_combinations.saturating_add(pattern.combinations);
            estimate.patterns.push(pattern);
        }

        info!(
            patterns = templates.len(),
            total = %estimate.total,
            combinations = %estimate.total_combinations,
            "estimated output size"
        );
        estimate
    }
}
