//! Job enumeration
//!
//! Each template is a mixed-radix product over its slots: custom word, common
//! word, network id, year, number, then one position per `<SEP>` slot. Roles a
//! template does not use contribute a single neutral value, so they never
//! multiply the job count.

use super::pools::WordPools;
use crate::core::{Odometer, PatternTemplate, Role, SubstitutionJob};
use tracing::debug;

static NEUTRAL: [String; 1] = [String::new()];

/// Enumerates every substitution job for a set of templates
#[derive(Debug, Clone, Copy)]
pub struct JobEnumerator<'a> {
    templates: &'a [PatternTemplate],
    pools: &'a WordPools,
}

impl<'a> JobEnumerator<'a> {
    #[must_use]
    pub const fn new(templates: &'a [PatternTemplate], pools: &'a WordPools) -> Self {
        Self { templates, pools }
    }

    fn values(&self, template: &PatternTemplate, role: Role, pool: &'a [String]) -> &'a [String] {
        if template.contains(role) {
            pool
        } else {
            &NEUTRAL
        }
    }

    /// Jobs for one template, or `None` if it needs SSIDs and none were given
    #[must_use]
    pub fn jobs_for(&self, template: &'a PatternTemplate) -> Option<TemplateJobs<'a>> {
        let pools = self.pools;

        let network_ids: &'a [String] = if template.contains(Role::NetworkId) {
            pools.network_ids.as_deref()?
        } else {
            &NEUTRAL
        };

        let years = template.uses_year().then_some(pools.years.as_slice());

        Some(TemplateJobs::new(
            template,
            self.values(template, Role::CustomWord, &pools.custom),
            self.values(template, Role::CommonWord, &pools.common),
            network_ids,
            years,
            self.values(template, Role::Number, &pools.numbers),
            &pools.separators,
        ))
    }

    /// Every job for every template, in template order
    pub fn jobs(self) -> impl Iterator<Item = SubstitutionJob<'a>> + 'a {
        self.templates.iter().flat_map(move |template| {
            let jobs = self.jobs_for(template);
            if jobs.is_none() {
                debug!(pattern = %template, "skipping pattern, no SSIDs supplied");
            }
            jobs.into_iter().flatten()
        })
    }

    /// Number of jobs a template yields (saturating)
    ///
    /// |custom| × |common| × |ssid| × |years| × |numbers| × |separators|^k over
    /// the roles the template uses; zero for a skipped template.
    #[must_use]
    pub fn combination_count(&self, template: &'a PatternTemplate) -> u128 {
        self.jobs_for(template).map_or(0, |jobs| jobs.total())
    }

    /// Sum of [`combination_count`](Self::combination_count) over all templates
    #[must_use]
    pub fn total_combinations(&self) -> u128 {
        self.templates
            .iter()
            .map(|template| self.combination_count(template))
            .fold(0u128, u128::saturating_add)
    }
}

// Odometer positions
const CUSTOM: usize = 0;
const COMMON: usize = 1;
const NETWORK: usize = 2;
const YEAR: usize = 3;
const NUMBER: usize = 4;
const FIRST_SEPARATOR: usize = 5;

/// Iterator over the jobs of a single template
#[derive(Debug, Clone)]
pub struct TemplateJobs<'a> {
    template: &'a PatternTemplate,
    custom: &'a [String],
    common: &'a [String],
    network_ids: &'a [String],
    years: Option<&'a [i32]>,
    numbers: &'a [String],
    separators: &'a [String],
    odometer: Odometer,
}

impl<'a> TemplateJobs<'a> {
    fn new(
        template: &'a PatternTemplate,
        custom: &'a [String],
        common: &'a [String],
        network_ids: &'a [String],
        years: Option<&'a [i32]>,
        numbers: &'a [String],
        separators: &'a [String],
    ) -> Self {
        let mut radices = vec![
            custom.len(),
            common.len(),
            network_ids.len(),
            years.map_or(1, <[i32]>::len),
            numbers.len(),
        ];
        radices.extend(std::iter::repeat_n(separators.len(), template.separator_count()));

        Self {
            template,
            custom,
            common,
            network_ids,
            years,
            numbers,
            separators,
            odometer: Odometer::new(radices),
        }
    }

    /// Total number of jobs this iterator yields
    #[must_use]
    pub fn total(&self) -> u128 {
        self.odometer.total()
    }
}

impl<'a> Iterator for TemplateJobs<'a> {
    type Item = SubstitutionJob<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            template,
            custom,
            common,
            network_ids,
            years,
            numbers,
            separators,
            ref mut odometer,
        } = *self;
        let choice = odometer.advance()?;

        Some(SubstitutionJob {
            template,
            custom: &custom[choice[CUSTOM]],
            common: &common[choice[COMMON]],
            network_id: &network_ids[choice[NETWORK]],
            year: years.map(|years| years[choice[YEAR]]),
            number: &numbers[choice[NUMBER]],
            separators: choice[FIRST_SEPARATOR..]
                .iter()
                .map(|&pick| separators[pick].as_str())
                .collect(),
        })
    }
}
