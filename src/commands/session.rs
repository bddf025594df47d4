//! Generation session
//!
//! Ties validated configuration, seed words and the generation stages
//! together. Everything that can fail on bad input happens in
//! [`Session::prepare`], before the output file exists.

use crate::config::Config;
use crate::core::PatternTemplate;
use crate::counter::{Counter, Estimate};
use crate::error::CraftError;
use crate::generator::{
    CancellationToken, GenerationSummary, JobEnumerator, OutputSink, Pipeline, PipelineSettings,
    ProgressReporter, WordPools,
};
use crate::wordlists::SeedWords;
use std::io::Write;
use tracing::info;

/// A validated run, ready to estimate or generate
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    templates: Vec<PatternTemplate>,
    pools: WordPools,
    workers: Option<usize>,
}

impl Session {
    /// Validate `config` and expand the seed words into pools
    ///
    /// # Errors
    /// Returns a configuration error for invalid bounds or patterns and
    /// `CraftError::EmptyPool` for an empty seed list.
    pub fn prepare(config: Config, seeds: &SeedWords) -> Result<Self, CraftError> {
        config.validate()?;
        let templates = config.templates()?;
        let pools = WordPools::build(&config.generator, seeds)?;

        info!(
            patterns = templates.len(),
            custom = pools.custom.len(),
            common = pools.common.len(),
            ssids = pools.network_id_count(),
            "session prepared"
        );

        Ok(Self {
            config,
            templates,
            pools,
            workers: None,
        })
    }

    /// Override the worker count (defaults to available parallelism)
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Predicted output size, per pattern and in total
    #[must_use]
    pub fn estimate(&self) -> Estimate {
        Counter::from_config(&self.pools, &self.config.generator).estimate(&self.templates)
    }

    /// Stream every candidate into the configured output file
    ///
    /// # Errors
    /// Returns `CraftError::Output` if the file cannot be created or written,
    /// otherwise see [`Pipeline::run`].
    pub fn generate<P>(
        &self,
        cancel: &CancellationToken,
        progress: &P,
    ) -> Result<GenerationSummary, CraftError>
    where
        P: ProgressReporter + ?Sized,
    {
        let path = &self.config.output.path;
        let mut sink = OutputSink::create(path)?;
        info!(path = %path.display(), "writing candidates");
        self.generate_into(&mut sink, cancel, progress)
    }

    /// Stream every candidate into `sink`
    ///
    /// # Errors
    /// See [`Pipeline::run`].
    pub fn generate_into<W, P>(
        &self,
        sink: &mut OutputSink<W>,
        cancel: &CancellationToken,
        progress: &P,
    ) -> Result<GenerationSummary, CraftError>
    where
        W: Write,
        P: ProgressReporter + ?Sized,
    {
        let mut settings = PipelineSettings::new(&self.config.generator, &self.config.output);
        if let Some(workers) = self.workers {
            settings = settings.with_workers(workers);
        }

        let enumerator = JobEnumerator::new(&self.templates, &self.pools);
        Pipeline::new(enumerator, settings).run(sink, cancel, progress)
    }
}
