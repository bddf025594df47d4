//! Generator configuration
//!
//! Built-in defaults, an optional JSON overlay and validation. The overlay
//! replaces a list only when the file supplies a non-empty one, so a config
//! file can tweak a single field and inherit the rest.

pub mod defaults;

use crate::core::{PatternTemplate, SeparatorPolicy};
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything the generation core needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub min_year: i32,
    pub max_year: i32,
    pub min_password_length: usize,
    pub max_password_length: usize,
    pub common_words: Vec<String>,
    pub separators: Vec<String>,
    pub substitutions: BTreeMap<char, Vec<String>>,
    pub number_patterns: Vec<String>,
    pub patterns: Vec<String>,
    /// Upper bound on case-distinct letters for full case expansion
    pub max_case_letters: usize,
    /// Upper bound on the substitution cross-product of one word
    pub max_substitution_variants: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_year: defaults::DEFAULT_MIN_YEAR,
            max_year: defaults::current_year(),
            min_password_length: defaults::DEFAULT_MIN_LENGTH,
            max_password_length: defaults::DEFAULT_MAX_LENGTH,
            common_words: defaults::common_words(),
            separators: defaults::separators(),
            substitutions: defaults::substitutions(),
            number_patterns: defaults::number_patterns(),
            patterns: defaults::patterns(),
            max_case_letters: defaults::DEFAULT_MAX_CASE_LETTERS,
            max_substitution_variants: defaults::DEFAULT_MAX_SUBSTITUTION_VARIANTS,
        }
    }
}

impl GeneratorConfig {
    /// The closed year range
    #[must_use]
    pub const fn years(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }
}

/// Where and how generated candidates are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub path: PathBuf,
    /// Drop candidates already written earlier in the run
    pub dedup: bool,
    pub separator_policy: SeparatorPolicy,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DEFAULT_OUTPUT),
            dedup: false,
            separator_policy: SeparatorPolicy::Legacy,
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub output: OutputSettings,
}

/// Fields a JSON config file may override
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    common_words: Option<Vec<String>>,
    separators: Option<Vec<String>>,
    number_patterns: Option<Vec<String>>,
    substitutions: Option<BTreeMap<char, Vec<String>>>,
    patterns: Option<Vec<String>>,
    max_case_letters: Option<usize>,
    max_substitution_variants: Option<u64>,
}

fn replace_if_present<T>(target: &mut Vec<T>, value: Option<Vec<T>>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *target = value;
    }
}

impl Config {
    /// Load defaults, overlaid with the JSON file at `path` if one is given
    ///
    /// # Errors
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if it is not valid JSON of the expected shape.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded config overlay");
        Ok(config)
    }

    /// Defaults overlaid with a JSON document
    ///
    /// # Errors
    /// Returns the JSON error if the document does not parse.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let overlay: ConfigOverlay = serde_json::from_str(json)?;
        let mut config = Self::default();
        config.apply(overlay);
        Ok(config)
    }

    fn apply(&mut self, overlay: ConfigOverlay) {
        let generator = &mut self.generator;
        replace_if_present(&mut generator.common_words, overlay.common_words);
        replace_if_present(&mut generator.separators, overlay.separators);
        replace_if_present(&mut generator.number_patterns, overlay.number_patterns);
        replace_if_present(&mut generator.patterns, overlay.patterns);

        if let Some(substitutions) = overlay.substitutions.filter(|s| !s.is_empty()) {
            generator.substitutions = substitutions;
        }
        if let Some(limit) = overlay.max_case_letters {
            generator.max_case_letters = limit;
        }
        if let Some(limit) = overlay.max_substitution_variants {
            generator.max_substitution_variants = limit;
        }
    }

    /// Check bounds, output path and every pattern
    ///
    /// # Errors
    /// Returns the first failed check; unknown placeholders are reported for
    /// all patterns at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let generator = &self.generator;

        if generator.min_year > generator.max_year {
            return Err(ConfigError::YearRange {
                min: generator.min_year,
                max: generator.max_year,
            });
        }

        for year in [generator.min_year, generator.max_year] {
            if !(1000..=9999).contains(&year) {
                return Err(ConfigError::YearDigits(year));
            }
        }

        if generator.min_password_length > generator.max_password_length {
            return Err(ConfigError::LengthRange {
                min: generator.min_password_length,
                max: generator.max_password_length,
            });
        }

        if generator.min_password_length < 1 {
            return Err(ConfigError::MinLength);
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutput);
        }

        self.templates().map(|_| ())
    }

    /// Parse every configured pattern
    ///
    /// # Errors
    /// See [`PatternTemplate::parse_all`].
    pub fn templates(&self) -> Result<Vec<PatternTemplate>, ConfigError> {
        PatternTemplate::parse_all(&self.generator.patterns)
    }
}
