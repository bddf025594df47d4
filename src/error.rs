//! Error types for configuration, rendering and generation

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A pattern that references placeholders outside the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPattern {
    /// 1-based position in the configured pattern list
    pub index: usize,
    pub pattern: String,
    pub tokens: Vec<String>,
}

impl fmt::Display for InvalidPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pattern {}: {} contains unknown placeholders: {}",
            self.index,
            self.pattern,
            self.tokens.join(", ")
        )
    }
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min year ({min}) cannot be greater than max year ({max})")]
    YearRange { min: i32, max: i32 },
    #[error("year {0} is not a four-digit year")]
    YearDigits(i32),
    #[error("min password length must be at least 1")]
    MinLength,
    #[error("min password length ({min}) cannot be greater than max password length ({max})")]
    LengthRange { min: usize, max: usize },
    #[error("no patterns defined in configuration")]
    NoPatterns,
    #[error("{} pattern(s) contain unknown placeholders", .0.len())]
    UnknownPlaceholders(Vec<InvalidPattern>),
    #[error("output filename cannot be empty")]
    EmptyOutput,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while turning a job into a candidate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("pattern {pattern} needs {needed} separator(s) but only {supplied} were supplied")]
    MissingSeparator {
        pattern: String,
        needed: usize,
        supplied: usize,
    },
}

/// Seed categories that feed variation pools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    CustomWords,
    CommonWords,
    NetworkIds,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CustomWords => write!(f, "custom words"),
            Self::CommonWords => write!(f, "common words"),
            Self::NetworkIds => write!(f, "SSIDs"),
        }
    }
}

/// Top-level error for a generation session
#[derive(Debug, Error)]
pub enum CraftError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no words provided for {0}")]
    EmptyPool(PoolKind),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("generation cancelled after {written} passwords")]
    Cancelled { written: u64 },
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}
