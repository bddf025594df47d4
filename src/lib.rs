//! Craftlist
//!
//! Targeted password wordlist generation. Seed words are expanded into spacing,
//! case and substitution variants, combined through placeholder patterns such
//! as `<CUSTOM><SEP><YEAR>`, length-filtered and streamed to a file by a
//! bounded multi-threaded pipeline. An independent counter predicts the output
//! size from length distributions without rendering a single candidate.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use craftlist::commands::Session;
//! use craftlist::config::Config;
//! use craftlist::generator::{CancellationToken, NoProgress};
//! use craftlist::wordlists::SeedWords;
//!
//! let seeds = SeedWords::new(vec!["Evil Corp".to_string()], None);
//! let session = Session::prepare(Config::default(), &seeds).unwrap();
//!
//! println!("Expecting {} passwords", session.estimate().total);
//! let summary = session.generate(&CancellationToken::new(), &NoProgress).unwrap();
//! println!("Wrote {} passwords", summary.written);
//! ```

// Error types
pub mod error;

// Placeholders, templates and jobs
pub mod core;

// Defaults and JSON overlay
pub mod config;

// Seed word loading
pub mod wordlists;

// Spacing, case and substitution expansion
pub mod variations;

// Enumeration and the render pipeline
pub mod generator;

// Output size estimation
pub mod counter;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
