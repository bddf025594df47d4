//! Terminal output formatting
//!
//! Banner, tables and summaries for the CLI, plus the progress spinner.

pub mod display;
pub mod formatters;
pub mod progress;

pub use display::{
    print_cancelled, print_estimate, print_intro, print_loaded_words, print_placeholders,
    print_summary,
};
pub use progress::SpinnerProgress;
