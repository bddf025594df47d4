//! Core domain types for pattern-driven generation
//!
//! Placeholder catalog, parsed templates, substitution jobs and the iterative
//! product helpers they are built on. Nothing here performs I/O.

mod job;
mod numbers;
mod placeholder;
mod product;
mod template;

pub use job::SubstitutionJob;
pub use numbers::{DIGIT_WILDCARD, expand_number_pattern, expand_number_patterns};
pub use placeholder::{CATALOG, Placeholder, Role, bracketed_tokens, unknown_tokens};
pub use product::Odometer;
pub use template::{PatternTemplate, Segment, SeparatorPolicy};
