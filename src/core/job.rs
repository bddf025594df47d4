//! Substitution jobs
//!
//! A job is one concrete value choice for every slot of a template. Jobs borrow
//! their values from the word pools, so they are cheap to move across threads.

use super::template::{PatternTemplate, SeparatorPolicy};
use crate::error::RenderError;

/// One concrete assignment for a template
///
/// Roles the template does not use hold the empty string. `year` is `None`
/// when the template has no year slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionJob<'a> {
    pub template: &'a PatternTemplate,
    pub custom: &'a str,
    pub common: &'a str,
    pub network_id: &'a str,
    pub year: Option<i32>,
    pub number: &'a str,
    /// One value per `<SEP>` slot, in slot order
    pub separators: Vec<&'a str>,
}

impl<'a> SubstitutionJob<'a> {
    /// A job with every value empty and no year
    #[must_use]
    pub const fn neutral(template: &'a PatternTemplate) -> Self {
        Self {
            template,
            custom: "",
            common: "",
            network_id: "",
            year: None,
            number: "",
            separators: Vec::new(),
        }
    }

    /// Render this job with its own template
    ///
    /// # Errors
    /// See [`PatternTemplate::render`].
    pub fn render(&self, policy: SeparatorPolicy) -> Result<String, RenderError> {
        self.template.render(self, policy)
    }
}
