//! Pattern templates and rendering
//!
//! A template is parsed once into an ordered list of segments. Rendering a
//! [`SubstitutionJob`] walks those segments, so substituted values are never
//! scanned for tokens a second time.

use super::job::SubstitutionJob;
use super::placeholder::{CATALOG, Role, unknown_tokens};
use crate::error::{ConfigError, InvalidPattern, RenderError};
use std::fmt;

/// What to do when a template has more `<SEP>` tokens than the job supplies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeparatorPolicy {
    /// Leave the surplus tokens in the output literally
    #[default]
    Legacy,
    /// Refuse to render the job
    Strict,
}

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Slot(Role),
}

/// A validated pattern such as `<CUSTOM><SEP><YEAR>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PatternTemplate {
    /// Parse a single pattern
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownPlaceholders` if the pattern contains a
    /// bracketed token that is not in the catalog.
    ///
    /// # Examples
    /// ```
    /// use craftlist::core::{PatternTemplate, Role};
    ///
    /// let template = PatternTemplate::parse("<CUSTOM><SEP><YEAR>!").unwrap();
    /// assert_eq!(template.separator_count(), 1);
    /// assert!(template.contains(Role::Year));
    /// assert!(PatternTemplate::parse("<CUSTOM><NOPE>").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Self::parse_at(1, source).map_err(|invalid| ConfigError::UnknownPlaceholders(vec![invalid]))
    }

    /// Parse every configured pattern, reporting all invalid ones together
    ///
    /// # Errors
    /// Returns `ConfigError::NoPatterns` for an empty list, or
    /// `ConfigError::UnknownPlaceholders` listing each offending pattern.
    pub fn parse_all(patterns: &[String]) -> Result<Vec<Self>, ConfigError> {
        if patterns.is_empty() {
            return Err(ConfigError::NoPatterns);
        }

        let mut templates = Vec::with_capacity(patterns.len());
        let mut invalid = Vec::new();

        for (idx, pattern) in patterns.iter().enumerate() {
            match Self::parse_at(idx + 1, pattern) {
                Ok(template) => templates.push(template),
                Err(issue) => invalid.push(issue),
            }
        }

        if invalid.is_empty() {
            Ok(templates)
        } else {
            Err(ConfigError::UnknownPlaceholders(invalid))
        }
    }

    fn parse_at(index: usize, source: &str) -> Result<Self, InvalidPattern> {
        let unknown = unknown_tokens(source);
        if !unknown.is_empty() {
            return Err(InvalidPattern {
                index,
                pattern: source.to_string(),
                tokens: unknown,
            });
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(ch) = rest.chars().next() {
            let slot = CATALOG
                .iter()
                .find(|placeholder| rest.starts_with(placeholder.token));

            if let Some(placeholder) = slot {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Slot(placeholder.role));
                rest = &rest[placeholder.token.len()..];
            } else {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The pattern text as configured
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Ordered literal runs and slots
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of slots with the given role
    #[must_use]
    pub fn occurrences(&self, role: Role) -> usize {
        self.segments
            .iter()
            .filter(|segment| **segment == Segment::Slot(role))
            .count()
    }

    /// Whether the role appears at least once
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.occurrences(role) > 0
    }

    /// Number of `<SEP>` slots
    #[must_use]
    pub fn separator_count(&self) -> usize {
        self.occurrences(Role::Separator)
    }

    /// Whether the template draws a year (full or short)
    #[must_use]
    pub fn uses_year(&self) -> bool {
        self.contains(Role::Year) || self.contains(Role::ShortYear)
    }

    /// Render one job into a candidate password
    ///
    /// Non-separator slots take the job's value for their role at every
    /// occurrence. Year slots stay literal when the job carries no year.
    /// Separator slots consume the job's separators left to right.
    ///
    /// # Errors
    /// Under `SeparatorPolicy::Strict`, returns `RenderError::MissingSeparator`
    /// when the job has fewer separators than the template has slots.
    pub fn render(
        &self,
        job: &SubstitutionJob<'_>,
        policy: SeparatorPolicy,
    ) -> Result<String, RenderError> {
        let mut output = String::with_capacity(self.source.len() + 16);
        let mut separators = job.separators.iter();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Slot(role) => match role {
                    Role::CustomWord => output.push_str(job.custom),
                    Role::CommonWord => output.push_str(job.common),
                    Role::NetworkId => output.push_str(job.network_id),
                    Role::Number => output.push_str(job.number),
                    Role::Year | Role::ShortYear => match job.year {
                        Some(year) => push_year(&mut output, year, *role),
                        None => output.push_str(role.token()),
                    },
                    Role::Separator => match separators.next() {
                        Some(separator) => output.push_str(separator),
                        None if policy == SeparatorPolicy::Strict => {
                            return Err(RenderError::MissingSeparator {
                                pattern: self.source.clone(),
                                needed: self.separator_count(),
                                supplied: job.separators.len(),
                            });
                        }
                        None => output.push_str(role.token()),
                    },
                },
            }
        }

        Ok(output)
    }
}

fn push_year(output: &mut String, year: i32, role: Role) {
    use std::fmt::Write;

    let result = if role == Role::ShortYear {
        write!(output, "{:02}", year.rem_euclid(100))
    } else {
        write!(output, "{year}")
    };
    debug_assert!(result.is_ok(), "writing to a String cannot fail");
}

impl fmt::Display for PatternTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
