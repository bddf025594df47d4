//! Placeholder catalog
//!
//! The fixed registry of template tokens and the content role each one stands for.

use std::fmt;

/// Semantic role of a template slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Variations of the target-specific seed words
    CustomWord,
    /// Variations of the configured common words
    CommonWord,
    /// Variations of the supplied network names (SSIDs)
    NetworkId,
    /// One value from the separator alphabet, chosen per occurrence
    Separator,
    /// Four-digit year from the configured range
    Year,
    /// Last two digits of the year
    ShortYear,
    /// Literal number from the expanded number patterns
    Number,
}

/// A catalog entry: token text, role and user-facing description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub role: Role,
    pub token: &'static str,
    pub description: &'static str,
}

/// Every placeholder the template language understands, in display order
pub static CATALOG: [Placeholder; 7] = [
    Placeholder {
        role: Role::CustomWord,
        token: "<CUSTOM>",
        description: "Inserts custom word variations from the file specified with the --words flag",
    },
    Placeholder {
        role: Role::CommonWord,
        token: "<COMMON>",
        description: "Inserts common word variations based on the list defined in your config file",
    },
    Placeholder {
        role: Role::NetworkId,
        token: "<SSID>",
        description: "Inserts SSID variations from the file specified with the --ssids flag",
    },
    Placeholder {
        role: Role::Separator,
        token: "<SEP>",
        description: "Inserts separators based on the list defined in your config file",
    },
    Placeholder {
        role: Role::Year,
        token: "<YEAR>",
        description: "Inserts full year based on the range defined in flags or config file (e.g., 2025)",
    },
    Placeholder {
        role: Role::ShortYear,
        token: "<SHORTYEAR>",
        description: "Inserts two-digit year based on the range defined in flags or config file (e.g., 25)",
    },
    Placeholder {
        role: Role::Number,
        token: "<NUM>",
        description: "Inserts numbers based on the list defined in your config file",
    },
];

impl Role {
    /// The catalog entry for this role
    #[must_use]
    pub fn placeholder(self) -> &'static Placeholder {
        let index = match self {
            Self::CustomWord => 0,
            Self::CommonWord => 1,
            Self::NetworkId => 2,
            Self::Separator => 3,
            Self::Year => 4,
            Self::ShortYear => 5,
            Self::Number => 6,
        };
        &CATALOG[index]
    }

    /// Literal token text, e.g. `<SEP>`
    #[inline]
    #[must_use]
    pub fn token(self) -> &'static str {
        self.placeholder().token
    }

    /// Look up a role by its exact token text
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|placeholder| placeholder.token == token)
            .map(|placeholder| placeholder.role)
    }

    /// Whether this role draws from the year range
    #[inline]
    #[must_use]
    pub const fn is_year(self) -> bool {
        matches!(self, Self::Year | Self::ShortYear)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Find every bracketed token (`<` + one or more non-`>` characters + `>`)
///
/// Matches are leftmost and non-overlapping, so `"<<CUSTOM>"` is a single
/// token and therefore not a known one.
#[must_use]
pub fn bracketed_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find('<') {
        let open = cursor + offset;
        let Some(close_offset) = text[open + 1..].find('>') else {
            break;
        };
        let close = open + 1 + close_offset;

        if close == open + 1 {
            // "<>" has nothing between the brackets
            cursor = open + 1;
            continue;
        }

        tokens.push(&text[open..=close]);
        cursor = close + 1;
    }

    tokens
}

/// Bracketed tokens in `text` that are not in the catalog, first occurrence order
#[must_use]
pub fn unknown_tokens(text: &str) -> Vec<String> {
    let mut unknown: Vec<String> = Vec::new();
    for token in bracketed_tokens(text) {
        if Role::from_token(token).is_none() && !unknown.iter().any(|seen| seen == token) {
            unknown.push(token.to_string());
        }
    }
    unknown
}
