//! Built-in generator defaults
//!
//! Used whenever the JSON config file is absent or leaves a field empty.

use chrono::Datelike;
use std::collections::BTreeMap;

pub const DEFAULT_MIN_YEAR: i32 = 1990;
pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 64;
pub const DEFAULT_OUTPUT: &str = "passwords.txt";

/// Words with more case-distinct letters than this skip full case expansion
pub const DEFAULT_MAX_CASE_LETTERS: usize = 12;

/// Words with more substitution combinations than this get single-position
/// substitutions only
pub const DEFAULT_MAX_SUBSTITUTION_VARIANTS: u64 = 100_000;

/// The current calendar year, the default upper bound of the year range
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[must_use]
pub fn common_words() -> Vec<String> {
    [
        "password", "admin", "guest", "wifi", "wireless", "IT", "tech", "pass", "login", "user",
        "root", "default", "access", "network", "internet", "secure", "temp", "test",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[must_use]
pub fn separators() -> Vec<String> {
    [
        "", "@", "_", "-", ".", "#", "!", "*", "+", "~", "%", "&", "^",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[must_use]
pub fn substitutions() -> BTreeMap<char, Vec<String>> {
    let table: [(char, &[&str]); 29] = [
        ('a', &["4", "@", "^"]),
        ('A', &["4", "@", "^"]),
        ('b', &["6"]),
        ('B', &["8"]),
        ('c', &["<", "("]),
        ('C', &["<", "("]),
        ('D', &[")"]),
        ('e', &["3"]),
        ('E', &["3"]),
        ('g', &["9", "6", "&"]),
        ('G', &["9", "6", "&"]),
        ('h', &["#"]),
        ('H', &["#"]),
        ('i', &["1", "!", "|"]),
        ('I', &["1", "!", "|"]),
        ('l', &["1", "|", "7", "2"]),
        ('L', &["1", "|", "7", "2"]),
        ('o', &["0"]),
        ('O', &["0"]),
        ('p', &["9"]),
        ('P', &["9"]),
        ('q', &["9", "2", "&"]),
        ('Q', &["9", "2", "&"]),
        ('s', &["5", "$"]),
        ('S', &["5", "$"]),
        ('t', &["7", "+"]),
        ('T', &["7", "+"]),
        ('z', &["2"]),
        ('Z', &["2"]),
    ];

    table
        .into_iter()
        .map(|(ch, subs)| (ch, subs.iter().map(|&s| s.to_string()).collect()))
        .collect()
}

#[must_use]
pub fn number_patterns() -> Vec<String> {
    ["d", "dd", "ddd", "dddd", "12345", "123456"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[must_use]
pub fn patterns() -> Vec<String> {
    [
        "<CUSTOM>",
        "<COMMON>",
        "<SSID>",
        "<CUSTOM><SEP><YEAR>",
        "<CUSTOM><SEP><SHORTYEAR>",
        "<CUSTOM><SEP><NUM>",
        "<CUSTOM><SEP><COMMON>",
        "<COMMON><SEP><YEAR>",
        "<COMMON><SEP><SHORTYEAR>",
        "<COMMON><SEP><NUM>",
        "<COMMON><SEP><CUSTOM>",
        "<SSID><SEP><YEAR>",
        "<SSID><SEP><SHORTYEAR>",
        "<SSID><SEP><NUM>",
        "<SSID><SEP><CUSTOM>",
        "<YEAR><SEP><CUSTOM>",
        "<YEAR><SEP><COMMON>",
        "<YEAR><SEP><SSID>",
        "<SHORTYEAR><SEP><CUSTOM>",
        "<SHORTYEAR><SEP><COMMON>",
        "<SHORTYEAR><SEP><SSID>",
        "<NUM><SEP><CUSTOM>",
        "<NUM><SEP><COMMON>",
        "<NUM><SEP><SSID>",
        "<SEP><CUSTOM><SEP><SSID><SEP><YEAR>",
        "<COMMON><SEP><CUSTOM><YEAR>",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
