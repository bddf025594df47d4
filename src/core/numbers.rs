//! Number pool expansion
//!
//! Number patterns may contain the digit wildcard `d`; each wildcard stands for
//! every decimal digit, so a pattern with k wildcards expands to 10^k strings.

use super::product::Odometer;

/// Marker replaced by each digit 0-9
pub const DIGIT_WILDCARD: char = 'd';

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Expand one number pattern
///
/// # Examples
/// ```
/// use craftlist::core::expand_number_pattern;
///
/// assert_eq!(expand_number_pattern("12"), vec!["12"]);
/// assert_eq!(expand_number_pattern("5d").len(), 10);
/// assert_eq!(expand_number_pattern("dd").len(), 100);
/// ```
#[must_use]
pub fn expand_number_pattern(pattern: &str) -> Vec<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let wildcards: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|&(_, &ch)| ch == DIGIT_WILDCARD)
        .map(|(position, _)| position)
        .collect();

    if wildcards.is_empty() {
        return vec![pattern.to_string()];
    }

    let mut odometer = Odometer::new(vec![DIGITS.len(); wildcards.len()]);
    let mut results = Vec::with_capacity(10usize.pow(wildcards.len().min(6) as u32));
    let mut buffer = chars.clone();

    while let Some(digits) = odometer.advance() {
        for (&position, &digit) in wildcards.iter().zip(digits) {
            buffer[position] = DIGITS[digit];
        }
        results.push(buffer.iter().collect());
    }

    results
}

/// Expand every configured number pattern into one pool
///
/// Expansions are concatenated in pattern order. A number produced by two
/// patterns appears twice.
#[must_use]
pub fn expand_number_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .map(String::as_str)
        .flat_map(expand_number_pattern)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn literal_pattern_passes_through() {
        assert_eq!(expand_number_pattern("1234"), vec!["1234".to_string()]);
    }

    #[test]
    fn single_wildcard_yields_ten_digits() {
        let mut digits = expand_number_pattern("d");
        digits.sort();
        let expected: Vec<String> = (0..10).map(|d| d.to_string()).collect();
        assert_eq!(digits, expected);
    }

    #[test]
    fn two_wildcards_yield_hundred_distinct() {
        let numbers = expand_number_pattern("dd");
        let distinct: FxHashSet<&String> = numbers.iter().collect();
        assert_eq!(numbers.len(), 100);
        assert_eq!(distinct.len(), 100);
        assert!(numbers.iter().all(|n| n.len() == 2));
        assert!(numbers.iter().all(|n| n.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn mixed_pattern_keeps_literal_positions() {
        let numbers = expand_number_pattern("5d");
        assert_eq!(numbers.len(), 10);
        assert!(numbers.iter().all(|n| n.starts_with('5')));
        assert_eq!(numbers.first().map(String::as_str), Some("50"));
        assert_eq!(numbers.last().map(String::as_str), Some("59"));
    }

    #[test]
    fn pool_combines_patterns() {
        let patterns = vec!["12".to_string(), "dd".to_string()];
        let pool = expand_number_patterns(&patterns);
        // "12" also comes out of "dd" and is kept both times
        assert_eq!(pool.len(), 101);
        assert_eq!(pool.first().map(String::as_str), Some("12"));
        assert_eq!(pool.iter().filter(|n| n.as_str() == "12").count(), 2);
    }

    #[test]
    fn empty_pattern_list_gives_empty_pool() {
        assert!(expand_number_patterns(&[]).is_empty());
    }
}
