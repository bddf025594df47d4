//! Length distributions
//!
//! A distribution maps a string length (in bytes) to the number of
//! values of that length. Concatenating independent choices convolves their
//! distributions: lengths add and counts multiply.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Length → count map with saturating arithmetic
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthDistribution {
    counts: BTreeMap<usize, u128>,
}

impl LengthDistribution {
    /// Distribution of the byte lengths of `values`
    #[must_use]
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        Self::from_lengths(values.iter().map(|value| value.as_ref().len()))
    }

    /// One count per length yielded
    pub fn from_lengths<I: IntoIterator<Item = usize>>(lengths: I) -> Self {
        let mut counts = BTreeMap::new();
        for length in lengths {
            let count: &mut u128 = counts.entry(length).or_default();
            *count = count.saturating_add(1);
        }
        Self { counts }
    }

    /// `count` values, all of the same length
    #[must_use]
    pub fn fixed(length: usize, count: u128) -> Self {
        let mut counts = BTreeMap::new();
        if count > 0 {
            counts.insert(length, count);
        }
        Self { counts }
    }

    /// The empty string, once; the identity for [`convolve`](Self::convolve)
    #[must_use]
    pub fn unit() -> Self {
        Self::fixed(0, 1)
    }

    /// Lengths multiplied by `factor`, counts unchanged
    ///
    /// Models one value repeated `factor` times.
    #[must_use]
    pub fn scaled(&self, factor: usize) -> Self {
        let mut counts = BTreeMap::new();
        for (&length, &count) in &self.counts {
            let entry: &mut u128 = counts.entry(length.saturating_mul(factor)).or_default();
            *entry = entry.saturating_add(count);
        }
        Self { counts }
    }

    /// Distribution of `self` followed by `other`, dropping lengths over `limit`
    #[must_use]
    pub fn convolve(&self, other: &Self, limit: usize) -> Self {
        let mut counts = BTreeMap::new();

        for (&left_len, &left_count) in &self.counts {
            for (&right_len, &right_count) in &other.counts {
                let length = left_len.saturating_add(right_len);
                // Both maps are ordered, so every later right length is larger
                if length > limit {
                    break;
                }
                let entry: &mut u128 = counts.entry(length).or_default();
                *entry = entry.saturating_add(left_count.saturating_mul(right_count));
            }
        }

        Self { counts }
    }

    /// Sum of counts for lengths inside `range`, zero for an empty range
    #[must_use]
    pub fn count_within(&self, range: RangeInclusive<usize>) -> u128 {
        if range.is_empty() {
            return 0;
        }
        self.counts
            .range(range)
            .fold(0u128, |acc, (_, &count)| acc.saturating_add(count))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u128)> + '_ {
        self.counts.iter().map(|(&length, &count)| (length, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: RangeInclusive<usize> = 0..=usize::MAX;

    #[test]
    fn from_values_counts_bytes() {
        // "é" is two bytes in UTF-8
        let dist = LengthDistribution::from_values(&["a", "cd", "é", "xyz"]);
        assert_eq!(dist.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 2), (3, 1)]);
        assert_eq!(dist.count_within(ALL), 4);
    }

    #[test]
    fn fixed_with_zero_count_is_empty() {
        assert!(LengthDistribution::fixed(4, 0).is_empty());
        assert_eq!(LengthDistribution::fixed(4, 3).count_within(ALL), 3);
    }

    #[test]
    fn convolution_adds_lengths_and_multiplies_counts() {
        let left = LengthDistribution::from_values(&["a", "bb"]);
        let right = LengthDistribution::from_values(&["x", "y", "zzz"]);
        let joined = left.convolve(&right, usize::MAX);

        assert_eq!(
            joined.iter().collect::<Vec<_>>(),
            vec![(2, 2), (3, 2), (4, 1), (5, 1)]
        );
        assert_eq!(joined.count_within(ALL), left.count_within(ALL) * right.count_within(ALL));
    }

    #[test]
    fn convolution_prunes_past_limit() {
        let left = LengthDistribution::from_values(&["a", "bbbb"]);
        let right = LengthDistribution::from_values(&["x", "yyyy"]);
        let joined = left.convolve(&right, 5);
        assert_eq!(joined.iter().collect::<Vec<_>>(), vec![(2, 1), (5, 2)]);
    }

    #[test]
    fn unit_is_identity() {
        let dist = LengthDistribution::from_values(&["a", "bb", "bb"]);
        assert_eq!(LengthDistribution::unit().convolve(&dist, usize::MAX), dist);
    }

    #[test]
    fn scaling_models_repetition() {
        let dist = LengthDistribution::from_values(&["ab", "cde"]).scaled(2);
        assert_eq!(dist.iter().collect::<Vec<_>>(), vec![(4, 1), (6, 1)]);
    }

    #[test]
    fn count_within_is_inclusive() {
        let dist = LengthDistribution::from_lengths([1, 2, 2, 3, 4]);
        assert_eq!(dist.count_within(2..=3), 3);
        assert_eq!(dist.count_within(5..=9), 0);
    }

    #[test]
    fn inverted_range_counts_nothing() {
        let dist = LengthDistribution::from_lengths([1, 2, 3]);
        assert_eq!(dist.count_within(3..=1), 0);
    }

    #[test]
    fn counts_saturate() {
        let big = LengthDistribution::fixed(1, u128::MAX);
        let joined = big.convolve(&LengthDistribution::fixed(1, 2), usize::MAX);
        assert_eq!(joined.count_within(ALL), u128::MAX);
    }
}
