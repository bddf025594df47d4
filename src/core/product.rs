//! Iterative Cartesian product over index vectors
//!
//! Every exhaustive expansion in the crate (case variants, substitutions,
//! digit wildcards, separator tuples, job slots) is a product of independent
//! choices. [`Odometer`] walks such a product without recursion: it keeps one
//! index per position and advances the last position first, carrying into the
//! previous one when it wraps.

/// Mixed-radix counter over a fixed number of positions
///
/// Position `i` ranges over `0..radices[i]`. The sequence starts at all zeros
/// and ends after the all-maximum tuple. An odometer with no positions yields
/// exactly one empty tuple; an odometer with any zero radix yields nothing.
#[derive(Debug, Clone)]
pub struct Odometer {
    radices: Vec<usize>,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Odometer {
    /// Create an odometer over the given radices
    #[must_use]
    pub fn new(radices: Vec<usize>) -> Self {
        let exhausted = radices.contains(&0);
        Self {
            indices: vec![0; radices.len()],
            radices,
            started: false,
            exhausted,
        }
    }

    /// Number of tuples the odometer produces in total (saturating)
    #[must_use]
    pub fn total(&self) -> u128 {
        self.radices
            .iter()
            .fold(1u128, |acc, &radix| acc.saturating_mul(radix as u128))
    }

    /// Advance to the next tuple, borrowing the index vector
    ///
    /// Avoids allocating when the caller only needs to read the indices.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }

        if self.started {
            let mut position = self.indices.len();
            loop {
                if position == 0 {
                    self.exhausted = true;
                    return None;
                }
                position -= 1;
                self.indices[position] += 1;
                if self.indices[position] < self.radices[position] {
                    break;
                }
                // Carry
                self.indices[position] = 0;
            }
        } else {
            self.started = true;
        }

        Some(&self.indices)
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odometer_walks_last_position_fastest() {
        let tuples: Vec<Vec<usize>> = Odometer::new(vec![2, 3]).collect();
        assert_eq!(
            tuples,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn odometer_without_positions_yields_one_empty_tuple() {
        let tuples: Vec<Vec<usize>> = Odometer::new(Vec::new()).collect();
        assert_eq!(tuples, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn odometer_with_zero_radix_is_empty() {
        assert_eq!(Odometer::new(vec![3, 0, 2]).count(), 0);
    }

    #[test]
    fn odometer_total_matches_count() {
        let odometer = Odometer::new(vec![4, 1, 3, 2]);
        assert_eq!(odometer.total(), 24);
        assert_eq!(odometer.count(), 24);
    }

    #[test]
    fn odometer_total_saturates() {
        let odometer = Odometer::new(vec![usize::MAX; 8]);
        assert_eq!(odometer.total(), u128::MAX);
    }
}
