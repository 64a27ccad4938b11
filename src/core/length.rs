/// Length distribution — cumulative termination-bias curve estimated from
/// observed word lengths.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cumulative, square-root-flattened word-length distribution.
///
/// `cumulative[L]` is the accumulated bias for an in-progress word of length
/// L; it multiplies the terminator weight during sampling so termination gets
/// more likely as a word approaches lengths typical of the source
/// vocabulary. Index 0 is always 0 and the sequence is non-decreasing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthDistribution {
    cumulative: Vec<f64>,
}

impl LengthDistribution {
    /// Estimate the distribution from a set of words.
    ///
    /// Counts char-length occurrences, normalizes against the total word
    /// count, and takes the square root of each increment before
    /// accumulating. The square root compresses the dynamic range so rare
    /// long lengths keep a usable termination bias.
    pub fn from_words<'a, I>(words: I) -> LengthDistribution
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<usize, u64> = HashMap::new();
        let mut total = 0u64;
        for word in words {
            *counts.entry(word.chars().count()).or_insert(0) += 1;
            total += 1;
        }

        let max_length = counts.keys().copied().max().unwrap_or(0);
        let mut cumulative = vec![0.0];
        for length in 1..=max_length {
            let mut value = cumulative[length - 1];
            if let Some(&count) = counts.get(&length) {
                value += (count as f64 / total as f64).sqrt();
            }
            cumulative.push(value);
        }

        LengthDistribution { cumulative }
    }

    /// Termination bias for an in-progress word of the given length,
    /// clamped to the last entry beyond the longest observed length.
    pub fn boost_at(&self, length: usize) -> f64 {
        if length < self.cumulative.len() {
            self.cumulative[length]
        } else {
            self.cumulative[self.cumulative.len() - 1]
        }
    }

    /// Number of entries (max observed length + 1).
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        // Never true: index 0 always exists
        self.cumulative.is_empty()
    }
}
