//! Per-number occurrence counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How often each ball number appeared in a span of history.
///
/// Backed by an ordered map so iteration is always in ascending ball order,
/// which keeps downstream weighted pools stably ordered. Only observed
/// numbers are present; never-drawn numbers are a sampling-time concern,
/// not a counting-time one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMap(BTreeMap<u8, u32>);

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `number`.
    pub fn record(&mut self, number: u8) {
        *self.0.entry(number).or_insert(0) += 1;
    }

    /// Occurrences of `number`; 0 if never observed.
    pub fn count(&self, number: u8) -> u32 {
        self.0.get(&number).copied().unwrap_or(0)
    }

    /// (number, count) pairs in ascending ball order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.0.iter().map(|(&n, &c)| (n, c))
    }

    /// The count values alone, in ascending ball order.
    pub fn counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.values().copied()
    }

    /// (number, count) pairs ranked by descending count, ties broken by
    /// ascending ball number.
    pub fn ranked(&self) -> Vec<(u8, u32)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        pairs
    }

    /// Number of distinct balls observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u8, u32)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (u8, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// White and red frequency maps for one span of history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequencies {
    pub white: FrequencyMap,
    pub red: FrequencyMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut freq = FrequencyMap::new();
        freq.record(7);
        freq.record(7);
        freq.record(12);

        assert_eq!(freq.count(7), 2);
        assert_eq!(freq.count(12), 1);
        assert_eq!(freq.count(1), 0);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_iter_ascending_ball_order() {
        let freq: FrequencyMap = [(30, 1), (2, 5), (17, 3)].into_iter().collect();
        let numbers: Vec<u8> = freq.iter().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![2, 17, 30]);
    }

    #[test]
    fn test_ranked_descending_with_tiebreak() {
        let freq: FrequencyMap = [(5, 2), (9, 4), (3, 2), (1, 1)].into_iter().collect();
        assert_eq!(freq.ranked(), vec![(9, 4), (3, 2), (5, 2), (1, 1)]);
    }

    #[test]
    fn test_empty_map() {
        let freq = FrequencyMap::new();
        assert!(freq.is_empty());
        assert_eq!(freq.count(42), 0);
        assert!(freq.ranked().is_empty());
    }

    #[test]
    fn test_frequency_map_serialization() {
        let freq: FrequencyMap = [(7, 2), (13, 1)].into_iter().collect();
        let json = serde_json::to_string(&freq).unwrap();
        let deserialized: FrequencyMap = serde_json::from_str(&json).unwrap();
        assert_eq!(freq, deserialized);
    }
}
