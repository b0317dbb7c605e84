//! Statistics calculation engine.
//!
//! Computes derived metrics from draw history:
//! - White and red ball frequency counting
//! - Arithmetic and geometric means of frequencies
//! - Median, range, and standard deviation

use serde::{Deserialize, Serialize};

use crate::models::{DrawRecord, Frequencies, FrequencyMap};

/// Count white and red ball occurrences across a span of draws.
pub fn frequencies(records: &[DrawRecord]) -> Frequencies {
    let mut result = Frequencies::default();
    for record in records {
        for &number in &record.white {
            result.white.record(number);
        }
        result.red.record(record.red);
    }
    result
}

/// Arithmetic mean of the observed counts.
pub fn mean(freq: &FrequencyMap) -> f64 {
    if freq.is_empty() {
        return 0.0;
    }
    let sum: u64 = freq.counts().map(u64::from).sum();
    sum as f64 / freq.len() as f64
}

/// Geometric mean of the observed counts, via log-space summation.
/// Zero if any count is zero.
pub fn geometric_mean(freq: &FrequencyMap) -> f64 {
    if freq.is_empty() {
        return 0.0;
    }
    if freq.counts().any(|c| c == 0) {
        return 0.0;
    }
    let log_sum: f64 = freq.counts().map(|c| (c as f64).ln()).sum();
    (log_sum / freq.len() as f64).exp()
}

/// Median of the observed counts. Averages the middle pair for even sizes.
pub fn median(freq: &FrequencyMap) -> f64 {
    if freq.is_empty() {
        return 0.0;
    }
    let mut counts: Vec<u32> = freq.counts().collect();
    counts.sort_unstable();
    let mid = counts.len() / 2;
    if counts.len() % 2 == 0 {
        (counts[mid - 1] as f64 + counts[mid] as f64) / 2.0
    } else {
        counts[mid] as f64
    }
}

/// Smallest and largest observed counts.
pub fn range(freq: &FrequencyMap) -> (u32, u32) {
    let min = freq.counts().min().unwrap_or(0);
    let max = freq.counts().max().unwrap_or(0);
    (min, max)
}

/// Population standard deviation of the observed counts.
pub fn std_dev(freq: &FrequencyMap) -> f64 {
    if freq.is_empty() {
        return 0.0;
    }
    let avg = mean(freq);
    let variance: f64 = freq
        .counts()
        .map(|c| {
            let diff = c as f64 - avg;
            diff * diff
        })
        .sum::<f64>()
        / freq.len() as f64;
    variance.sqrt()
}

/// All summary statistics for one frequency map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencySummary {
    pub mean: f64,
    pub geometric_mean: f64,
    pub median: f64,
    pub min: u32,
    pub max: u32,
    pub std_dev: f64,
}

pub fn summarize(freq: &FrequencyMap) -> FrequencySummary {
    let (min, max) = range(freq);
    FrequencySummary {
        mean: mean(freq),
        geometric_mean: geometric_mean(freq),
        median: median(freq),
        min,
        max,
        std_dev: std_dev(freq),
    }
}
