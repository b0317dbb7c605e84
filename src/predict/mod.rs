//! Frequency-weighted number prediction.
//!
//! Builds a weighted pool per ball pool from historical frequencies, then
//! samples without replacement. Every in-range number carries its observed
//! count plus one, so numbers with no history remain selectable while
//! frequent numbers are proportionally favored. Weights are integers and
//! the cumulative walk stays in integer arithmetic, so selection has no
//! rounding bias.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

use crate::models::{FrequencyMap, Pick, RecordError, WHITE_PICKS};
use crate::rules::{RuleTable, RulesError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("Rules error: {0}")]
    Rules(#[from] RulesError),
    #[error("Pool exhausted: needed {needed} numbers, only {available} available")]
    InsufficientPool { needed: usize, available: usize },
    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}

/// Transient sampling pool mapping each candidate number to its weight.
///
/// Ordered by number so the cumulative walk visits candidates in a stable
/// order. Drawn numbers are removed by key, and the running total shrinks
/// with them. Built fresh for each pick and discarded afterwards.
struct WeightedPool {
    weights: BTreeMap<u8, u64>,
    total: u64,
}

impl WeightedPool {
    /// Pool over `1..=max` with weight = observed frequency + 1.
    fn from_frequencies(freq: &FrequencyMap, max: u8) -> Self {
        let mut weights = BTreeMap::new();
        let mut total = 0u64;
        for number in 1..=max {
            let weight = u64::from(freq.count(number)) + 1;
            weights.insert(number, weight);
            total += weight;
        }
        Self { weights, total }
    }

    fn len(&self) -> usize {
        self.weights.len()
    }

    /// Draw one number with probability proportional to its weight and
    /// remove it from the pool. `None` once the pool is empty.
    fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<u8> {
        if self.weights.is_empty() {
            return None;
        }
        // All weights are >= 1, so total > 0 whenever the pool is non-empty.
        let mut remaining = rng.gen_range(0..self.total);
        let mut selected = None;
        for (&number, &weight) in &self.weights {
            if remaining < weight {
                selected = Some(number);
                break;
            }
            remaining -= weight;
        }
        let number = selected.expect("cumulative walk covers the full weight range");
        let weight = self
            .weights
            .remove(&number)
            .expect("selected number is present in the pool");
        self.total -= weight;
        Some(number)
    }
}

/// Generate `count` independent picks weighted by historical frequency.
///
/// Each pick draws 5 distinct white numbers without replacement and 1 red
/// number from its own separate pool. Pools are rebuilt between picks, so
/// picks are independent and may repeat numbers across picks. Ranges come
/// from the rule era in force on `as_of`.
pub fn predict<R: Rng>(
    rules: &RuleTable,
    white: &FrequencyMap,
    red: &FrequencyMap,
    as_of: NaiveDate,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Pick>, PredictError> {
    let bounds = rules.bounds_for(as_of)?;

    let mut picks = Vec::with_capacity(count);
    for _ in 0..count {
        let mut white_pool = WeightedPool::from_frequencies(white, bounds.white_max);
        if white_pool.len() < WHITE_PICKS {
            return Err(PredictError::InsufficientPool {
                needed: WHITE_PICKS,
                available: white_pool.len(),
            });
        }

        let mut numbers = [0u8; WHITE_PICKS];
        for slot in numbers.iter_mut() {
            *slot = white_pool.draw(rng).ok_or(PredictError::InsufficientPool {
                needed: WHITE_PICKS,
                available: 0,
            })?;
        }

        let mut red_pool = WeightedPool::from_frequencies(red, bounds.red_max);
        let red_ball = red_pool.draw(rng).ok_or(PredictError::InsufficientPool {
            needed: 1,
            available: 0,
        })?;

        picks.push(Pick::new(numbers, red_ball)?);
    }

    Ok(picks)
}
