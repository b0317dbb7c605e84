//! Game rule eras and their ball ranges.
//!
//! Powerball has changed its matrix several times since 1992. Each change
//! is an era with an effective date and the ball ranges that applied from
//! that date until the next change. Frequency counting and prediction both
//! resolve the era in force on a given date so that sampled numbers always
//! fall inside the range that was actually playable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::WHITE_PICKS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("Date {date} predates the earliest rule era ({earliest})")]
    OutOfRange {
        date: NaiveDate,
        earliest: NaiveDate,
    },
    #[error("Rule table must contain at least one era")]
    EmptyTable,
    #[error("Rule eras must be strictly ascending by date: {previous} is not before {current}")]
    UnsortedEras {
        previous: NaiveDate,
        current: NaiveDate,
    },
    #[error("Era starting {date} has ranges too small to draw from (white max {white_max}, red max {red_max})")]
    BoundsTooSmall {
        date: NaiveDate,
        white_max: u8,
        red_max: u8,
    },
}

/// Inclusive upper bounds of the two ball pools. Lower bound is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBounds {
    pub white_max: u8,
    pub red_max: u8,
}

/// One rule era: the ranges in force from `effective_from` until the next era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEra {
    pub effective_from: NaiveDate,
    pub bounds: RuleBounds,
}

impl RuleEra {
    pub fn new(effective_from: NaiveDate, white_max: u8, red_max: u8) -> Self {
        Self {
            effective_from,
            bounds: RuleBounds { white_max, red_max },
        }
    }
}

/// Ordered table of rule eras, resolved by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    eras: Vec<RuleEra>,
}

impl RuleTable {
    /// Build a table from eras. Eras must be strictly ascending by date,
    /// and every era must have room for a full draw.
    pub fn new(eras: Vec<RuleEra>) -> Result<Self, RulesError> {
        if eras.is_empty() {
            return Err(RulesError::EmptyTable);
        }
        for pair in eras.windows(2) {
            if pair[0].effective_from >= pair[1].effective_from {
                return Err(RulesError::UnsortedEras {
                    previous: pair[0].effective_from,
                    current: pair[1].effective_from,
                });
            }
        }
        for era in &eras {
            if (era.bounds.white_max as usize) < WHITE_PICKS || era.bounds.red_max < 1 {
                return Err(RulesError::BoundsTooSmall {
                    date: era.effective_from,
                    white_max: era.bounds.white_max,
                    red_max: era.bounds.red_max,
                });
            }
        }
        Ok(Self { eras })
    }

    /// The ranges in force on `date`: the latest era starting on or before it.
    pub fn bounds_for(&self, date: NaiveDate) -> Result<RuleBounds, RulesError> {
        self.eras
            .iter()
            .rev()
            .find(|era| era.effective_from <= date)
            .map(|era| era.bounds)
            .ok_or(RulesError::OutOfRange {
                date,
                earliest: self.earliest(),
            })
    }

    /// First date the table covers.
    pub fn earliest(&self) -> NaiveDate {
        self.eras[0].effective_from
    }

    pub fn eras(&self) -> &[RuleEra] {
        &self.eras
    }
}

impl Default for RuleTable {
    /// The real Powerball matrix history.
    fn default() -> Self {
        let eras = vec![
            era(1992, 4, 22, 45, 45),
            era(1997, 11, 5, 49, 42),
            era(2002, 10, 9, 53, 42),
            era(2005, 8, 28, 55, 42),
            era(2009, 1, 7, 59, 39),
            era(2012, 1, 15, 59, 35),
            era(2015, 10, 7, 69, 26),
        ];
        Self::new(eras).expect("historical rule table is valid")
    }
}

fn era(year: i32, month: u32, day: u32, white_max: u8, red_max: u8) -> RuleEra {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid era date");
    RuleEra::new(date, white_max, red_max)
}
