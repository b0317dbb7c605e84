//! Prize evaluation results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A prize tier outcome.
///
/// The jackpot has no fixed dollar value and is never affected by the
/// Power Play multiplier, so it gets its own variant rather than a
/// sentinel amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prize {
    Amount(u64),
    Jackpot,
}

impl Prize {
    /// Apply a Power Play multiplier. The jackpot is exempt.
    pub fn multiplied(self, multiplier: u8) -> Prize {
        match self {
            Prize::Amount(amount) => Prize::Amount(amount * multiplier as u64),
            Prize::Jackpot => Prize::Jackpot,
        }
    }

    pub fn is_win(&self) -> bool {
        !matches!(self, Prize::Amount(0))
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prize::Amount(amount) => write!(f, "${}", amount),
            Prize::Jackpot => write!(f, "jackpot"),
        }
    }
}

/// Outcome of checking one pick against one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutResult {
    /// White balls from the pick that also appeared in the draw, ascending.
    pub white_matches: Vec<u8>,
    /// Whether the pick's red ball matched the draw's.
    pub red_match: bool,
    /// Multiplier applied to the base prize (1 when Power Play is off).
    pub multiplier: u8,
    /// Final prize after any multiplier.
    pub prize: Prize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_scales_amount() {
        assert_eq!(Prize::Amount(100).multiplied(3), Prize::Amount(300));
        assert_eq!(Prize::Amount(0).multiplied(5), Prize::Amount(0));
    }

    #[test]
    fn test_jackpot_exempt_from_multiplier() {
        assert_eq!(Prize::Jackpot.multiplied(10), Prize::Jackpot);
    }

    #[test]
    fn test_prize_display() {
        assert_eq!(Prize::Amount(7).to_string(), "$7");
        assert_eq!(Prize::Amount(1_000_000).to_string(), "$1000000");
        assert_eq!(Prize::Jackpot.to_string(), "jackpot");
    }

    #[test]
    fn test_is_win() {
        assert!(!Prize::Amount(0).is_win());
        assert!(Prize::Amount(4).is_win());
        assert!(Prize::Jackpot.is_win());
    }
}
