//! Prize evaluation for a pick against an actual draw.

use crate::models::{DrawRecord, PayoutResult, Pick, Prize};

/// Score `pick` against `draw` and compute the prize.
///
/// White matches are a set intersection; the red ball is compared on its
/// own. The draw's recorded multiplier applies only when the player bought
/// Power Play, and never to the jackpot.
pub fn evaluate(pick: &Pick, draw: &DrawRecord, power_play: bool) -> PayoutResult {
    let white_matches: Vec<u8> = pick
        .white()
        .iter()
        .filter(|n| draw.white.contains(n))
        .copied()
        .collect();
    let red_match = pick.red() == draw.red;

    let multiplier = if power_play {
        draw.power_play.unwrap_or(1)
    } else {
        1
    };

    let prize = base_prize(red_match, white_matches.len()).multiplied(multiplier);

    PayoutResult {
        white_matches,
        red_match,
        multiplier,
        prize,
    }
}

/// Prize tier before any multiplier.
fn base_prize(red_match: bool, white_matches: usize) -> Prize {
    match (red_match, white_matches) {
        (true, 5) => Prize::Jackpot,
        (false, 5) => Prize::Amount(1_000_000),
        (true, 4) => Prize::Amount(50_000),
        (false, 4) => Prize::Amount(100),
        (true, 3) => Prize::Amount(100),
        (false, 3) => Prize::Amount(7),
        (true, 2) => Prize::Amount(7),
        (true, 1) => Prize::Amount(4),
        _ => Prize::Amount(0),
    }
}
