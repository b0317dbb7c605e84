//! Played or predicted number sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::draw::{validate_white, RecordError};

/// White balls drawn (and played) per drawing.
pub const WHITE_PICKS: usize = 5;

/// A set of numbers to play: 5 distinct white balls plus the red Powerball.
///
/// Whites are held in ascending order regardless of construction order, so
/// two picks of the same numbers compare equal. Invariants match
/// [`DrawRecord`](super::DrawRecord): balls are nonzero, whites distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPick")]
pub struct Pick {
    white: [u8; WHITE_PICKS],
    red: u8,
}

/// Unvalidated wire shape; deserialization funnels through [`Pick::new`].
#[derive(Deserialize)]
struct RawPick {
    white: [u8; WHITE_PICKS],
    red: u8,
}

impl TryFrom<RawPick> for Pick {
    type Error = RecordError;

    fn try_from(raw: RawPick) -> Result<Self, Self::Error> {
        Pick::new(raw.white, raw.red)
    }
}

impl Pick {
    /// Create a pick. Whites are sorted ascending; duplicates and zero
    /// ball numbers are rejected.
    pub fn new(mut white: [u8; WHITE_PICKS], red: u8) -> Result<Self, RecordError> {
        validate_white(&white)?;
        if red == 0 {
            return Err(RecordError::ZeroBall);
        }
        white.sort_unstable();
        Ok(Self { white, red })
    }

    /// The 5 white balls, ascending.
    pub fn white(&self) -> &[u8; WHITE_PICKS] {
        &self.white
    }

    /// The red Powerball.
    pub fn red(&self) -> u8 {
        self.red
    }
}

impl fmt::Display for Pick {
    /// Zero-padded ticket layout: the 5 whites, then the red set apart.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.white;
        write!(
            f,
            "{:02} {:02} {:02} {:02} {:02}  {:02}",
            a, b, c, d, e, self.red
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_sorts_whites() {
        let pick = Pick::new([41, 1, 18, 46, 43], 22).unwrap();
        assert_eq!(pick.white(), &[1, 18, 41, 43, 46]);
        assert_eq!(pick.red(), 22);
    }

    #[test]
    fn test_pick_equality_ignores_input_order() {
        let a = Pick::new([1, 2, 3, 4, 5], 6).unwrap();
        let b = Pick::new([5, 4, 3, 2, 1], 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_rejects_duplicates() {
        assert_eq!(
            Pick::new([7, 7, 3, 4, 5], 6).unwrap_err(),
            RecordError::DuplicateWhite(7)
        );
    }

    #[test]
    fn test_pick_rejects_zero() {
        assert_eq!(Pick::new([0, 2, 3, 4, 5], 6).unwrap_err(), RecordError::ZeroBall);
        assert_eq!(Pick::new([1, 2, 3, 4, 5], 0).unwrap_err(), RecordError::ZeroBall);
    }

    #[test]
    fn test_pick_display_zero_padded() {
        let pick = Pick::new([1, 18, 41, 43, 46], 9).unwrap();
        assert_eq!(pick.to_string(), "01 18 41 43 46  09");
    }

    #[test]
    fn test_pick_serialization() {
        let pick = Pick::new([1, 18, 41, 43, 46], 22).unwrap();
        let json = serde_json::to_string(&pick).unwrap();
        let deserialized: Pick = serde_json::from_str(&json).unwrap();
        assert_eq!(pick, deserialized);
    }

    #[test]
    fn test_pick_deserialization_validates() {
        let result: Result<Pick, _> = serde_json::from_str(r#"{"white":[7,7,3,4,5],"red":6}"#);
        assert!(result.is_err());

        let sorted: Pick = serde_json::from_str(r#"{"white":[5,4,3,2,1],"red":6}"#).unwrap();
        assert_eq!(sorted.white(), &[1, 2, 3, 4, 5]);
    }
}
