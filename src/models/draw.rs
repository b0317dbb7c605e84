//! Historical draw records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::WHITE_PICKS;

/// Violations of the structural invariants shared by draws and picks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Ball numbers start at 1, found 0")]
    ZeroBall,

    #[error("Duplicate white ball: {0}")]
    DuplicateWhite(u8),
}

/// One historical Powerball drawing.
///
/// White balls are kept in the order the feed reports them (drawn order);
/// the red ball is the separately-pooled Powerball. `power_play` is the
/// prize multiplier recorded for the draw, absent on draws that predate
/// the Power Play option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDrawRecord")]
pub struct DrawRecord {
    /// Date of the drawing
    pub date: NaiveDate,

    /// The 5 white balls, in drawn order
    pub white: [u8; WHITE_PICKS],

    /// The red Powerball
    pub red: u8,

    /// Power Play multiplier, if one was recorded
    pub power_play: Option<u8>,
}

/// Unvalidated wire shape; deserialization funnels through [`DrawRecord::new`].
#[derive(Deserialize)]
struct RawDrawRecord {
    date: NaiveDate,
    white: [u8; WHITE_PICKS],
    red: u8,
    power_play: Option<u8>,
}

impl TryFrom<RawDrawRecord> for DrawRecord {
    type Error = RecordError;

    fn try_from(raw: RawDrawRecord) -> Result<Self, Self::Error> {
        DrawRecord::new(raw.date, raw.white, raw.red, raw.power_play)
    }
}

impl DrawRecord {
    /// Create a record, enforcing the structural invariants: every ball
    /// number is at least 1 and the 5 white balls are distinct.
    pub fn new(
        date: NaiveDate,
        white: [u8; WHITE_PICKS],
        red: u8,
        power_play: Option<u8>,
    ) -> Result<Self, RecordError> {
        validate_white(&white)?;
        if red == 0 {
            return Err(RecordError::ZeroBall);
        }
        Ok(Self {
            date,
            white,
            red,
            power_play,
        })
    }
}

/// Check that white balls are nonzero and mutually distinct.
pub(crate) fn validate_white(white: &[u8; WHITE_PICKS]) -> Result<(), RecordError> {
    for (i, &n) in white.iter().enumerate() {
        if n == 0 {
            return Err(RecordError::ZeroBall);
        }
        if white[..i].contains(&n) {
            return Err(RecordError::DuplicateWhite(n));
        }
    }
    Ok(())
}
