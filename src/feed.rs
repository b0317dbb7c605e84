//! Parsing of the published winning-numbers text feed.
//!
//! The feed is plain text: one header line, then one line per draw with
//! whitespace-separated fields in the order date, five white balls, red
//! ball, and an optional Power Play multiplier. Dates are MM/DD/YYYY and
//! ball numbers are zero-padded.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{DrawRecord, RecordError, WHITE_PICKS};

/// Date + five whites + red. The multiplier is an optional eighth field.
const FEED_FIELDS: usize = 1 + WHITE_PICKS + 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("Line {line}: expected 7 or 8 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("Line {line}: invalid date '{value}'")]
    InvalidDate { line: usize, value: String },
    #[error("Line {line}: invalid ball number '{value}'")]
    InvalidNumber { line: usize, value: String },
    #[error("Line {line}: {source}")]
    Record { line: usize, source: RecordError },
}

/// Parse the raw feed body into draw records, in feed order.
///
/// The first line is the column header and is always skipped. Blank lines
/// are ignored. Line numbers in errors are 1-based and count the header.
pub fn parse_feed(text: &str) -> Result<Vec<DrawRecord>, FeedError> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if line_number == 1 || line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, line_number)?);
    }

    Ok(records)
}

fn parse_line(line: &str, line_number: usize) -> Result<DrawRecord, FeedError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < FEED_FIELDS || fields.len() > FEED_FIELDS + 1 {
        return Err(FeedError::FieldCount {
            line: line_number,
            found: fields.len(),
        });
    }

    let date = NaiveDate::parse_from_str(fields[0], "%m/%d/%Y").map_err(|_| {
        FeedError::InvalidDate {
            line: line_number,
            value: fields[0].to_string(),
        }
    })?;

    let mut white = [0u8; WHITE_PICKS];
    for (slot, field) in white.iter_mut().zip(&fields[1..=WHITE_PICKS]) {
        *slot = parse_ball(field, line_number)?;
    }
    let red = parse_ball(fields[FEED_FIELDS - 1], line_number)?;
    let power_play = match fields.get(FEED_FIELDS) {
        Some(field) => Some(parse_ball(field, line_number)?),
        None => None,
    };

    DrawRecord::new(date, white, red, power_play).map_err(|source| FeedError::Record {
        line: line_number,
        source,
    })
}

fn parse_ball(field: &str, line_number: usize) -> Result<u8, FeedError> {
    field.parse().map_err(|_| FeedError::InvalidNumber {
        line: line_number,
        value: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Draw Date   WB1 WB2 WB3 WB4 WB5 PB  PP\r\n\
        06/14/2023  02  12  33  47  62  09  3\r\n\
        06/10/2023  05  12  20  24  60  18\r\n\
        \r\n\
        06/07/2023  11  23  35  40  47  03  2\r\n";

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parses_feed_with_header_and_blanks() {
        let records = parse_feed(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].date, date(2023, 6, 14));
        assert_eq!(records[0].white, [2, 12, 33, 47, 62]);
        assert_eq!(records[0].red, 9);
        assert_eq!(records[0].power_play, Some(3));

        assert_eq!(records[2].date, date(2023, 6, 7));
        assert_eq!(records[2].power_play, Some(2));
    }

    #[test]
    fn test_multiplier_is_optional() {
        let records = parse_feed(SAMPLE).unwrap();
        assert_eq!(records[1].power_play, None);
    }

    #[test]
    fn test_empty_feed_yields_no_records() {
        assert_eq!(parse_feed("").unwrap(), vec![]);
        assert_eq!(parse_feed("Draw Date   WB1\r\n").unwrap(), vec![]);
    }

    #[test]
    fn test_rejects_short_line() {
        let text = "header\n06/14/2023  02  12  33\n";
        assert_eq!(
            parse_feed(text),
            Err(FeedError::FieldCount { line: 2, found: 4 })
        );
    }

    #[test]
    fn test_rejects_bad_date() {
        let text = "header\n2023-06-14  02  12  33  47  62  09\n";
        assert_eq!(
            parse_feed(text),
            Err(FeedError::InvalidDate {
                line: 2,
                value: "2023-06-14".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_non_numeric_ball() {
        let text = "header\n06/14/2023  02  twelve  33  47  62  09\n";
        assert_eq!(
            parse_feed(text),
            Err(FeedError::InvalidNumber {
                line: 2,
                value: "twelve".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_white_with_line_number() {
        let text = "header\n06/14/2023  02  12  33  47  62  09  3\n06/10/2023  05  05  20  24  60  18\n";
        assert_eq!(
            parse_feed(text),
            Err(FeedError::Record {
                line: 3,
                source: RecordError::DuplicateWhite(5)
            })
        );
    }

    #[test]
    fn test_unix_line_endings_accepted() {
        let text = "header\n06/14/2023  02  12  33  47  62  09  3\n";
        let records = parse_feed(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].red, 9);
    }
}
