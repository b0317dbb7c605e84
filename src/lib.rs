//! # Powerpick
//!
//! A Powerball draw-history analyzer with frequency-weighted predictions.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (draws, picks, frequencies, prizes)
//! - **feed**: Parsing of the published winning-numbers text feed
//! - **fetch**: Draw-history retrieval over HTTP
//! - **rules**: Game rule eras and their ball ranges
//! - **calculate**: Frequency counting and summary statistics
//! - **predict**: Weighted sampling of future picks
//! - **payout**: Prize evaluation against actual draws
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod feed;
pub mod fetch;
pub mod models;
pub mod payout;
pub mod predict;
pub mod rules;

pub use models::*;

use chrono::NaiveDate;

/// Parse a date in ISO form ("2023-06-14") or the feed's US form
/// ("06/14/2023").
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(
            parse_date("2023-06-14"),
            NaiveDate::from_ymd_opt(2023, 6, 14)
        );
    }

    #[test]
    fn test_parse_date_us() {
        assert_eq!(
            parse_date("06/14/2023"),
            NaiveDate::from_ymd_opt(2023, 6, 14)
        );
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert_eq!(
            parse_date("  2023-06-14 "),
            NaiveDate::from_ymd_opt(2023, 6, 14)
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date("14th of June"), None);
        assert_eq!(parse_date("2023-13-40"), None);
    }

    #[test]
    fn test_parse_date_empty() {
        assert_eq!(parse_date(""), None);
    }
}
