//! Draw-history retrieval over HTTP.
//!
//! The published winning-numbers feed is a single text resource, so one GET
//! returns the entire history. Suppliers of history implement [`DrawSource`],
//! which lets the CLI and tests swap the live feed for fixtures.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::feed::{parse_feed, FeedError};
use crate::models::DrawRecord;

/// The public winning-numbers text feed.
pub const DEFAULT_FEED_URL: &str = "http://www.powerball.com/powerball/winnums-text.txt";

/// Errors that can occur while retrieving draw history.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}

/// Inclusive date window over fetched history. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// A supplier of historical draw records.
#[async_trait]
pub trait DrawSource {
    fn name(&self) -> &'static str;

    /// All draws within `range`, sorted ascending by draw date.
    async fn draws(&self, range: &DateRange) -> Result<Vec<DrawRecord>, FetchError>;
}

/// Configuration for the HTTP feed source.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed location
    pub url: Url,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_FEED_URL).expect("default feed URL is valid"),
            timeout: Duration::from_secs(30),
            user_agent: "powerpick/0.1.0".to_string(),
        }
    }
}

/// The live winning-numbers feed.
pub struct PowerballFeed {
    client: Client,
    config: FeedConfig,
}

impl PowerballFeed {
    /// Create a feed source with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("powerpick/0.1.0")),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a feed source with default configuration.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(FeedConfig::default())
    }
}

#[async_trait]
impl DrawSource for PowerballFeed {
    fn name(&self) -> &'static str {
        "powerball-feed"
    }

    async fn draws(&self, range: &DateRange) -> Result<Vec<DrawRecord>, FetchError> {
        info!("Fetching {}", self.config.url);

        let response = self.client.get(self.config.url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        let mut records = parse_feed(&body)?;
        let fetched = records.len();

        records.retain(|record| range.contains(record.date));
        records.sort_by_key(|record| record.date);

        debug!("Parsed {} draws, {} within range", fetched, records.len());
        Ok(records)
    }
}
