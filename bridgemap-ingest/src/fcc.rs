//! FCC Area API client
//!
//! Resolves a lat/lon to the containing US county (name + FIPS code) using
//! the free FCC census block lookup:
//! `https://geo.fcc.gov/api/census/block/find`

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;

const FCC_BASE_URL: &str = "https://geo.fcc.gov/api/census/block/find";
const USER_AGENT: &str = concat!("bridgemap/", env!("CARGO_PKG_VERSION"));
const CENSUS_YEAR: &str = "2020";
const RATE_LIMIT_MS: u64 = 250;

/// FCC client errors
#[derive(Debug, Error)]
pub enum FccError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}")]
    Api(u16),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No county at ({0}, {1})")]
    NoCounty(f64, f64),
}

/// Top-level block/find response (fields we use).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockFindResponse {
    #[serde(rename = "County")]
    pub county: Option<CountyInfo>,
}

/// County block of the response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountyInfo {
    /// Five-digit county FIPS code (state + county)
    #[serde(rename = "FIPS")]
    pub fips: Option<String>,
    pub name: Option<String>,
}

/// A resolved county for one bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct County {
    pub name: String,
    pub fips: String,
}

impl BlockFindResponse {
    /// Extract a complete county, treating partial responses (water blocks,
    /// out-of-coverage points) as absent.
    pub fn into_county(self) -> Option<County> {
        let county = self.county?;
        match (county.name, county.fips) {
            (Some(name), Some(fips)) => Some(County { name, fips }),
            _ => None,
        }
    }
}

/// Rate limiter enforcing a minimum interval between requests
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval: Duration::from_millis(min_interval_ms),
        }
    }

    /// Wait if necessary to comply with the rate limit
    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!("Rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// FCC Area API client
pub struct FccClient {
    http: reqwest::Client,
    rate_limiter: RateLimiter,
}

impl FccClient {
    pub fn new() -> Result<Self, FccError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FccError::Network(e.to_string()))?;

        Ok(Self {
            http,
            rate_limiter: RateLimiter::new(RATE_LIMIT_MS),
        })
    }

    /// Look up the county containing the given coordinates.
    pub async fn lookup_county(&self, lat: f64, lon: f64) -> Result<County, FccError> {
        self.rate_limiter.wait().await;

        let response = self
            .http
            .get(FCC_BASE_URL)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("censusYear", CENSUS_YEAR.to_string()),
                ("showall", "true".to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await
            .map_err(|e| FccError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FccError::Api(status.as_u16()));
        }

        let body: BlockFindResponse = response
            .json()
            .await
            .map_err(|e| FccError::Parse(e.to_string()))?;

        body.into_county().ok_or(FccError::NoCounty(lat, lon))
    }
}
