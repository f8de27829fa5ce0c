//! nflverse CSV client
//!
//! Fetches schedule and weekly stat tables from the nflverse data releases.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::{parse_records, Category, DataSource, UpstreamError};
use crate::config::Config;
use crate::records::{RawRecord, RawValue};

/// Placeholder replaced by the season in per-year URL templates
const YEAR_PLACEHOLDER: &str = "{year}";

/// Location of each upstream table.
#[derive(Debug, Clone)]
pub struct SourceUrls {
    /// Single CSV covering every season
    pub schedules: String,
    /// Per-season template containing `{year}`
    pub player_weekly: String,
    /// Per-season template containing `{year}`
    pub team_weekly: String,
}

impl SourceUrls {
    /// Builds the URL set from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            schedules: config.schedules_url.clone(),
            player_weekly: config.player_stats_url.clone(),
            team_weekly: config.team_stats_url.clone(),
        }
    }

    fn for_year(template: &str, year: i32) -> String {
        template.replace(YEAR_PLACEHOLDER, &year.to_string())
    }
}

/// HTTP client for nflverse CSV releases.
#[derive(Debug, Clone)]
pub struct NflverseClient {
    client: Client,
    urls: SourceUrls,
}

impl NflverseClient {
    /// Create a client with a default HTTP client
    pub fn new(urls: SourceUrls) -> Self {
        Self::with_client(Client::new(), urls)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(client: Client, urls: SourceUrls) -> Self {
        Self { client, urls }
    }

    async fn fetch_csv(&self, url: &str) -> Result<Vec<RawRecord>, UpstreamError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let records = parse_records(body.as_ref())?;
        info!("Fetched {} rows from {}", records.len(), url);
        Ok(records)
    }

    /// Fetches one file per season and concatenates them in year order.
    async fn fetch_per_year(
        &self,
        template: &str,
        years: &[i32],
    ) -> Result<Vec<RawRecord>, UpstreamError> {
        let mut records = Vec::new();
        for &year in years {
            let url = SourceUrls::for_year(template, year);
            records.extend(self.fetch_csv(&url).await?);
        }
        Ok(records)
    }
}

#[async_trait]
impl DataSource for NflverseClient {
    async fn fetch_records(
        &self,
        category: Category,
        years: &[i32],
    ) -> Result<Vec<RawRecord>, UpstreamError> {
        match category {
            Category::Schedules => {
                let games = self.fetch_csv(&self.urls.schedules).await?;
                Ok(filter_seasons(games, years))
            }
            Category::PlayerWeekly => self.fetch_per_year(&self.urls.player_weekly, years).await,
            Category::TeamWeekly => self.fetch_per_year(&self.urls.team_weekly, years).await,
        }
    }

    fn name(&self) -> &'static str {
        "nflverse"
    }
}

/// Keeps rows whose `season` is one of `years`.
pub(crate) fn filter_seasons(records: Vec<RawRecord>, years: &[i32]) -> Vec<RawRecord> {
    records
        .into_iter()
        .filter(|record| match record.get("season") {
            Some(RawValue::Int(season)) => years.iter().any(|&y| i64::from(y) == *season),
            Some(RawValue::Float(season)) => years.iter().any(|&y| f64::from(y) == *season),
            _ => false,
        })
        .collect()
}
