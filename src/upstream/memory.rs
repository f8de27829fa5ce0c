//! In-memory data source.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{nflverse::filter_seasons, Category, DataSource, UpstreamError};
use crate::records::RawRecord;

/// Serves preloaded rows.
///
/// Rows carrying a `season` column are filtered to the requested years;
/// rows without one are always returned. Every call is counted, including
/// failed ones.
#[derive(Debug, Default)]
pub struct MemorySource {
    tables: HashMap<Category, Vec<RawRecord>>,
    failure: Option<String>,
    fetches: AtomicUsize,
}

impl MemorySource {
    /// Creates a source with no rows; every fetch returns an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds rows for `category`.
    pub fn with_records(mut self, category: Category, records: Vec<RawRecord>) -> Self {
        self.tables.entry(category).or_default().extend(records);
        self
    }

    /// Makes every fetch fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch_records(
        &self,
        category: Category,
        years: &[i32],
    ) -> Result<Vec<RawRecord>, UpstreamError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(UpstreamError::Unavailable(message.clone()));
        }

        let rows = self.tables.get(&category).cloned().unwrap_or_default();
        let (seasonal, other): (Vec<_>, Vec<_>) = rows
            .into_iter()
            .partition(|record| record.contains_key("season"));

        let mut records = filter_seasons(seasonal, years);
        records.extend(other);
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RawValue;

    fn row(season: i64) -> RawRecord {
        let mut record = RawRecord::new();
        record.insert("season".to_string(), RawValue::Int(season));
        record
    }

    #[tokio::test]
    async fn test_filters_by_season() {
        let source = MemorySource::new()
            .with_records(Category::Schedules, vec![row(2023), row(2024), row(2024)]);

        let records = source
            .fetch_records(Category::Schedules, &[2024])
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty() {
        let source = MemorySource::new();
        let records = source
            .fetch_records(Category::TeamWeekly, &[2024])
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_failing_source() {
        let source = MemorySource::failing("connection refused");
        let result = source.fetch_records(Category::Schedules, &[2024]).await;

        assert!(matches!(result, Err(UpstreamError::Unavailable(_))));
        assert_eq!(source.fetch_count(), 1);
    }
}
