use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::reports::ReportStore;
use crate::features::stats::dtos::StatsResponseDto;

pub const DAYS_PER_WEEK: usize = 7;

/// Service for dashboard statistics
pub struct StatsService {
    store: Arc<ReportStore>,
}

impl StatsService {
    pub fn new(store: Arc<ReportStore>) -> Self {
        Self { store }
    }

    /// Status counts plus this week's per-day creation histogram
    pub async fn compute(&self) -> Result<StatsResponseDto> {
        self.compute_at(Utc::now()).await
    }

    pub(crate) async fn compute_at(&self, now: DateTime<Utc>) -> Result<StatsResponseDto> {
        let counts = self.store.count_by_status().await?;

        let monday = week_start(now.date_naive());
        let start = monday.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(DAYS_PER_WEEK as i64);
        let timestamps = self.store.created_between(start, end).await?;

        Ok(StatsResponseDto {
            total: counts.total,
            active: counts.active,
            resolved: counts.resolved,
            weekly_data: weekly_histogram(monday, &timestamps),
        })
    }
}

/// Monday of the week containing `today`
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.weekday().num_days_from_monday() as i64)
}

/// Count timestamps per UTC day for the seven days starting at `monday`.
/// Timestamps outside that week are ignored.
pub fn weekly_histogram(monday: NaiveDate, timestamps: &[DateTime<Utc>]) -> Vec<i64> {
    let mut buckets = vec![0i64; DAYS_PER_WEEK];

    for ts in timestamps {
        let offset = (ts.date_naive() - monday).num_days();
        if (0..DAYS_PER_WEEK as i64).contains(&offset) {
            buckets[offset as usize] += 1;
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::ReportStatus;
    use crate::shared::test_helpers::{create_report_data, test_pool};
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start() {
        // 2024-11-18 is a Monday
        assert_eq!(week_start(date(2024, 11, 18)), date(2024, 11, 18));
        assert_eq!(week_start(date(2024, 11, 20)), date(2024, 11, 18));
        assert_eq!(week_start(date(2024, 11, 24)), date(2024, 11, 18));
        assert_eq!(week_start(date(2024, 11, 25)), date(2024, 11, 25));
        // Week spanning a month boundary
        assert_eq!(week_start(date(2024, 12, 1)), date(2024, 11, 25));
    }

    #[test]
    fn test_histogram_buckets_by_day() {
        let monday = date(2024, 11, 18);
        let timestamps = vec![
            Utc.with_ymd_and_hms(2024, 11, 18, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 11, 18, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 11, 24, 23, 59, 59).unwrap(),
            // Outside the week
            Utc.with_ymd_and_hms(2024, 11, 17, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2024, 11, 25, 0, 0, 0).unwrap(),
        ];

        assert_eq!(
            weekly_histogram(monday, &timestamps),
            vec![2, 0, 1, 0, 0, 0, 1]
        );
    }

    #[test]
    fn test_histogram_always_has_seven_entries() {
        assert_eq!(weekly_histogram(date(2024, 11, 18), &[]), vec![0; 7]);
    }

    #[tokio::test]
    async fn test_compute_at_counts_and_histogram() {
        let store = Arc::new(ReportStore::new(test_pool().await));
        let service = StatsService::new(Arc::clone(&store));

        let monday = Utc.with_ymd_and_hms(2024, 11, 18, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 11, 21, 9, 30, 0).unwrap();

        let at_monday = store
            .create_at(&create_report_data("Pothole"), monday)
            .await
            .unwrap();
        store
            .create_at(&create_report_data("Litter"), monday + Duration::days(2))
            .await
            .unwrap();
        store
            .create_at(&create_report_data("Graffiti"), monday - Duration::days(3))
            .await
            .unwrap();
        store
            .update_status(at_monday.id, ReportStatus::Resolved)
            .await
            .unwrap();

        let stats = service.compute_at(now).await.unwrap();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.weekly_data, vec![1, 0, 1, 0, 0, 0, 0]);
        assert_eq!(stats.weekly_data.iter().sum::<i64>(), 2);
    }

    #[tokio::test]
    async fn test_compute_on_empty_store() {
        let service = StatsService::new(Arc::new(ReportStore::new(test_pool().await)));

        let stats = service.compute().await.unwrap();
        assert_eq!(
            stats,
            StatsResponseDto {
                total: 0,
                active: 0,
                resolved: 0,
                weekly_data: vec![0; 7],
            }
        );
    }
}
