use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};
use tracing::debug;

use crate::db::models::JobRow;

/// Repository for Job database operations
pub struct JobRepository;

impl JobRepository {
    /// Fetch every job whose `start_time` falls on `date`
    ///
    /// The date is the one written in `start_time`; a `Z` or `±HH:MM`
    /// suffix never moves a job to another day.
    ///
    /// Open jobs come first, then closed ones; each group is ordered by
    /// `end_time` with missing end times last.
    pub async fn fetch_started_on(
        pool: &Pool<Sqlite>,
        date: NaiveDate,
    ) -> Result<Vec<JobRow>, sqlx::Error> {
        debug!("Fetching jobs started on {}", date);

        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT
                start_time,
                end_time,
                tech_name,
                location,
                notes,
                closed_at
            FROM jobs
            WHERE substr(start_time, 1, 10) = ?
            ORDER BY
                CASE WHEN closed_at IS NULL THEN 0 ELSE 1 END,
                COALESCE(end_time, '9999-12-31') ASC
            "#,
        )
        .bind(date)
        .fetch_all(pool)
        .await?;

        debug!("Fetched {} jobs", rows.len());
        Ok(rows)
    }
}
