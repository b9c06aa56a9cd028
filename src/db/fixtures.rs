//! Test helpers that build a job store on disk the way the job-tracking
//! application lays it out.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

const CREATE_JOBS: &str = r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at TEXT NOT NULL,
        tech_name TEXT NOT NULL,
        start_time TEXT NOT NULL,
        location TEXT NOT NULL,
        end_time TEXT,
        notes TEXT,
        closed_at TEXT
    )
"#;

/// Job as inserted by a test
#[derive(Debug, Clone, Default)]
pub struct NewJob<'a> {
    pub tech_name: &'a str,
    pub location: &'a str,
    pub start_time: &'a str,
    pub end_time: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub closed_at: Option<&'a str>,
}

impl<'a> NewJob<'a> {
    pub fn new(tech_name: &'a str, location: &'a str, start_time: &'a str) -> Self {
        Self {
            tech_name,
            location,
            start_time,
            ..Default::default()
        }
    }

    pub fn ended(mut self, end_time: &'a str) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn closed(mut self, closed_at: &'a str) -> Self {
        self.closed_at = Some(closed_at);
        self
    }

    pub fn notes(mut self, notes: &'a str) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// Create a writable store with the `jobs` table at `path`
pub async fn create_store(path: &Path) -> Pool<Sqlite> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("create test store");

    sqlx::query(CREATE_JOBS)
        .execute(&pool)
        .await
        .expect("create jobs table");

    pool
}

pub async fn insert_job(pool: &Pool<Sqlite>, job: &NewJob<'_>) {
    sqlx::query(
        r#"
        INSERT INTO jobs (created_at, tech_name, start_time, location, end_time, notes, closed_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(job.start_time)
    .bind(job.tech_name)
    .bind(job.start_time)
    .bind(job.location)
    .bind(job.end_time)
    .bind(job.notes)
    .bind(job.closed_at)
    .execute(pool)
    .await
    .expect("insert job");
}

/// Create a store at `path`, fill it, and close it again
pub async fn seed_store(path: &Path, jobs: &[NewJob<'_>]) {
    let pool = create_store(path).await;
    for job in jobs {
        insert_job(&pool, job).await;
    }
    pool.close().await;
}
