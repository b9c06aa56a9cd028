use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use crate::db::connection::get_connection;
use crate::db::job_repository::JobRepository;
use crate::error::ExportError;
use super::report::{build_report, write_csv};

/// What to export and where
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// SQLite job store to read from
    pub database: PathBuf,
    /// CSV file to create or overwrite
    pub output: PathBuf,
    /// Calendar day whose jobs are exported
    pub date: NaiveDate,
}

impl ExportRequest {
    /// Export for today's date on the local clock
    pub fn for_today(database: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            output: output.into(),
            date: Local::now().date_naive(),
        }
    }
}

/// Result of a successful export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
}

/// Export one day's jobs to a CSV report
///
/// # Business Logic
/// - Reads every job started on `request.date`, then releases the store
/// - Orders and formats the rows before touching the output file
/// - Writes the report, removing a partially written file on failure
///
/// # Returns
/// - `Ok(ExportSummary)` - report written
/// - `Err(ExportError)` - nothing valid was written
pub async fn export_jobs(request: &ExportRequest) -> Result<ExportSummary, ExportError> {
    info!(
        "Exporting jobs started on {} from {}",
        request.date,
        request.database.display()
    );

    let pool = get_connection(&request.database).await?;
    let fetched = JobRepository::fetch_started_on(&pool, request.date).await;
    pool.close().await;
    let rows = build_report(fetched?)?;

    let file = File::create(&request.output)?;
    if let Err(e) = write_csv(BufWriter::new(file), &rows) {
        if let Err(remove_err) = fs::remove_file(&request.output) {
            warn!(
                "Could not remove partial report {}: {}",
                request.output.display(),
                remove_err
            );
        }
        return Err(e);
    }

    info!("Wrote {} rows to {}", rows.len(), request.output.display());
    Ok(ExportSummary {
        exported: rows.len(),
    })
}

/// Run an export and report its outcome to the user
///
/// Prints the success line or a categorized error message and returns
/// whether the export succeeded.
pub async fn run(request: &ExportRequest) -> bool {
    match export_jobs(request).await {
        Ok(summary) => {
            println!(
                "Successfully exported {} jobs to {}",
                summary.exported,
                request.output.display()
            );
            true
        }
        Err(e) if e.is_database() => {
            error!("Database error: {}", e);
            eprintln!("Database error: {}", e);
            false
        }
        Err(e) => {
            error!("Export failed: {}", e);
            eprintln!("Error: {}", e);
            false
        }
    }
}
