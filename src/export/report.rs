use std::cmp::Ordering;
use std::io::Write;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::db::models::JobRow;
use crate::error::ExportError;
use super::timestamp::{display_timestamp, parse_timestamp};

/// Fixed report columns, in output order
pub const HEADER: [&str; 6] = [
    "Start Time",
    "End Time",
    "Tech Name",
    "Location",
    "Notes",
    "Status",
];

/// Job status as derived from `closed_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JobStatus {
    InProgress,
    Completed,
}

impl JobStatus {
    pub fn from_closed_at(closed_at: Option<&str>) -> Self {
        match closed_at {
            None => JobStatus::InProgress,
            Some(_) => JobStatus::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
        }
    }
}

impl Serialize for JobStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One line of the CSV report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Tech Name")]
    pub tech_name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Status")]
    pub status: JobStatus,
}

/// A fetched job with its sort keys parsed
#[derive(Debug)]
struct SortableJob {
    status: JobStatus,
    end: Option<NaiveDateTime>,
    row: JobRow,
}

impl SortableJob {
    fn new(row: JobRow) -> Result<Self, ExportError> {
        let end = match row.end_time.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(parse_timestamp(s)?),
        };

        Ok(Self {
            status: JobStatus::from_closed_at(row.closed_at.as_deref()),
            end,
            row,
        })
    }
}

/// Report order: open jobs before closed ones, then end time ascending with
/// a missing end time after every present one
fn report_order(a: &SortableJob, b: &SortableJob) -> Ordering {
    a.status
        .cmp(&b.status)
        .then_with(|| match (a.end, b.end) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

fn to_report_row(row: JobRow, status: JobStatus) -> Result<ReportRow, ExportError> {
    Ok(ReportRow {
        start_time: display_timestamp(Some(&row.start_time))?,
        end_time: display_timestamp(row.end_time.as_deref())?,
        tech_name: row.tech_name,
        location: row.location,
        notes: row.notes.unwrap_or_default(),
        status,
    })
}

/// Turn fetched jobs into report rows in report order
///
/// The sort is stable, so jobs with equal keys keep the order the store
/// returned them in.
pub fn build_report(rows: Vec<JobRow>) -> Result<Vec<ReportRow>, ExportError> {
    let mut jobs = rows
        .into_iter()
        .map(SortableJob::new)
        .collect::<Result<Vec<_>, _>>()?;

    jobs.sort_by(report_order);

    jobs.into_iter()
        .map(|job| to_report_row(job.row, job.status))
        .collect()
}

/// Write the header and every row as CSV
///
/// The header is written even when there are no rows. Records end in CRLF.
pub fn write_csv<W: Write>(writer: W, rows: &[ReportRow]) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}
