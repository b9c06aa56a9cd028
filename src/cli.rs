use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Export today's jobs from a HandyManager database to CSV.
///
/// In-progress jobs come first, followed by completed jobs ordered by end time.
#[derive(Debug, Parser)]
#[command(name = "daily-job-export", version, about)]
pub struct Cli {
    /// SQLite database file
    pub database: PathBuf,

    /// Output CSV file
    pub output: PathBuf,

    /// Export this day instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Log progress to stderr
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn takes_database_then_output() {
        let cli = Cli::try_parse_from(["daily-job-export", "jobs.db", "today.csv"]).unwrap();
        assert_eq!(cli.database, PathBuf::from("jobs.db"));
        assert_eq!(cli.output, PathBuf::from("today.csv"));
        assert_eq!(cli.date, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn date_override_is_parsed() {
        let cli = Cli::try_parse_from([
            "daily-job-export",
            "jobs.db",
            "out.csv",
            "--date",
            "2024-03-15",
        ])
        .unwrap();
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result =
            Cli::try_parse_from(["daily-job-export", "jobs.db", "out.csv", "--date", "03/15"]);
        assert!(result.is_err());
    }

    #[test]
    fn output_is_required() {
        assert!(Cli::try_parse_from(["daily-job-export", "jobs.db"]).is_err());
    }
}
