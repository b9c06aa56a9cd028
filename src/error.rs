use thiserror::Error;

/// Everything that can abort an export run
#[derive(Debug, Error)]
pub enum ExportError {
    /// The job store could not be opened or queried
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The report file could not be created or written
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A stored timestamp is not ISO-8601
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl ExportError {
    /// Store-layer failures are reported separately from everything else
    pub fn is_database(&self) -> bool {
        matches!(self, ExportError::Database(_))
    }
}
