use sqlx::FromRow;

/// One row of the `jobs` table, as far as the report needs it
///
/// Timestamps stay as the TEXT the store holds; parsing happens when the
/// report is built.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub start_time: String,
    pub end_time: Option<String>,
    pub tech_name: String,
    pub location: String,
    pub notes: Option<String>,
    pub closed_at: Option<String>,
}
