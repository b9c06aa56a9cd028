use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Error, Pool, Sqlite};

/// Open the job store as a read-only SQLite connection pool
///
/// # Parameters
/// - `database_file`: path to an existing SQLite database
///
/// # Returns
/// A pool with a single connection. A missing file is an error; the store
/// is never created.
pub async fn get_connection(database_file: &Path) -> Result<Pool<Sqlite>, Error> {
    let options = SqliteConnectOptions::new()
        .filename(database_file)
        .read_only(true)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_is_not_created() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.db");

        let result = get_connection(&path).await;

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
