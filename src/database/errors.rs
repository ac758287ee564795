use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// A uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be turned back into a domain value.
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    #[error("Query error: {0}")]
    Query(sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(ref database_error) if database_error.is_unique_violation() => {
                StorageError::Conflict(database_error.message().to_string())
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_) => StorageError::Unavailable(error.to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_) => StorageError::Corrupt(error.to_string()),
            _ => StorageError::Query(error),
        }
    }
}
