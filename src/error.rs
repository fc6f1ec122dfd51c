//! Error types for ScanExpress.

use thiserror::Error;

/// Common error type for ScanExpress.
#[derive(Error, Debug)]
pub enum ScanExpressError {
    /// Database error.
    ///
    /// Wraps errors from whichever sqlx backend is compiled in.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for ScanExpressError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                ScanExpressError::DatabaseConnection(e.to_string())
            }
            _ => ScanExpressError::Database(e.to_string()),
        }
    }
}

/// Result type alias for ScanExpress operations.
pub type Result<T> = std::result::Result<T, ScanExpressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ScanExpressError::Config("database.url must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: database.url must not be empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScanExpressError = io_err.into();
        assert!(matches!(err, ScanExpressError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_sqlx_pool_timeout_is_connection_error() {
        let err: ScanExpressError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, ScanExpressError::DatabaseConnection(_)));
    }

    #[test]
    fn test_sqlx_row_not_found_is_database_error() {
        let err: ScanExpressError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ScanExpressError::Database(_)));
    }
}
