use derive_more::Display;

/// Failures coming out of the store layer.
///
/// Callers never propagate these to the end user: the web view degrades and
/// the CLI prints a failure line.
#[derive(Debug, Display)]
pub enum StoreError {
    /// Storage unreachable: pool timeout, I/O, TLS, or a closed pool.
    #[display(fmt = "database connection failed: {}", _0)]
    Connection(sqlx::Error),

    /// Malformed statement, constraint violation, or a row that failed to decode.
    #[display(fmt = "query failed: {}", _0)]
    Query(sqlx::Error),
}

impl StoreError {
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::WorkerCrashed => StoreError::Connection(e),
            other => StoreError::Query(other),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Connection(e) | StoreError::Query(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_connection_error() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(err.is_connection());
        assert!(err.to_string().starts_with("database connection failed"));
    }

    #[test]
    fn test_io_error_is_connection_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(StoreError::from(sqlx::Error::Io(io)).is_connection());
    }

    #[test]
    fn test_row_not_found_is_query_error() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(!err.is_connection());
        assert!(err.to_string().starts_with("query failed"));
    }
}
