use std::time::Duration;

/// Connector-agnostic failure reported by the probes in this crate
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Health check timed out after {0:?}")]
    Timeout(Duration),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
