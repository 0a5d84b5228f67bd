//! Error types for Paygrid
//!
//! Services return `anyhow::Result` and wrap a `PaygridError` so callers can
//! recover the error kind with `downcast_ref`.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum PaygridError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("component code '{0}' already in use")]
    Duplicate(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(String),
}

impl PaygridError {
    /// Recover a `PaygridError` from an `anyhow` error chain, if present.
    pub fn from_anyhow(err: &anyhow::Error) -> Option<&PaygridError> {
        err.downcast_ref::<PaygridError>()
    }
}
