//! Error types for the upnext ecosystem.

use thiserror::Error;

/// Errors that can end a run.
///
/// Allow-list problems are deliberately absent: those recover in place
/// (fall back to all calendars) and only surface as an informational
/// outcome, never as an error.
#[derive(Error, Debug)]
pub enum UpNextError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Access denied or error: {}", .reason.as_deref().unwrap_or("unknown error"))]
    AccessDenied { reason: Option<String> },

    #[error("Source error: {0}")]
    Source(String),

    #[error("Source '{0}' not found in PATH")]
    SourceNotInstalled(String),

    #[error("Source request timed out after {0}s")]
    SourceTimeout(u64),

    #[error("Failed to calculate end date: {0}")]
    DateComputation(String),

    #[error("No calendars available")]
    NoCalendars,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for upnext operations.
pub type UpNextResult<T> = Result<T, UpNextError>;
