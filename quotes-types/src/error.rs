//! Error types for the quote pipeline.

use std::fmt;
use std::time::Duration;

/// The pipeline step an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Persist,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetch => write!(f, "fetching exchange rate"),
            Stage::Persist => write!(f, "saving exchange rate"),
        }
    }
}

/// Category tag of a [`QuoteError`], without any detail attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Deadline exceeded on an outbound call.
    Timeout,
    /// Transport-level or bad-status failure.
    FetchFailed,
    /// Malformed or semantically invalid body.
    DecodeFailed,
    /// Store write failure.
    PersistFailed,
}

/// Pipeline errors.
///
/// Every variant is terminal for the current operation. The `Display`
/// output is the generic message that is safe to show to a caller; the
/// `detail` carried alongside is meant for logs only.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("timeout {stage}")]
    Timeout { stage: Stage, deadline: Duration },

    #[error("error fetching exchange rate")]
    FetchFailed { detail: String },

    #[error("error decoding exchange rate")]
    DecodeFailed { detail: String },

    #[error("error saving exchange rate")]
    PersistFailed { detail: String },
}

impl QuoteError {
    pub fn timeout(stage: Stage, deadline: Duration) -> Self {
        QuoteError::Timeout { stage, deadline }
    }

    pub fn fetch_failed(detail: impl fmt::Display) -> Self {
        QuoteError::FetchFailed {
            detail: detail.to_string(),
        }
    }

    pub fn decode_failed(detail: impl fmt::Display) -> Self {
        QuoteError::DecodeFailed {
            detail: detail.to_string(),
        }
    }

    pub fn persist_failed(detail: impl fmt::Display) -> Self {
        QuoteError::PersistFailed {
            detail: detail.to_string(),
        }
    }

    /// Returns the category tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuoteError::Timeout { .. } => ErrorKind::Timeout,
            QuoteError::FetchFailed { .. } => ErrorKind::FetchFailed,
            QuoteError::DecodeFailed { .. } => ErrorKind::DecodeFailed,
            QuoteError::PersistFailed { .. } => ErrorKind::PersistFailed,
        }
    }

    /// Returns the full diagnostic detail, for logs.
    pub fn detail(&self) -> String {
        match self {
            QuoteError::Timeout { stage, deadline } => {
                format!("deadline of {}ms elapsed while {}", deadline.as_millis(), stage)
            }
            QuoteError::FetchFailed { detail }
            | QuoteError::DecodeFailed { detail }
            | QuoteError::PersistFailed { detail } => detail.clone(),
        }
    }
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

impl From<RepoError> for QuoteError {
    fn from(err: RepoError) -> Self {
        QuoteError::persist_failed(err)
    }
}
