//! # Client Error Type
//!
//! Unified error type for client operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Grocer                               │
//! │                                                                         │
//! │  RemoteStore call                                                       │
//! │       │                                                                 │
//! │       ├── transport failure ────────────► ClientError::Fetch            │
//! │       ├── non-2xx status (ANY body) ────► ClientError::Fetch            │
//! │       └── 2xx ──────────────────────────► Ok                            │
//! │                                                                         │
//! │  EditSession::start_edit                                                │
//! │       └── id absent from snapshot ──────► ClientError::NotFound         │
//! │                                                                         │
//! │  EditSession::commit                                                    │
//! │       └── invalid fields ───────────────► ClientError::Validation       │
//! │            (before any network call)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the presentation layer catches and hides an error; the one
//! documented exception is the settings fallback in
//! [`crate::settings::SettingsResolver`], which degrades to defaults with a
//! warning. All other failures propagate with internal state (snapshot,
//! session mode) left unchanged.

use grocer_core::ValidationError;
use thiserror::Error;

/// Convenience alias for Results with [`ClientError`].
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or non-2xx response from the backend.
    ///
    /// Non-success statuses are treated uniformly regardless of the response
    /// body; there is no automatic retry.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// An edit was requested for an id absent from the current snapshot.
    #[error("product not found: {0}")]
    NotFound(String),

    /// Input validation failed before any network call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // Status-bearing errors are normally produced by our own status
        // check, but error_for_status-style failures land here too.
        ClientError::Fetch(err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
