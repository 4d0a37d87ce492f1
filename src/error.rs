// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for activity service calls.

/// Failure of a single request to the activity service.
///
/// Every failure is recoverable: the board reports it inline and the user
/// can repeat the action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Network failure, timeout, or a response body that is not the expected JSON.
    #[error("Activity service unreachable: {0}")]
    Transport(String),

    /// Non-2xx response from the activity service.
    #[error("Activity service rejected request (HTTP {status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Application { status: u16, detail: Option<String> },
}

impl BoardError {
    /// Server-provided text for an application error, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BoardError::Application { detail, .. } => detail.as_deref(),
            BoardError::Transport(_) => None,
        }
    }

    /// Whether the failure happened before the server produced a usable answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, BoardError::Transport(_))
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        BoardError::Transport(err.to_string())
    }
}

/// Result type alias for activity service calls
pub type Result<T> = std::result::Result<T, BoardError>;
