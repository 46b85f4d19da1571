use thiserror::Error;

pub const EMPTY_IDENTIFIER_MESSAGE: &str = "Please enter a user ID";
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch recommendations. Make sure the backend is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Rejected before any I/O.
    Validation,
    /// The request never produced an HTTP response.
    Transport,
    /// A response arrived but broke the contract.
    Protocol,
}

impl FailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Transport => "transport",
            Self::Protocol => "protocol",
        }
    }
}

/// Diagnostic detail of a failed fetch. Never shown to the user verbatim.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid backend url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("malformed recommendation payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("fetch could not be dispatched: {0}")]
    Unavailable(String),
    #[error("identifier '{0}' cannot be sent as a path segment")]
    UnroutableIdentifier(String),
}

impl FetchError {
    pub fn category(&self) -> FailureCategory {
        match self {
            Self::InvalidBaseUrl { .. }
            | Self::Transport(_)
            | Self::Unavailable(_)
            | Self::UnroutableIdentifier(_) => FailureCategory::Transport,
            Self::Status { .. } | Self::Decode(_) => FailureCategory::Protocol,
        }
    }
}
