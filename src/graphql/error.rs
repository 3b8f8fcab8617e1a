//! Errors raised while fetching the country list.
//!
//! Variants keep enough detail for the log file. The UI does not
//! distinguish between them: every failure renders the same inline message.

use thiserror::Error;

/// Message shown in place of the table body for any fetch failure.
pub const FETCH_FAILED_MESSAGE: &str = "Error loading data";

/// Errors that can occur while fetching countries.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Failed to reach the endpoint or read the response
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Response body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response carried a GraphQL `errors` array
    #[error("GraphQL error: {}", messages.join("; "))]
    Graphql { messages: Vec<String> },

    /// Response had neither errors nor data
    #[error("Response contained no data")]
    MissingData,
}

impl FetchError {
    /// User-facing text. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Short classification for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::ClientBuild(_) => "client_build",
            FetchError::Transport { .. } => "transport",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Decode(_) => "decode",
            FetchError::Graphql { .. } => "graphql",
            FetchError::MissingData => "missing_data",
        }
    }
}
