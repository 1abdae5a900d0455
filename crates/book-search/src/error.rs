//! Error types for the book search CLI.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use crate::query::UsageError;

/// Errors raised while preparing the client, before any request is sent.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// No API key was configured.
    #[error("API key not specified: set GOOGLE_BOOKS_API_KEY or pass --api-key")]
    MissingApiKey,

    /// A configured value could not be used as an HTTP header.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The HTTP client could not be built (TLS backend, etc.)
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status returned by the catalog service
    #[error("Request failed ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the API, or the raw body
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Returns true if this error came from the network exchange itself
    /// rather than from the payload.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}

/// Top-level error reported by the binary.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Bad or missing command-line arguments.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Missing or unusable configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Network failure during the request.
    #[error("{0}")]
    Transport(ClientError),

    /// Anything else (malformed responses, internal failures).
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        if err.is_transport() {
            Self::Transport(err)
        } else {
            Self::Unexpected(anyhow::Error::new(err).context("unexpected response from catalog"))
        }
    }
}

impl AppError {
    /// Process exit status for this error.
    ///
    /// Transport failures are reported and the process still exits cleanly.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Transport(_) => 0,
            Self::Usage(_) | Self::Configuration(_) | Self::Unexpected(_) => 1,
        }
    }

    /// Returns true if only the message should be shown to the user.
    #[must_use]
    pub const fn is_message_only(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
