//! Error types for the torture runner.

/// Errors from a single webhook round trip.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// Webhook answered with something other than 200.
    #[error("webhook returned status {status}")]
    HttpStatus { status: u16, body: String },

    /// Connection refused, DNS failure, timeout, or a body that could not be read.
    #[error("network error: {message}")]
    Network { message: String },

    /// Body was not valid JSON.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

impl WebhookError {
    /// Whether this error belongs on the connection-error path rather than
    /// the HTTP-error path.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::InvalidResponse { .. })
    }
}

impl From<reqwest::Error> for WebhookError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for webhook operations.
pub type WebhookResult<T> = Result<T, WebhookError>;

/// A scenario could not be derived from the baseline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    #[error("extracted_gpa {value:?} has fewer than two digits to swap")]
    NotEnoughDigits { value: String },

    #[error("course index {index} out of range (baseline has {len} courses)")]
    CourseOutOfRange { index: usize, len: usize },
}

/// Configuration errors, reported before any request is sent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid webhook url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },

    #[error("failed to read baseline {path}: {message}")]
    Baseline { path: String, message: String },

    #[error("unknown test case {name:?} (known: {known})")]
    UnknownCase { name: String, known: String },
}

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
