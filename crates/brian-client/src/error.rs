//! Client error types.
//!
//! Every failure surfaces as [`Error`]. Provider-side failures carry the
//! response body as their `cause`, parsed as JSON where possible.

use serde_json::Value;
use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be constructed from the given configuration.
    #[error("Error while initializing client: {message}.")]
    Initialization {
        /// What was wrong with the configuration.
        message: String,
    },

    /// The provider rejected the request body (HTTP 400).
    #[error("Bad request, check your input body.")]
    BadRequest {
        /// Parsed response body.
        cause: Value,
    },

    /// The requested entity does not exist (HTTP 404).
    #[error("Requested entity was not found.")]
    NotFound {
        /// Parsed response body.
        cause: Value,
    },

    /// The API key has exceeded its rate limit (HTTP 429).
    #[error("API rate limit exceeded.")]
    RateLimit {
        /// Parsed response body.
        cause: Value,
    },

    /// The provider failed while handling the request (HTTP 500).
    #[error("Internal server error.")]
    InternalServer {
        /// Parsed response body.
        cause: Value,
    },

    /// Any other non-success status.
    #[error("Unexpected HTTP status {status}.")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Parsed response body.
        cause: Value,
    },

    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL building failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A success body did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Machine-readable classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid client configuration.
    Initialization,
    /// HTTP 400.
    BadRequest,
    /// HTTP 404 on a single-entity lookup.
    NotFound,
    /// HTTP 429.
    RateLimit,
    /// HTTP 500.
    InternalServer,
    /// Any other non-success status.
    UnexpectedStatus,
    /// No response was received.
    Transport,
    /// A request URL could not be built.
    InvalidUrl,
    /// A success body did not decode.
    Decode,
}

impl ErrorKind {
    /// Stable tag for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Initialization => "initialization_error",
            ErrorKind::BadRequest => "bad_request_error",
            ErrorKind::NotFound => "not_found_error",
            ErrorKind::RateLimit => "rate_limit_error",
            ErrorKind::InternalServer => "internal_server_error",
            ErrorKind::UnexpectedStatus => "unexpected_status_error",
            ErrorKind::Transport => "transport_error",
            ErrorKind::InvalidUrl => "invalid_url_error",
            ErrorKind::Decode => "decode_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Build an initialization error.
    pub(crate) fn init(message: impl Into<String>) -> Self {
        Error::Initialization {
            message: message.into(),
        }
    }

    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Initialization { .. } => ErrorKind::Initialization,
            Error::BadRequest { .. } => ErrorKind::BadRequest,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::RateLimit { .. } => ErrorKind::RateLimit,
            Error::InternalServer { .. } => ErrorKind::InternalServer,
            Error::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Error::Http(_) => ErrorKind::Transport,
            Error::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Error::Json(_) => ErrorKind::Decode,
        }
    }

    /// The provider's response body, for errors raised from an HTTP status.
    pub fn cause(&self) -> Option<&Value> {
        match self {
            Error::BadRequest { cause }
            | Error::NotFound { cause }
            | Error::RateLimit { cause }
            | Error::InternalServer { cause }
            | Error::UnexpectedStatus { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// The HTTP status that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest { .. } => Some(400),
            Error::NotFound { .. } => Some(404),
            Error::RateLimit { .. } => Some(429),
            Error::InternalServer { .. } => Some(500),
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimit { .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }

    /// Check if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which failure statuses an operation classifies.
///
/// Statuses outside the map become [`Error::UnexpectedStatus`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusMap(&'static [(u16, ErrorKind)]);

impl StatusMap {
    /// Agent, utility and knowledge-base collection endpoints.
    pub(crate) const DEFAULT: StatusMap = StatusMap(&[
        (400, ErrorKind::BadRequest),
        (429, ErrorKind::RateLimit),
        (500, ErrorKind::InternalServer),
    ]);

    /// Endpoints addressing a single knowledge base by id.
    pub(crate) const LOOKUP: StatusMap = StatusMap(&[
        (400, ErrorKind::BadRequest),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimit),
        (500, ErrorKind::InternalServer),
    ]);

    /// Build the error for a failed response.
    pub(crate) fn error_for(&self, status: u16, cause: Value) -> Error {
        let kind = self
            .0
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind);

        match kind {
            Some(ErrorKind::BadRequest) => Error::BadRequest { cause },
            Some(ErrorKind::NotFound) => Error::NotFound { cause },
            Some(ErrorKind::RateLimit) => Error::RateLimit { cause },
            Some(ErrorKind::InternalServer) => Error::InternalServer { cause },
            _ => Error::UnexpectedStatus { status, cause },
        }
    }
}

/// Parse an error body into a cause value.
///
/// Non-JSON bodies are kept as a string; an empty body is `null`.
pub(crate) fn parse_cause(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_map_classifies_agent_statuses() {
        let cause = json!({"error": "prompt is required"});

        let err = StatusMap::DEFAULT.error_for(400, cause.clone());
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.cause(), Some(&cause));

        assert!(StatusMap::DEFAULT.error_for(429, Value::Null).is_rate_limited());
        assert_eq!(
            StatusMap::DEFAULT.error_for(500, Value::Null).kind(),
            ErrorKind::InternalServer
        );
    }

    #[test]
    fn test_default_map_does_not_classify_404() {
        let err = StatusMap::DEFAULT.error_for(404, Value::Null);
        assert!(!err.is_not_found());
        assert!(matches!(err, Error::UnexpectedStatus { status: 404, .. }));
    }

    #[test]
    fn test_lookup_map_classifies_404() {
        let err = StatusMap::LOOKUP.error_for(404, json!({"error": "missing"}));
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_unclassified_statuses() {
        for status in [401, 403, 502, 503] {
            let err = StatusMap::LOOKUP.error_for(status, Value::Null);
            assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
            assert_eq!(err.status(), Some(status));
        }
        assert!(StatusMap::DEFAULT.error_for(503, Value::Null).is_server_error());
    }

    #[test]
    fn test_messages_are_fixed_per_kind() {
        let err = StatusMap::DEFAULT.error_for(400, json!({"detail": "anything"}));
        assert_eq!(err.to_string(), "Bad request, check your input body.");

        let err = Error::init("Invalid API key");
        assert_eq!(
            err.to_string(),
            "Error while initializing client: Invalid API key."
        );
        assert_eq!(err.kind().to_string(), "initialization_error");
        assert!(err.cause().is_none());
    }

    #[test]
    fn test_parse_cause() {
        assert_eq!(parse_cause(b""), Value::Null);
        assert_eq!(parse_cause(b" \n"), Value::Null);
        assert_eq!(parse_cause(br#"{"error":"x"}"#), json!({"error": "x"}));
        assert_eq!(
            parse_cause(b"Bad Gateway"),
            Value::String("Bad Gateway".to_string())
        );
    }
}
