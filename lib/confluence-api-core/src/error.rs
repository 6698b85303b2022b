//! Error types for confluence-api.
//!
//! Every failure a call can produce is a variant of [`Error`]. The variants
//! fall into five groups, checked in this order during a call:
//!
//! - configuration ([`ConfigError`]) - raised when building a client
//! - validation ([`ValidationError`]) - raised before any network I/O
//! - transport ([`Error::Connection`], [`Error::Tls`], [`Error::Timeout`])
//! - protocol ([`Error::Api`]) - a non-200 status mapped through a [`crate::StatusTable`]
//! - decoding ([`Error::JsonDeserialization`])

use bytes::Bytes;
use derive_more::{Display, Error, From};

// ============================================================================
// Configuration Errors
// ============================================================================

/// Invalid client configuration. A client cannot be built with any of these.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ConfigError {
    /// The base URL is empty.
    #[display("URL can't be empty")]
    #[from(skip)]
    EmptyUrl,

    /// The base URL cannot be parsed.
    #[display("invalid base URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// No credential was configured.
    #[display("credential must be set")]
    #[from(skip)]
    MissingCredential,

    /// Basic credential with an empty user name.
    #[display("user can't be empty")]
    #[from(skip)]
    EmptyUser,

    /// Basic credential with an empty password.
    #[display("password can't be empty")]
    #[from(skip)]
    EmptyPassword,

    /// Token credential with an empty token.
    #[display("token can't be empty")]
    #[from(skip)]
    EmptyToken,

    /// Token credential of the wrong length.
    #[display("token length must be 44, got {actual}")]
    #[from(skip)]
    TokenLength {
        /// Length of the supplied token, in bytes.
        actual: usize,
    },
}

// ============================================================================
// Validation Errors
// ============================================================================

/// Parameter validation failure, reported before a request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    /// A mandatory field is empty.
    #[display("{_0} is required")]
    Missing(#[error(not(source))] &'static str),

    /// Neither of two alternative fields is set.
    #[display("{_0} or {_1} is required")]
    MissingEither(
        #[error(not(source))] &'static str,
        #[error(not(source))] &'static str,
    ),

    /// A field holds something that is not a calendar id.
    #[display("{_0} contains an invalid calendar identifier")]
    InvalidCalendarId(#[error(not(source))] &'static str),
}

// ============================================================================
// API Errors
// ============================================================================

/// Domain meaning of a non-200 status code for a given endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum ApiError {
    /// The user does not have permission to use Confluence.
    #[display("user does not have permission to use confluence")]
    PermissionDenied,

    /// The user does not have permission to view users.
    #[display("user does not have permission to view users")]
    UserPermissionDenied,

    /// The CQL query could not be parsed.
    #[display("query cannot be parsed")]
    MalformedQuery,

    /// No content with the given id, or it is not visible to the user.
    #[display("there is no content with the given id, or the calling user does not have permission to view it")]
    NoSuchContent,

    /// No space with the given key, or it is not visible to the user.
    #[display("there is no space with the given key, or the calling user does not have permission to view it")]
    NoSuchSpace,

    /// No user with the given username or user key.
    #[display("user with the given username or userkey does not exist")]
    NoSuchUser,

    /// A status code the endpoint does not document.
    #[display("unexpected status code {_0}")]
    UnexpectedStatus(#[error(not(source))] u16),
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for confluence-api operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The client configuration is invalid.
    #[display("{_0}")]
    #[from]
    Config(ConfigError),

    /// Request parameters failed validation; nothing was sent.
    #[display("invalid parameters: {_0}")]
    #[from]
    Validation(ValidationError),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request could not be assembled.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// Request URL could not be built.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// The server answered with a non-200 status.
    #[display("{kind}")]
    #[from(skip)]
    Api {
        /// HTTP status code.
        status: u16,
        /// What the status means for the endpoint that was called.
        #[error(not(source))]
        kind: ApiError,
        /// Response body, if any.
        #[error(not(source))]
        body: Option<Bytes>,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "results[0].space.key").
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an API error for a status code.
    #[must_use]
    pub fn api(status: u16, kind: ApiError, body: Option<Bytes>) -> Self {
        Self::Api { status, kind, body }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the request never got an HTTP answer.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Tls(_) | Self::Timeout)
    }

    /// Returns `true` if the parameters were rejected before sending.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the HTTP status code if the server answered with an error status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the mapped API error, if any.
    #[must_use]
    pub const fn api_error(&self) -> Option<ApiError> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if the status mapped to a "no such ..." error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self.api_error(),
            Some(ApiError::NoSuchContent | ApiError::NoSuchSpace | ApiError::NoSuchUser)
        )
    }

    /// Returns the response body if this is an API error with a body.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Try to decode the error response body as JSON.
    ///
    /// Confluence usually answers errors with a `{"statusCode": .., "message": ..}`
    /// document; this gives access to it.
    ///
    /// Returns `None` if there is no body or this is not an API error.
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }
}
