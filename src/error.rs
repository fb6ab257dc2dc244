//! Error taxonomy for the relay
//!
//! Every fallible operation returns a [`RelayError`]. The poll loop does not
//! inspect individual variants; it asks for the coarse [`ErrorKind`] and decides
//! whether to keep looping or halt.

use thiserror::Error;

/// Coarse classification used at the cycle boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Boot-time configuration problem; the process cannot run
    FatalConfig,
    /// Network, HTTP status, or message delivery failure
    Transport,
    /// The remote side answered with data we cannot interpret
    Malformed,
    /// Anything else
    Unknown,
}

impl ErrorKind {
    /// Whether an error of this kind must stop the poll loop
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::FatalConfig)
    }

    /// Short label used in log lines
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FatalConfig => "FATAL_CONFIG",
            Self::Transport => "TRANSPORT",
            Self::Malformed => "MALFORMED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while relaying homework statuses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// A required configuration value is absent or empty
    #[error("can not get {0}")]
    MissingConfig(String),

    /// The request never produced an HTTP response (DNS, refused, timeout)
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        /// URL that was requested
        endpoint: String,
        /// Underlying error text
        message: String,
    },

    /// The API answered with something other than 200 OK
    #[error("{endpoint} responded with status {status}")]
    HttpStatus {
        /// URL that was requested
        endpoint: String,
        /// HTTP status code received
        status: u16,
    },

    /// The response body is not valid JSON
    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    /// A value has the wrong JSON type
    #[error("incorrect type of response data: {0}")]
    TypeMismatch(String),

    /// An expected key is absent
    #[error("no expected key `{0}` in response")]
    MissingField(&'static str),

    /// The homework status is absent or not in the verdict table
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    /// The messaging transport rejected or failed to deliver a message
    #[error("can not send telegram message: {0}")]
    Delivery(String),

    /// Unclassified failure; a panic caught at the cycle boundary lands here
    #[error("{0}")]
    Other(String),
}

impl RelayError {
    /// Classify this error for the cycle boundary
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingConfig(_) => ErrorKind::FatalConfig,
            Self::Transport { .. } | Self::HttpStatus { .. } | Self::Delivery(_) => {
                ErrorKind::Transport
            },
            Self::Decode(_)
            | Self::TypeMismatch(_)
            | Self::MissingField(_)
            | Self::UnknownStatus(_) => ErrorKind::Malformed,
            Self::Other(_) => ErrorKind::Unknown,
        }
    }
}
