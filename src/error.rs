//! Error types for the webprobe crate.

use std::io;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing a host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// DNS resolution or TCP connect failure.
    #[error("Connect error: {0}")]
    Connect(String),

    /// TLS handshake or ALPN setup failure.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Send/receive failure on an established connection.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Response bytes are not valid UTF-8.
    #[error("Decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Missing redirect Location, unparsable status line, and the like.
    #[error("HTTP protocol error: {0}")]
    Protocol(String),

    /// Redirect limit exceeded.
    #[error("Redirect limit exceeded ({count} redirects)")]
    RedirectLimit { count: u32 },

    /// Invalid redirect URL.
    #[error("Invalid redirect URL: {0}")]
    InvalidRedirectUrl(String),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// CLI input is neither a bare hostname nor an http(s) URL.
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// Cookie parsing error.
    #[error("Cookie parse error: {0}")]
    CookieParse(String),
}

impl Error {
    /// Create a connect error.
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect(message.into())
    }

    /// Create a TLS error.
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an HTTP protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Create an invalid-target error.
    pub fn invalid_target(message: impl Into<String>) -> Self {
        Self::InvalidTarget(message.into())
    }
}
