//! # webprobe
//!
//! Minimal diagnostic HTTP/HTTPS client: ALPN-based HTTP/2 detection, a
//! single hand-framed GET over a raw socket (TLS or plaintext), bounded
//! 302-redirect following, Set-Cookie metadata extraction, and
//! authentication-challenge flagging.
//!
//! This is a networking probe, not a production client. It keeps the
//! deliberately simple wire contract of reading until the peer closes the
//! connection: no persistent connections, no chunked decoding, no
//! Content-Length-bounded reads, no HTTP/2 framing.

pub mod cookie;
pub mod error;
pub mod redirect;
pub mod report;
pub mod response;
pub mod target;
pub mod timeouts;
pub mod transport;
pub mod version;

// Re-exports
pub use cookie::Cookie;
pub use error::{Error, Result};
pub use target::Target;
pub use timeouts::Timeouts;
pub use transport::connector::Connector;
pub use version::HttpVersion;
