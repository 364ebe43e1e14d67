//! Blocking transport implementations.
//!
//! - TCP and BoringSSL TLS connections with ALPN via `connector`
//! - Hand-framed HTTP/1.1 request/response exchange via `h1`

pub mod connector;
pub mod h1;
