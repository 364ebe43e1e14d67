//! HTTP version negotiated via ALPN.

/// Application protocol selected during the TLS handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpVersion {
    /// HTTP/1.1, also the assumption when no ALPN protocol was agreed.
    #[default]
    Http1_1,
    /// HTTP/2 over TLS ("h2").
    H2,
}

impl HttpVersion {
    /// Map a negotiated ALPN protocol identifier to a version.
    ///
    /// `None` (no agreement) and anything other than `h2` fall back to
    /// HTTP/1.1, which is what the probe assumes on the wire anyway.
    pub fn from_alpn(proto: Option<&[u8]>) -> Self {
        match proto {
            Some(b"h2") => Self::H2,
            _ => Self::Http1_1,
        }
    }

    /// Get human-readable version string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http1_1 => "HTTP/1.1",
            Self::H2 => "HTTP/2",
        }
    }

    /// True iff the server agreed on HTTP/2.
    pub fn is_h2(&self) -> bool {
        matches!(self, Self::H2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h2_agreement_is_h2() {
        let version = HttpVersion::from_alpn(Some(b"h2"));
        assert_eq!(version, HttpVersion::H2);
        assert!(version.is_h2());
        assert_eq!(version.as_str(), "HTTP/2");
    }

    #[test]
    fn http11_agreement_is_not_h2() {
        let version = HttpVersion::from_alpn(Some(b"http/1.1"));
        assert_eq!(version, HttpVersion::Http1_1);
        assert!(!version.is_h2());
    }

    #[test]
    fn no_agreement_falls_back_to_http11() {
        let version = HttpVersion::from_alpn(None);
        assert_eq!(version, HttpVersion::Http1_1);
        assert!(!version.is_h2());
    }

    #[test]
    fn unknown_protocol_falls_back_to_http11() {
        assert!(!HttpVersion::from_alpn(Some(b"h3")).is_h2());
        assert!(!HttpVersion::from_alpn(Some(b"")).is_h2());
    }
}
