//! Probe target derived from CLI input.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::error::{Error, Result};

/// Default HTTPS port.
pub const HTTPS_PORT: u16 = 443;
/// Default plaintext HTTP port.
pub const HTTP_PORT: u16 = 80;

fn hostname_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("hostname pattern is valid")
    })
}

/// Where a probe connects and what it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub tls: bool,
}

impl Target {
    /// Parse CLI input into a target.
    ///
    /// Accepted forms:
    /// - a bare hostname such as `example.com` (treated as HTTPS on 443);
    /// - an `http://` or `https://` URL, where the scheme picks the default
    ///   port and whether the connection is TLS-wrapped. An explicit port in
    ///   the URL wins.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.starts_with("http://") || input.starts_with("https://") {
            let url = Url::parse(input)?;
            let tls = url.scheme() == "https";
            let host = url
                .host_str()
                .ok_or_else(|| Error::invalid_target("URL has no host"))?
                .to_string();
            let port = url
                .port()
                .unwrap_or(if tls { HTTPS_PORT } else { HTTP_PORT });
            let path = non_empty_path(url.path());
            Ok(Self {
                host,
                port,
                path,
                tls,
            })
        } else if hostname_pattern().is_match(input) {
            Ok(Self {
                host: input.to_string(),
                port: HTTPS_PORT,
                path: "/".to_string(),
                tls: true,
            })
        } else {
            Err(Error::invalid_target(format!(
                "{input:?} is neither a hostname (like example.com) nor an http(s) URL"
            )))
        }
    }

    /// Apply a Location header value to this target.
    ///
    /// An absolute location replaces host, port and scheme; a location with
    /// no host keeps the current one. A schemeless location is taken as a
    /// path on the current host. An empty path component becomes `/`.
    pub fn redirected(&self, location: &str) -> Result<Self> {
        match Url::parse(location) {
            Ok(url) => {
                let tls = match url.scheme() {
                    "http" => false,
                    "https" => true,
                    other => {
                        return Err(Error::InvalidRedirectUrl(format!(
                            "unsupported scheme {other:?} in {location:?}"
                        )))
                    }
                };
                let host = match url.host_str() {
                    Some(h) if !h.is_empty() => h.to_string(),
                    _ => self.host.clone(),
                };
                let port = url
                    .port()
                    .unwrap_or(if tls { HTTPS_PORT } else { HTTP_PORT });
                Ok(Self {
                    host,
                    port,
                    path: non_empty_path(url.path()),
                    tls,
                })
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Self {
                host: self.host.clone(),
                port: self.port,
                path: non_empty_path(location),
                tls: self.tls,
            }),
            Err(e) => Err(Error::InvalidRedirectUrl(format!("{location:?}: {e}"))),
        }
    }
}

fn non_empty_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}://{}:{}{}",
            if self.tls { "https" } else { "http" },
            self.host,
            self.port,
            self.path
        )
    }
}
