//! Set-Cookie metadata extraction.
//!
//! This is deliberately not an RFC 6265 cookie engine. The probe only
//! reports what the server sent: the cookie name, the verbatim Expires text
//! if any, and the Domain attribute if any. Nothing is stored or replayed.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Metadata pulled out of one Set-Cookie header.
///
/// `expires` is the captured text as the server sent it, not a parsed date.
/// Absent attributes are `None`; there is no placeholder string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub expires: Option<String>,
    pub domain: Option<String>,
}

fn expires_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Matches "Expires=" or "expires=" and captures the attribute value.
    PATTERN.get_or_init(|| Regex::new(r"([Ee]xpires=)([^;]+)").expect("expires pattern is valid"))
}

/// Collect the raw value of every Set-Cookie header, in response order.
///
/// Splits on CRLF and keeps lines whose case-insensitive prefix is
/// `set-cookie:`. A response with no such lines yields an empty vec; a
/// malformed line never aborts extraction of the rest.
pub fn extract_cookies(response: &str) -> Vec<String> {
    let mut cookies = Vec::new();
    for line in response.split("\r\n") {
        if !line.to_ascii_lowercase().starts_with("set-cookie:") {
            continue;
        }
        if let Some((_, value)) = line.split_once(':') {
            cookies.push(value.trim().to_string());
        }
    }
    cookies
}

impl Cookie {
    /// Parse one raw Set-Cookie value (the part after `Set-Cookie:`).
    ///
    /// The first `;`-separated field must be a `name=value` pair with a
    /// non-empty name. Among the remaining attribute fields, the last
    /// `Domain` wins when several are present.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(';').map(str::trim).collect();

        let name = match parts[0].split_once('=') {
            Some((n, _)) => n.trim().to_string(),
            None => {
                return Err(Error::CookieParse(format!(
                    "no = in first cookie field {:?}",
                    parts[0]
                )))
            }
        };
        if name.is_empty() {
            return Err(Error::CookieParse("empty cookie name".to_string()));
        }

        let expires = expires_pattern()
            .captures(raw)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str().trim().to_string());

        let mut domain = None;
        for attr in parts.iter().skip(1) {
            if let Some((key, value)) = attr.split_once('=') {
                if key.trim().eq_ignore_ascii_case("domain") {
                    domain = Some(value.trim().to_string());
                }
            }
        }

        Ok(Self {
            name,
            expires,
            domain,
        })
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cookie name: {}", self.name)?;
        if let Some(expires) = &self.expires {
            write!(f, ", expires time: {expires}")?;
        }
        if let Some(domain) = &self.domain {
            write!(f, ", domain name: {domain}")?;
        }
        Ok(())
    }
}
