//! Human-readable report formatting.
//!
//! Purely presentational. Failures upstream have already been mapped to
//! "no findings" by the time they get here.

use std::io::{self, Write};

use tracing::warn;

use crate::cookie::{self, Cookie};
use crate::response;

/// Findings derived from a fetched response.
#[derive(Debug)]
pub struct Findings {
    pub cookies: Vec<Cookie>,
    pub password_protected: bool,
}

impl Findings {
    /// Derive cookie and auth-challenge findings from decoded response text.
    ///
    /// An unparsable Set-Cookie value is logged and skipped; it never takes
    /// the rest of the list down with it.
    pub fn from_response_text(text: &str) -> Self {
        let mut cookies = Vec::new();
        for raw in cookie::extract_cookies(text) {
            match Cookie::parse(&raw) {
                Ok(cookie) => cookies.push(cookie),
                Err(e) => warn!(raw = %raw, error = %e, "skipping unparsable cookie"),
            }
        }
        Self {
            password_protected: response::is_password_protected(text),
            cookies,
        }
    }
}

/// Everything the probe reports for one target.
#[derive(Debug)]
pub struct Report {
    pub host: String,
    pub supports_http2: bool,
    /// `None` when the fetch failed; the failure itself was already printed.
    pub findings: Option<Findings>,
}

impl Report {
    /// Write the report in fixed order: target host, HTTP/2 support, cookie
    /// list, password-protection flag.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "website: {}", self.host)?;
        writeln!(out, "1. Supports http2: {}", yes_no(self.supports_http2))?;
        match &self.findings {
            Some(findings) => {
                writeln!(out, "2. List of Cookies:")?;
                for cookie in &findings.cookies {
                    writeln!(out, "{cookie}")?;
                }
                writeln!(
                    out,
                    "3. Password-protected: {}",
                    yes_no(findings.password_protected)
                )?;
            }
            None => writeln!(out, "Failed to fetch a response.")?,
        }
        Ok(())
    }

    /// Write the report to standard output.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
