//! Raw HTTP/1.1 response handling.
//!
//! The probe never parses the body. Only the status line and the header
//! lines are interpreted; everything else stays opaque text.

use crate::error::{Error, Result};

/// A decoded response with its status line picked apart.
#[derive(Debug)]
pub struct Response {
    text: String,
    status_line: String,
    headers: Vec<String>,
    pub status: u16,
}

impl Response {
    /// Parse the decoded response text.
    ///
    /// The status code is the second whitespace-separated token of the first
    /// line; a first line that does not carry one is a protocol error.
    /// Header lines run up to the first blank line.
    pub fn parse(text: String) -> Result<Self> {
        let mut lines = text.split("\r\n");
        let status_line = lines
            .next()
            .unwrap_or_default()
            .to_string();
        let status = status_line
            .split_whitespace()
            .nth(1)
            .and_then(|token| token.parse::<u16>().ok())
            .ok_or_else(|| {
                Error::protocol(format!("unparsable status line {status_line:?}"))
            })?;
        let headers = lines
            .take_while(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self {
            text,
            status_line,
            headers,
            status,
        })
    }

    /// The full decoded response text, headers and body.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// First header whose name matches case-insensitively, value trimmed.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_ascii_lowercase();
        for header in &self.headers {
            if let Some((key, value)) = header.split_once(':') {
                if key.trim().to_ascii_lowercase() == name_lower {
                    return Some(value.trim());
                }
            }
        }
        None
    }

    /// The redirect class this probe follows: exactly 302.
    pub fn is_redirect(&self) -> bool {
        self.status == 302
    }

    /// Human-readable classification of the terminal status. Informational
    /// only; it never changes what the fetch returns.
    pub fn classification(&self) -> String {
        match self.status {
            200 => "200 OK".to_string(),
            404 => "404 Not Found".to_string(),
            505 => "505 HTTP Version Not Supported".to_string(),
            other => format!("status {other}"),
        }
    }
}

/// True iff "401 Unauthorized" or "403 Forbidden" appears anywhere in the
/// response text. Not restricted to the status line, so a body or cookie
/// value containing either phrase trips it; that is how this check works.
pub fn is_password_protected(text: &str) -> bool {
    text.contains("401 Unauthorized") || text.contains("403 Forbidden")
}
