//! Timeout configuration for probe connections.
//!
//! A peer that never closes its end of the connection would otherwise stall
//! the probe forever, since end-of-stream is the only end-of-message signal.
//! Timeouts default on; [`Timeouts::none`] removes every deadline when fully
//! blocking reads are what an operator wants.

use std::time::Duration;

/// Timeout configuration applied to each connection the probe opens.
///
/// All timeouts are optional. When `None`, no deadline is applied for that
/// phase.
#[derive(Clone, Copy, Debug)]
pub struct Timeouts {
    /// Deadline for DNS resolution plus TCP connect.
    pub connect: Option<Duration>,
    /// Maximum time a single blocking read may wait for data.
    pub read: Option<Duration>,
    /// Maximum time a single blocking write may wait to make progress.
    pub write: Option<Duration>,
}

impl Timeouts {
    /// Defaults suitable for an interactive diagnostic run.
    pub fn probe_defaults() -> Self {
        Self {
            connect: Some(Duration::from_secs(10)),
            read: Some(Duration::from_secs(30)),
            write: Some(Duration::from_secs(30)),
        }
    }

    /// No deadlines at all. Reads block until the peer closes or errors.
    pub fn none() -> Self {
        Self {
            connect: None,
            read: None,
            write: None,
        }
    }

    /// Override the connect deadline.
    pub fn with_connect(mut self, timeout: Duration) -> Self {
        self.connect = Some(timeout);
        self
    }

    /// Override the per-read deadline.
    pub fn with_read(mut self, timeout: Duration) -> Self {
        self.read = Some(timeout);
        self
    }

    /// Override the per-write deadline.
    pub fn with_write(mut self, timeout: Duration) -> Self {
        self.write = Some(timeout);
        self
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self::probe_defaults()
    }
}
