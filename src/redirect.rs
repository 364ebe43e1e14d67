//! Bounded 302-redirect fetch loop.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::response::Response;
use crate::target::Target;
use crate::transport::connector::Connector;
use crate::transport::h1;

/// Maximum redirect hops before giving up with [`Error::RedirectLimit`].
pub const MAX_REDIRECTS: u32 = 10;

/// A terminal response plus the request text that produced it.
#[derive(Debug)]
pub struct Fetched {
    pub response: Response,
    pub request: String,
}

/// Fetch `target`, following 302 redirects up to [`MAX_REDIRECTS`] hops.
///
/// Each hop opens a fresh connection, runs one exchange, and drops the
/// connection. A 302 response must carry a Location header; its host
/// component (when non-empty) replaces the current host and an empty path
/// becomes `/`. Any other status terminates the loop and is returned as-is,
/// with its classification logged. A chain that cycles or redirects past
/// the cap fails instead of looping forever.
pub fn fetch(connector: &Connector, target: &Target) -> Result<Fetched> {
    let mut current = target.clone();
    let mut hops = 0u32;
    loop {
        let mut stream = connector.connect(&current.host, current.port, current.tls)?;
        let exchange = h1::exchange(&mut stream, &current.host, &current.path)?;
        drop(stream);

        let text = String::from_utf8(exchange.raw.to_vec())?;
        let response = Response::parse(text)?;

        if !response.is_redirect() {
            info!(
                target = %current,
                classification = %response.classification(),
                "fetch complete"
            );
            return Ok(Fetched {
                response,
                request: exchange.request,
            });
        }

        // The cap decides before the Location is even looked at, so a bad
        // Location on a hop that would not be followed anyway still reports
        // the limit, not a parse failure.
        if hops == MAX_REDIRECTS {
            return Err(Error::RedirectLimit {
                count: MAX_REDIRECTS,
            });
        }

        let location = response
            .get_header("location")
            .ok_or_else(|| Error::protocol("redirect location not found"))?
            .to_string();
        current = current.redirected(&location)?;
        hops += 1;
        debug!(hop = hops, location = %location, next = %current, "following 302 redirect");
    }
}
