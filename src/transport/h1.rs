//! Hand-framed HTTP/1.1 request/response exchange.

use std::io::{Read, Write};

use bytes::Bytes;
use tracing::debug;

use crate::error::Result;
use crate::transport::connector::MaybeTlsStream;

/// Chunk size for response reads.
const RECV_CHUNK: usize = 10_000;

/// The raw response bytes and the literal request text that produced them.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub raw: Bytes,
    pub request: String,
}

/// Build the literal request: request line plus Host and Connection headers,
/// nothing else, no body.
pub fn build_request(host: &str, path: &str) -> String {
    format!("GET {path} HTTP/1.1\r\nHost: {host}\r\nConnection: close\r\n\r\n")
}

/// Write the GET request in one call, then read until the peer closes.
///
/// End-of-stream is the only end-of-message signal: there is no
/// Content-Length or chunked-transfer awareness, which is why the request
/// pins `Connection: close`. A read timeout configured on the stream bounds
/// each blocking read so a peer that never closes cannot stall forever.
pub fn exchange(stream: &mut MaybeTlsStream, host: &str, path: &str) -> Result<Exchange> {
    let request = build_request(host, path);
    stream.write_all(request.as_bytes())?;
    stream.flush()?;
    debug!(host, path, "request sent");

    let mut response = Vec::new();
    let mut chunk = [0u8; RECV_CHUNK];
    loop {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        response.extend_from_slice(&chunk[..n]);
    }
    debug!(bytes = response.len(), "peer closed, response complete");

    Ok(Exchange {
        raw: Bytes::from(response),
        request,
    })
}
