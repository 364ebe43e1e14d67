//! BoringSSL-backed blocking connector.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use boring::ssl::{SslConnector, SslMethod, SslStream};
use tracing::debug;

use crate::error::{Error, Result};
use crate::timeouts::Timeouts;
use crate::version::HttpVersion;

/// ALPN protocol list advertised during the handshake, wire format.
const ALPN_PROTOCOLS: &[u8] = b"\x08http/1.1\x02h2";

/// A connected stream, TLS-wrapped or plaintext.
///
/// Dropping it closes the socket, so every exit path of a caller that owns
/// one tears the connection down exactly once.
pub enum MaybeTlsStream {
    Plain(TcpStream),
    Tls(SslStream<TcpStream>),
}

impl MaybeTlsStream {
    /// The ALPN protocol the server selected, if any.
    pub fn selected_alpn(&self) -> Option<&[u8]> {
        match self {
            Self::Plain(_) => None,
            Self::Tls(stream) => stream.ssl().selected_alpn_protocol(),
        }
    }

    pub fn negotiated_version(&self) -> HttpVersion {
        HttpVersion::from_alpn(self.selected_alpn())
    }
}

impl Read for MaybeTlsStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Plain(stream) => stream.read(buf),
            Self::Tls(stream) => stream.read(buf),
        }
    }
}

impl Write for MaybeTlsStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(stream) => stream.write(buf),
            Self::Tls(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(stream) => stream.flush(),
            Self::Tls(stream) => stream.flush(),
        }
    }
}

/// Opens TCP connections, optionally TLS-wrapped with default trust roots.
#[derive(Clone, Debug, Default)]
pub struct Connector {
    timeouts: Timeouts,
}

impl Connector {
    pub fn new(timeouts: Timeouts) -> Self {
        Self { timeouts }
    }

    /// Open a connection to `host:port`, wrapping it in TLS when asked.
    ///
    /// TLS handshakes use the platform default trust roots and advertise
    /// ALPN `["http/1.1", "h2"]`; the negotiated protocol is queryable on
    /// the returned stream.
    pub fn connect(&self, host: &str, port: u16, tls: bool) -> Result<MaybeTlsStream> {
        let tcp = self.connect_tcp(host, port)?;
        if !tls {
            debug!(host, port, "plaintext connection established");
            return Ok(MaybeTlsStream::Plain(tcp));
        }

        let mut builder = SslConnector::builder(SslMethod::tls_client())
            .map_err(|e| Error::tls(format!("failed to create SSL connector: {e}")))?;
        builder
            .set_alpn_protos(ALPN_PROTOCOLS)
            .map_err(|e| Error::tls(format!("failed to set ALPN protocols: {e}")))?;
        let stream = builder
            .build()
            .connect(host, tcp)
            .map_err(|e| Error::tls(format!("TLS handshake with {host}:{port} failed: {e}")))?;

        debug!(
            host,
            port,
            alpn = %String::from_utf8_lossy(stream.ssl().selected_alpn_protocol().unwrap_or(b"")),
            "TLS connection established"
        );
        Ok(MaybeTlsStream::Tls(stream))
    }

    /// Probe whether `host:port` negotiates HTTP/2 via ALPN.
    ///
    /// `Ok(true)` iff the server selected `h2`. A handshake that completes
    /// without ALPN agreement is `Ok(false)`; connect and handshake failures
    /// are `Err` and left to the caller to classify.
    pub fn probe_http2(&self, host: &str, port: u16) -> Result<bool> {
        let stream = self.connect(host, port, true)?;
        let version = stream.negotiated_version();
        debug!(host, port, negotiated = version.as_str(), "ALPN probe complete");
        Ok(version.is_h2())
    }

    fn connect_tcp(&self, host: &str, port: u16) -> Result<TcpStream> {
        let addrs: Vec<_> = (host, port)
            .to_socket_addrs()
            .map_err(|e| Error::connect(format!("failed to resolve {host}:{port}: {e}")))?
            .collect();
        if addrs.is_empty() {
            return Err(Error::connect(format!("{host}:{port} resolved to no addresses")));
        }

        let mut last_err = None;
        for addr in addrs {
            let attempt = match self.timeouts.connect {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => {
                    stream.set_read_timeout(self.timeouts.read)?;
                    stream.set_write_timeout(self.timeouts.write)?;
                    return Ok(stream);
                }
                Err(e) => last_err = Some(e),
            }
        }
        Err(Error::connect(format!(
            "failed to connect to {host}:{port}: {}",
            last_err.expect("at least one connect attempt was made")
        )))
    }
}
