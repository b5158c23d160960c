use crate::error::{Error, Result};
use crate::protocol::{HttpMethod, HttpRequest};
use crate::relay::Relay;
use crate::url::{Scheme, Url};
use std::io;

pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    pub fn get(url: &Url) -> Self {
        HttpRequestBuilder::with_target(url.host(), url.port(), url.request_target())
    }

    /// `path` must not carry its leading slash; exactly one is added here.
    pub fn new(host: &str, port: &str, path: &str) -> Self {
        HttpRequestBuilder::with_target(host, port, format!("/{}", path))
    }

    fn with_target(host: &str, port: &str, target: String) -> Self {
        let mut request = HttpRequest::new(HttpMethod::Get, target);
        request.add_header("Host", format!("{}:{}", host, port));
        request.add_header("Connection", "close");
        HttpRequestBuilder { request }
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.request.to_string().into_bytes()
    }

    pub fn send<S: io::Write + ?Sized>(self, socket: &mut S) -> io::Result<()> {
        socket.write_all(&self.into_bytes())?;
        socket.flush()
    }
}

/// Renders the `GET` request for `host`, `port` and `path` as wire bytes.
pub fn build(host: &str, port: &str, path: &str) -> Vec<u8> {
    HttpRequestBuilder::new(host, port, path).into_bytes()
}

/// Opens a duplex byte stream to a host.
pub trait StreamConnector {
    type Stream: io::Read + io::Write;
    fn connect(&self, host: &str, port: &str) -> Result<Self::Stream>;
}

/// Resolves and connects with `std::net::TcpStream`. Every resolved address is
/// tried in turn; there are no retries or timeouts beyond the platform's.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl StreamConnector for TcpConnector {
    type Stream = std::net::TcpStream;

    fn connect(&self, host: &str, port: &str) -> Result<Self::Stream> {
        let err = |source| Error::Connect {
            host: host.into(),
            port: port.into(),
            source,
        };
        let port_number: u16 = port.parse().map_err(|_| {
            err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid port '{}'", port),
            ))
        })?;
        std::net::TcpStream::connect((host, port_number)).map_err(err)
    }
}

/// Issues one `GET` per call and relays the raw response to a sink.
pub struct HttpClient<C: StreamConnector> {
    connector: C,
    relay: Relay,
}

impl HttpClient<TcpConnector> {
    pub fn new() -> Self {
        HttpClient::with_connector(TcpConnector)
    }
}

impl Default for HttpClient<TcpConnector> {
    fn default() -> Self {
        HttpClient::new()
    }
}

impl<C: StreamConnector> HttpClient<C> {
    pub fn with_connector(connector: C) -> Self {
        HttpClient {
            connector,
            relay: Relay::default(),
        }
    }

    pub fn with_relay(mut self, relay: Relay) -> Self {
        self.relay = relay;
        self
    }

    /// Parses `url`, fetches it and writes the raw response into `sink`.
    /// Returns the number of response bytes written.
    pub fn get<W: io::Write + ?Sized>(&self, url: &str, sink: &mut W) -> Result<u64> {
        let parsed = Url::parse(url)?;
        if let (Some(scheme @ Scheme::Https), _) = Scheme::strip(url) {
            tracing::warn!(%scheme, "{} is fetched without TLS", url);
        }
        self.get_url(&parsed, sink)
    }

    pub fn get_url<W: io::Write + ?Sized>(&self, url: &Url, sink: &mut W) -> Result<u64> {
        tracing::info!(host = url.host(), port = url.port(), "connecting");
        let mut stream = self.connector.connect(url.host(), url.port())?;

        let request = HttpRequestBuilder::get(url);
        tracing::debug!(request = %request.request(), "sending request");

        // A failed send still lets whatever the peer already wrote be drained.
        let send_error = request.send(&mut stream).err();
        if let Some(e) = &send_error {
            tracing::warn!("failed to send request, draining response anyway: {}", e);
        }

        let relayed = self.relay.relay(&mut stream, sink);
        drop(stream);

        match (relayed, send_error) {
            (Err(e), Some(send)) => {
                tracing::error!("request was not fully sent: {}", send);
                Err(e)
            }
            (Err(e), None) => Err(e),
            (Ok(received), Some(source)) => Err(Error::Send { source, received }),
            (Ok(received), None) => {
                tracing::info!(received, "response complete");
                Ok(received)
            }
        }
    }
}
