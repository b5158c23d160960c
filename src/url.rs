//! Decomposition of `[scheme://]host[:port]/path` strings.
//!
//! The parser is deliberately literal: it strips an `http://` or `https://`
//! prefix, splits the path off at the first `/`, then splits the port off at
//! the first `:`. There is no percent-decoding, character validation, query or
//! fragment handling, and no support for bracketed IPv6 literals.
use crate::error::{Error, Result};
use std::fmt;
use std::str;

/// Port used when the url does not name one.
pub const DEFAULT_PORT: &str = "80";

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    fn prefix(self) -> &'static str {
        match self {
            Scheme::Http => "http://",
            Scheme::Https => "https://",
        }
    }

    /// Removes at most one recognized scheme prefix from `s`.
    pub fn strip(s: &str) -> (Option<Scheme>, &str) {
        for scheme in [Scheme::Http, Scheme::Https] {
            if let Some(rest) = s.strip_prefix(scheme.prefix()) {
                return (Some(scheme), rest);
            }
        }
        (None, s)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

/// A url split into the three parts needed to issue a request.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Url {
    host: String,
    port: String,
    path: String,
}

impl Url {
    pub fn parse(input: &str) -> Result<Self> {
        let (scheme, rest) = Scheme::strip(input);

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[(i + 1)..]),
            None => (rest, ""),
        };

        let (host, port) = match authority.find(':') {
            Some(i) => (&authority[..i], &authority[(i + 1)..]),
            None => (authority, DEFAULT_PORT),
        };

        if host.is_empty() {
            return Err(Error::MalformedUrl(input.into()));
        }

        let url = Url {
            host: host.into(),
            port: port.into(),
            path: path.into(),
        };
        tracing::debug!(?scheme, host = url.host(), port = url.port(), path = url.path(), "parsed url");
        Ok(url)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// The path without its leading slash. Empty means the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path as it appears in the request line, with exactly one leading slash.
    pub fn request_target(&self) -> String {
        format!("/{}", self.path)
    }
}

impl str::FromStr for Url {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Url::parse(s)
    }
}

/// Renders `host:port/path`.
///
/// The rendering parses back to an equal `Url` unless it happens to begin with
/// `http://` or `https://`, which only occurs for a host of `http` or `https`
/// with an empty port. The parser would strip that text as a scheme.
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}/{}", self.host, self.port, self.path)
    }
}
