use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed url '{0}': no host")]
    MalformedUrl(String),

    #[error("failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to send request ({received} response bytes drained): {source}")]
    Send {
        #[source]
        source: io::Error,
        received: u64,
    },

    #[error("receive failed after {forwarded} bytes: {source}")]
    Receive {
        #[source]
        source: io::Error,
        forwarded: u64,
    },

    #[error("failed to write output after {forwarded} bytes: {source}")]
    Output {
        #[source]
        source: io::Error,
        forwarded: u64,
    },
}

pub type Result<R> = std::result::Result<R, Error>;

impl Error {
    /// Process exit status for this failure. `1` is reserved for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MalformedUrl(_) => 2,
            Error::Receive { .. } => 3,
            Error::Connect { .. } => 4,
            Error::Send { .. } => 5,
            Error::Output { .. } => 6,
        }
    }
}
