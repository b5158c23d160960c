//! Copies a response stream to an output sink until the peer closes.
//!
//! Bytes are forwarded exactly as received, chunk by chunk. Nothing about the
//! HTTP response is interpreted: status line, headers and body all pass through.
use crate::error::{Error, Result};
use std::io;

/// Size of the receive buffer used by [`Relay::default`].
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relay {
    buffer_size: usize,
}

impl Default for Relay {
    fn default() -> Self {
        Relay {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl Relay {
    /// A zero size is raised to one byte.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Relay {
            buffer_size: buffer_size.max(1),
        }
    }

    #[cfg(test)]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Forwards everything read from `conn` into `sink` and returns the number
    /// of bytes forwarded. A zero-length read ends the relay successfully.
    ///
    /// On a read error every chunk received before it has already been written
    /// to `sink`.
    pub fn relay<R: io::Read + ?Sized, W: io::Write + ?Sized>(
        &self,
        conn: &mut R,
        sink: &mut W,
    ) -> Result<u64> {
        let mut buf = vec![0; self.buffer_size];
        let mut forwarded: u64 = 0;
        loop {
            let n = match conn.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    tracing::error!(forwarded, "receive failed: {}", source);
                    return Err(Error::Receive { source, forwarded });
                }
            };

            sink.write_all(&buf[..n])
                .and_then(|_| sink.flush())
                .map_err(|source| Error::Output { source, forwarded })?;
            forwarded += n as u64;
            tracing::trace!(chunk = n, forwarded, "relayed chunk");
        }
        tracing::debug!(forwarded, "peer closed the connection");
        Ok(forwarded)
    }
}

/// [`Relay::relay`] with the default buffer size.
pub fn relay<R: io::Read + ?Sized, W: io::Write + ?Sized>(conn: &mut R, sink: &mut W) -> Result<u64> {
    Relay::default().relay(conn, sink)
}
