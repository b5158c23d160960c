//! One-shot HTTP/1.1 server for integration tests.
//!
//! Accepts a single connection, reads the request head, writes a canned
//! response and closes the socket.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

pub struct OneShotServer {
    pub port: u16,
    handle: thread::JoinHandle<Vec<u8>>,
}

impl OneShotServer {
    /// Starts the server in a background thread. It replies with `response`
    /// once the request head has arrived.
    pub fn start(response: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            stream
                .set_read_timeout(Some(Duration::from_secs(5)))
                .unwrap();
            let request = read_head(&mut stream);
            stream.write_all(&response).unwrap();
            request
        });
        OneShotServer { port, handle }
    }

    /// Waits for the exchange to finish and returns the raw request received.
    pub fn request(self) -> Vec<u8> {
        self.handle.join().expect("server thread panicked")
    }
}

fn read_head(stream: &mut impl Read) -> Vec<u8> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.ends_with(b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    request
}

/// A response with a binary body, so nothing along the way can treat it as text.
pub fn binary_response() -> Vec<u8> {
    let body: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let mut response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(&body);
    response
}

/// A port nothing is listening on, found by binding and releasing it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}
