//! A minimal HTTP/1.1 client that fetches one url and relays the raw response.
//!
//! See the `url` module for splitting `[scheme://]host[:port]/path` strings.
//! See the `client` module for building and sending the `GET` request.
//! See the `relay` module for copying the response to an output sink.

pub mod client;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod relay;
pub mod url;
