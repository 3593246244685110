//! Minimal HTTP/1.1 client used by the diagnostic probe.
//!
//! This module implements just enough of HTTP/1.1 to exercise the
//! camera-control server: synchronous GET and POST requests with custom
//! headers, fixed-size buffers for predictable memory usage, and status
//! code plus body retrieval from the response.
//!
//! The main entry point is [`client::Client`], which works with any
//! connection type implementing the [`crate::network::Connection`] trait.
//! Every request is sent with `Connection: close`, so a client wraps exactly
//! one connection and is discarded after one exchange.

/// HTTP client implementation and supporting types.
pub mod client;

pub use client::{Client, Header, Method, Request, Response};
