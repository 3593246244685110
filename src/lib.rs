//! # camprobe - Camera-Device Diagnostic Client
//!
//! A small diagnostic HTTP client for manually exercising the endpoints of a
//! remote camera-control device (for example, an Android phone running a
//! camera-control server on the local network) during development testing.
//!
//! The crate is a library with a thin binary on top. The library layers are:
//!
//! - **Connection traits**: [`network`] defines [`Read`](network::Read),
//!   [`Write`](network::Write), [`Close`](network::Close) and the
//!   [`Connect`](network::Connect) factory, so the probe runs over any byte
//!   stream - a real TCP socket or a scripted mock in tests.
//! - **HTTP client**: [`network::http`] is a minimal synchronous HTTP/1.1
//!   client with fixed-size buffers, supporting GET and POST.
//! - **Probe**: [`probe`] dispatches a fixed sequence of requests against a
//!   configured target and reports each outcome as a console line.
//! - **Device views**: [`device`] decodes the JSON bodies the camera-control
//!   server returns into typed structs.
//!
//! ## Usage
//!
//! ```rust
//! use camprobe::network::{Close, Connect, Connection, Read, Write};
//! use camprobe::probe::{Probe, Target};
//! # use camprobe::network::error::Error;
//! # #[derive(Debug)]
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Read for MockConnection {
//! #     type Error = Error;
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = Error;
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = Error;
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # #[derive(Debug)]
//! # struct MockNetwork;
//! # impl Connect for MockNetwork {
//! #     type Connection = MockConnection;
//! #     type Error = Error;
//! #     fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
//! #         Ok(MockConnection)
//! #     }
//! # }
//!
//! fn report(line: &str) {
//!     print!("{}", line);
//! }
//!
//! let target = Target::new("10.100.102.4", 8080);
//! let mut probe = Probe::new(target, MockNetwork);
//! probe.set_output_function(report);
//! probe.run();
//! ```
//!
//! ## Platform support
//!
//! The library core is `no_std`; the `std` feature (on by default) adds the
//! [`network::tcp`] transport and is required by the `camprobe` binary.
//!
//! ## Optional features
//!
//! - `std`: Enable standard library support and the TCP transport
//!   (default: enabled)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Network abstraction layer providing the connection traits, the shared
/// transport error type and the HTTP client.
pub mod network;

/// Typed views of the JSON responses the camera-control server returns.
pub mod device;

/// The diagnostic probe: request dispatch and the fixed route sequence.
pub mod probe;
