//! A network abstraction layer for the diagnostic probe
//!
//! This module defines the small set of traits the probe and the HTTP client
//! are written against. Anything that can read and write bytes and be closed
//! is a [`Connection`]; a [`Connect`] implementation opens connections to a
//! remote address. The `camprobe` binary plugs in the [`tcp`] transport, and
//! the test suite plugs in scripted mock connections.

#![allow(missing_docs)]
#![deny(unsafe_code)]

/// Common error type for transport and protocol failures
pub mod error;

/// Minimal synchronous HTTP/1.1 client
pub mod http;

/// `std::net::TcpStream`-backed transport
#[cfg(feature = "std")]
pub mod tcp;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Read, Write};
}

// Core synchronous traits
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `remote`, given as `host:port`
    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error>;
}
