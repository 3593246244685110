//! `std::net::TcpStream`-backed implementation of the connection traits.
//!
//! This is the transport the `camprobe` binary uses. No read or connect
//! timeout is configured: a call against an unresponsive target blocks until
//! the operating system gives up.

use std::io::{Read as IoRead, Write as IoWrite};
use std::net::{Shutdown, TcpStream};

use crate::network::error::Error;
use crate::network::{Close, Connect, Connection, Read, Write};

/// A plain TCP connection.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl Read for TcpConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.stream.read(buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::WouldBlock {
                Error::Timeout
            } else {
                Error::ReadError
            }
        })
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream.write(buf).map_err(|_| Error::WriteError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        // The peer may already have shut the socket down; that is not a
        // failure worth reporting on a diagnostic connection.
        let _ = self.stream.shutdown(Shutdown::Both);
        Ok(())
    }
}

impl Connection for TcpConnection {}

/// Opens a fresh [`TcpConnection`] per request.
#[derive(Debug, Default)]
pub struct TcpConnector;

impl TcpConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error> {
        let stream = TcpStream::connect(remote).map_err(|e| match e.kind() {
            std::io::ErrorKind::ConnectionRefused => Error::ConnectionRefused,
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => Error::Timeout,
            std::io::ErrorKind::InvalidInput
            | std::io::ErrorKind::AddrNotAvailable
            | std::io::ErrorKind::NotFound => Error::InvalidAddress,
            _ => Error::NotOpen,
        })?;
        Ok(TcpConnection { stream })
    }
}
