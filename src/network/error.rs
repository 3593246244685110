//! Common error types for network operations

/// A common error type for network operations.
///
/// This enum defines the single failure category the probe reports: every
/// transport or protocol failure maps onto one of these variants, and the
/// [`Display`](core::fmt::Display) impl provides the human-readable
/// description printed after `Failed:`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a connection that is not open.
    NotOpen,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed before a response arrived.
    ConnectionClosed,
    /// An invalid address was provided.
    InvalidAddress,
    /// The response could not be parsed as HTTP.
    ProtocolError,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let description = match self {
            Error::NotOpen => "connection not open",
            Error::WriteError => "write failed",
            Error::ReadError => "read failed",
            Error::ConnectionRefused => "connection refused",
            Error::Timeout => "timed out",
            Error::ConnectionClosed => "connection closed before a response arrived",
            Error::InvalidAddress => "invalid address",
            Error::ProtocolError => "malformed HTTP response",
        };
        f.write_str(description)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
