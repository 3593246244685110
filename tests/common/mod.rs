//! Scripted mock connections and output capture shared by the integration
//! tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use camprobe::network::error::Error;
use camprobe::network::{Close, Connect, Connection, Read, Write};

/// Mock connection that serves a canned response and records what was
/// written to it.
pub struct MockConnection {
    data: &'static [u8],
    read_pos: usize,
    writes: Arc<Mutex<Vec<u8>>>,
}

impl MockConnection {
    /// A connection that will answer any request with `data`.
    pub fn new(data: &'static [u8]) -> Self {
        Self::with_log(data, Arc::new(Mutex::new(Vec::new())))
    }

    /// Like [`new`](Self::new), but records writes into a log the test keeps
    /// a handle to. Useful because the client consumes the connection.
    pub fn with_log(data: &'static [u8], writes: Arc<Mutex<Vec<u8>>>) -> Self {
        Self {
            data,
            read_pos: 0,
            writes,
        }
    }

    /// The bytes written so far.
    pub fn written_data(&self) -> Vec<u8> {
        self.writes.lock().unwrap().clone()
    }
}

impl Read for MockConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.read_pos >= self.data.len() {
            return Ok(0);
        }

        let remaining = self.data.len() - self.read_pos;
        let to_read = buf.len().min(remaining);
        buf[..to_read].copy_from_slice(&self.data[self.read_pos..self.read_pos + to_read]);
        self.read_pos += to_read;

        Ok(to_read)
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.writes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for MockConnection {}

/// Network whose connections always answer with the same canned response.
pub struct ScriptedNetwork {
    response: &'static [u8],
}

impl ScriptedNetwork {
    pub fn new(response: &'static [u8]) -> Self {
        Self { response }
    }
}

impl Connect for ScriptedNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
        Ok(MockConnection::new(self.response))
    }
}

/// Network that refuses every connection attempt.
pub struct RefusedNetwork;

impl Connect for RefusedNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
        Err(Error::ConnectionRefused)
    }
}

static TEST_LOCK: Mutex<()> = Mutex::new(());
static OUTPUT: Mutex<String> = Mutex::new(String::new());

/// Output function that appends into the shared capture buffer. Pass this to
/// `Probe::set_output_function` inside a [`capture`] closure.
pub fn record(text: &str) {
    OUTPUT.lock().unwrap().push_str(text);
}

/// Runs `f` with the capture buffer cleared and exclusive, returning
/// everything [`record`] saw. Serializes tests that capture output so
/// parallel test threads cannot interleave their lines.
pub fn capture<F: FnOnce()>(f: F) -> String {
    let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    OUTPUT.lock().unwrap().clear();
    f();
    let transcript = OUTPUT.lock().unwrap().clone();
    transcript
}
