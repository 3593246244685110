use crate::network::Connection;
use crate::network::error::Error;
use core::fmt::Write;
use heapless::{String, Vec};

const MAX_HEADERS: usize = 16;
const MAX_HEADER_NAME_LEN: usize = 64;
const MAX_HEADER_VALUE_LEN: usize = 256;

/// Capacity of the serialized-request and response buffers.
pub const BUFFER_SIZE: usize = 2048;

/// `User-Agent` value sent when the caller does not supply one.
pub const DEFAULT_USER_AGENT: &str = concat!("camprobe/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// The method name as it appears on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Header {
    pub name: String<MAX_HEADER_NAME_LEN>,
    pub value: String<MAX_HEADER_VALUE_LEN>,
}

impl Header {
    /// Builds a header, failing with [`Error::WriteError`] when the name or
    /// value exceeds the fixed capacities.
    pub fn new(name: &str, value: &str) -> Result<Self, Error> {
        Ok(Self {
            name: String::try_from(name).map_err(|_| Error::WriteError)?,
            value: String::try_from(value).map_err(|_| Error::WriteError)?,
        })
    }
}

pub struct Request<'a> {
    pub method: Method,
    pub path: &'a str,
    pub headers: Vec<Header, MAX_HEADERS>,
    pub body: Option<&'a [u8]>,
}

impl<'a> Request<'a> {
    /// A request with no headers and no body.
    pub fn new(method: Method, path: &'a str) -> Self {
        Self {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }
}

#[derive(Debug)]
pub struct Response {
    pub status_code: u16,
    pub headers: Vec<Header, MAX_HEADERS>,
    pub body: Vec<u8, BUFFER_SIZE>,
}

impl Response {
    /// The response body as text.
    pub fn body_str(&self) -> Result<&str, Error> {
        core::str::from_utf8(&self.body).map_err(|_| Error::ProtocolError)
    }

    /// Looks up a response header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

/// A one-shot HTTP client over a [`Connection`].
///
/// Requests are sent with `Connection: close`, so the wrapped connection is
/// good for exactly one request/response exchange.
pub struct Client<C: Connection> {
    connection: C,
}

impl<C: Connection> Client<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Closes the underlying connection.
    pub fn close(self) -> Result<(), Error> {
        self.connection.close().map_err(|_| Error::NotOpen)
    }

    /// Serializes `request`, sends it, and reads the response until the peer
    /// closes the connection or the response buffer is full.
    pub fn request(&mut self, request: &Request) -> Result<Response, Error> {
        let request_buf = serialize(request)?;

        self.connection
            .write(&request_buf)
            .map_err(|_| Error::WriteError)?;
        self.connection.flush().map_err(|_| Error::WriteError)?;

        let mut response_buf = [0u8; BUFFER_SIZE];
        let mut total_read = 0;
        loop {
            match self.connection.read(&mut response_buf[total_read..]) {
                Ok(0) if total_read > 0 => break,
                Ok(0) => return Err(Error::ConnectionClosed),
                Ok(n) => {
                    total_read += n;
                    if total_read >= response_buf.len() {
                        break;
                    }
                }
                Err(_) => return Err(Error::ReadError),
            }
        }

        parse(&response_buf[..total_read])
    }
}

/// Serializes the request line, headers and body into one buffer.
///
/// `Content-Length` is always emitted for POST (0 when there is no body),
/// and `User-Agent`/`Connection: close` are supplied unless the caller set
/// them explicitly.
fn serialize(request: &Request) -> Result<Vec<u8, BUFFER_SIZE>, Error> {
    let mut buf: Vec<u8, BUFFER_SIZE> = Vec::new();

    put(&mut buf, request.method.as_str().as_bytes())?;
    put(&mut buf, b" ")?;
    put(&mut buf, request.path.as_bytes())?;
    put(&mut buf, b" HTTP/1.1\r\n")?;

    let mut has_user_agent = false;
    let mut has_connection = false;
    for header in &request.headers {
        if header.name.eq_ignore_ascii_case("User-Agent") {
            has_user_agent = true;
        }
        if header.name.eq_ignore_ascii_case("Connection") {
            has_connection = true;
        }
        put(&mut buf, header.name.as_bytes())?;
        put(&mut buf, b": ")?;
        put(&mut buf, header.value.as_bytes())?;
        put(&mut buf, b"\r\n")?;
    }

    if !has_user_agent {
        put(&mut buf, b"User-Agent: ")?;
        put(&mut buf, DEFAULT_USER_AGENT.as_bytes())?;
        put(&mut buf, b"\r\n")?;
    }
    if !has_connection {
        put(&mut buf, b"Connection: close\r\n")?;
    }

    let body_len = request.body.map_or(0, <[u8]>::len);
    if request.body.is_some() || request.method == Method::Post {
        let mut len_str: String<10> = String::new();
        write!(len_str, "{}", body_len).map_err(|_| Error::WriteError)?;
        put(&mut buf, b"Content-Length: ")?;
        put(&mut buf, len_str.as_bytes())?;
        put(&mut buf, b"\r\n")?;
    }
    put(&mut buf, b"\r\n")?;

    if let Some(body) = request.body {
        put(&mut buf, body)?;
    }

    Ok(buf)
}

/// Parses a raw HTTP/1.1 response: status line, headers, body.
fn parse(response_data: &[u8]) -> Result<Response, Error> {
    let header_end_pos = find_slice(response_data, b"\r\n\r\n").ok_or(Error::ProtocolError)?;
    let header_data = &response_data[..header_end_pos];
    let body_data = &response_data[header_end_pos + 4..];

    let header_str = core::str::from_utf8(header_data).map_err(|_| Error::ProtocolError)?;
    let mut lines = header_str.lines();

    let status_line = lines.next().ok_or(Error::ProtocolError)?;
    let mut status_parts = status_line.splitn(3, ' ');
    let version = status_parts.next().ok_or(Error::ProtocolError)?;
    if !version.starts_with("HTTP/") {
        return Err(Error::ProtocolError);
    }
    let status_code = status_parts
        .next()
        .ok_or(Error::ProtocolError)?
        .parse::<u16>()
        .map_err(|_| Error::ProtocolError)?;

    let mut headers: Vec<Header, MAX_HEADERS> = Vec::new();
    let mut content_length: Option<usize> = None;

    for line in lines {
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ':');
        let name = parts.next().ok_or(Error::ProtocolError)?.trim();
        let value = parts.next().ok_or(Error::ProtocolError)?.trim();

        if name.eq_ignore_ascii_case("Content-Length") {
            content_length = value.parse::<usize>().ok();
        }

        headers
            .push(Header::new(name, value).map_err(|_| Error::ProtocolError)?)
            .map_err(|_| Error::ProtocolError)?;
    }

    let mut body: Vec<u8, BUFFER_SIZE> =
        Vec::from_slice(body_data).map_err(|_| Error::ProtocolError)?;
    if let Some(len) = content_length {
        if body.len() < len {
            // The peer closed (or the buffer filled) before delivering the
            // declared body length.
            return Err(Error::ConnectionClosed);
        }
        body.truncate(len);
    }

    Ok(Response {
        status_code,
        headers,
        body,
    })
}

fn put(buf: &mut Vec<u8, BUFFER_SIZE>, bytes: &[u8]) -> Result<(), Error> {
    buf.extend_from_slice(bytes).map_err(|_| Error::WriteError)
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
