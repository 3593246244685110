//! Diagnostic probe for the camera-control server.
//!
//! The probe issues a fixed, ordered set of HTTP requests against a single
//! target device and reports each outcome as one console line:
//!
//! ```text
//! [GET] /getprop → 200: {"Model":"Pixel 7"}
//! [POST] /takephoto → Failed: connection refused
//! ```
//!
//! Every route is attempted exactly once per run, in a fixed order, and a
//! failure never stops the run: transport and protocol errors are converted
//! into a `Failed:` line at the dispatch site and swallowed there.
//!
//! Report lines are pushed through an output function set with
//! [`Probe::set_output_function`]; the binary wires this to standard output,
//! while tests capture the text instead. With no output function set the
//! probe still performs every request, silently.
//!
//! # Usage
//!
//! ```rust,no_run
//! # #[cfg(feature = "std")] {
//! use camprobe::network::tcp::TcpConnector;
//! use camprobe::probe::{DEVICE_HOST, DEVICE_PORT, Probe, Target};
//!
//! fn to_stdout(text: &str) {
//!     print!("{}", text);
//! }
//!
//! let target = Target::new(DEVICE_HOST, DEVICE_PORT);
//! let mut probe = Probe::new(target, TcpConnector::new());
//! probe.set_output_function(to_stdout);
//! probe.run();
//! # }
//! ```

use core::fmt::Write;

use heapless::String;

use crate::network::Connect;
use crate::network::error::Error;
use crate::network::http::{self, Client, Header, Method, Request, Response};

/// Address of the camera-control device on the development network.
pub const DEVICE_HOST: &str = "10.100.102.4";

/// Port the camera-control server listens on.
pub const DEVICE_PORT: u16 = 8080;

/// GET routes exercised by [`Probe::run`], in order. The empty route maps to
/// the server root.
pub const GET_ROUTES: &[&str] = &["", "getprop"];

/// POST routes exercised by [`Probe::run`], in order.
pub const POST_ROUTES: &[&str] = &["takephoto", "opencamera"];

/// Maximum length of a `host:port` authority string.
pub const MAX_AUTHORITY_LEN: usize = 80;

/// Maximum length of a request path or full URL.
pub const MAX_URL_LEN: usize = 192;

/// Maximum length of one report line. Large enough for the longest prefix
/// plus a response body that fills the client's buffer.
pub const MAX_REPORT_LEN: usize = http::client::BUFFER_SIZE + 128;

/// A single report line as emitted through the output function.
pub type ReportLine = String<MAX_REPORT_LEN>;

/// The fixed host and port of the device under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'a> {
    host: &'a str,
    port: u16,
}

impl<'a> Target<'a> {
    /// A target listening on `host:port`. Neither value is validated; a bad
    /// address surfaces as a connect failure at dispatch time.
    pub const fn new(host: &'a str, port: u16) -> Self {
        Self { host, port }
    }

    /// The `host:port` authority string passed to the connector.
    pub fn authority(&self) -> Result<String<MAX_AUTHORITY_LEN>, Error> {
        let mut authority = String::new();
        write!(authority, "{}:{}", self.host, self.port).map_err(|_| Error::InvalidAddress)?;
        Ok(authority)
    }

    /// The full URL for `route`: `http://{host}:{port}/{route}`. The empty
    /// route yields the address root with no trailing double slash.
    pub fn url(&self, route: &str) -> Result<String<MAX_URL_LEN>, Error> {
        let mut url = String::new();
        write!(url, "http://{}:{}/{}", self.host, self.port, route)
            .map_err(|_| Error::InvalidAddress)?;
        Ok(url)
    }

    /// The request path for `route`: `/{route}`.
    pub fn path(&self, route: &str) -> Result<String<MAX_URL_LEN>, Error> {
        let mut path = String::new();
        write!(path, "/{}", route).map_err(|_| Error::InvalidAddress)?;
        Ok(path)
    }
}

/// The request dispatcher and driver.
///
/// `Probe` opens one fresh connection per route through the supplied
/// [`Connect`] implementation, performs the exchange synchronously, and
/// reports the outcome. No timeout is configured and no retry occurs.
pub struct Probe<'a, N>
where
    N: Connect<Error = Error>,
{
    target: Target<'a>,
    network: N,
    output: Option<fn(&str)>,
}

impl<'a, N> Probe<'a, N>
where
    N: Connect<Error = Error>,
{
    /// A probe against `target`, connecting through `network`. No output
    /// function is set yet.
    pub fn new(target: Target<'a>, network: N) -> Self {
        Self {
            target,
            network,
            output: None,
        }
    }

    /// Sets the function report lines are pushed through. Each call receives
    /// one line (or section header) including its trailing newline.
    pub fn set_output_function(&mut self, output: fn(&str)) {
        self.output = Some(output);
    }

    /// Issues one request against `route` and emits the report line.
    ///
    /// Never fails from the caller's point of view: any error is reported as
    /// a `Failed:` line and execution continues.
    pub fn dispatch(&mut self, method: Method, route: &str) {
        let mut line = ReportLine::new();
        match self.exchange(method, route) {
            Ok(response) => {
                let body = response.body_str().unwrap_or("");
                // Capacity covers a full response buffer; an overflowing
                // write truncates the body rather than dropping the line.
                let _ = write!(
                    line,
                    "[{}] /{} → {}: {}\n",
                    method.as_str(),
                    route,
                    response.status_code,
                    body
                );
            }
            Err(e) => {
                let _ = write!(line, "[{}] /{} → Failed: {}\n", method.as_str(), route, e);
            }
        }
        self.emit(&line);
    }

    /// Runs the full diagnostic sequence: both GET routes, then both POST
    /// routes, with a section header before each group. Every route is
    /// attempted regardless of earlier outcomes.
    pub fn run(&mut self) {
        self.emit("=== Sending GET requests ===\n");
        for route in GET_ROUTES {
            self.dispatch(Method::Get, route);
        }

        self.emit("\n=== Sending POST requests ===\n");
        for route in POST_ROUTES {
            self.dispatch(Method::Post, route);
        }
    }

    /// Connect, send, and read one response. The connection is closed before
    /// the outcome is inspected; a body that is not valid UTF-8 is treated
    /// as a protocol failure since there is no way to print it faithfully.
    fn exchange(&mut self, method: Method, route: &str) -> Result<Response, Error> {
        let authority = self.target.authority()?;
        let path = self.target.path(route)?;

        let connection = self.network.connect(&authority)?;
        let mut client = Client::new(connection);

        let mut request = Request::new(method, &path);
        request
            .headers
            .push(Header::new("Host", &authority)?)
            .map_err(|_| Error::WriteError)?;

        let result = client.request(&request);
        let _ = client.close();

        let response = result?;
        response.body_str()?;
        Ok(response)
    }

    fn emit(&self, text: &str) {
        if let Some(output) = self.output {
            output(text);
        }
    }
}

impl<'a, N> core::fmt::Debug for Probe<'a, N>
where
    N: Connect<Error = Error>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Probe")
            .field("target", &self.target)
            .field("output", &self.output.is_some())
            .finish_non_exhaustive()
    }
}
