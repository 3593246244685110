use camprobe::network::error::Error;
use camprobe::network::http::{Client, Header, Method, Request};
use camprobe::network::{Close, Connect, Connection, Read, Write};
use camprobe::probe::{Probe, Target};
use criterion::{BatchSize, Criterion, Throughput};

/// In-memory connection serving a canned response; write side is a sink.
struct LoopConnection {
    response: Vec<u8>,
    read_pos: usize,
}

impl LoopConnection {
    fn new(response: Vec<u8>) -> Self {
        Self {
            response,
            read_pos: 0,
        }
    }
}

impl Read for LoopConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.read_pos >= self.response.len() {
            return Ok(0);
        }
        let to_read = buf.len().min(self.response.len() - self.read_pos);
        buf[..to_read].copy_from_slice(&self.response[self.read_pos..self.read_pos + to_read]);
        self.read_pos += to_read;
        Ok(to_read)
    }
}

impl Write for LoopConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for LoopConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for LoopConnection {}

struct LoopNetwork {
    response: Vec<u8>,
}

impl Connect for LoopNetwork {
    type Connection = LoopConnection;
    type Error = Error;

    fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
        Ok(LoopConnection::new(self.response.clone()))
    }
}

fn small_response() -> Vec<u8> {
    b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nOK".to_vec()
}

fn large_response() -> Vec<u8> {
    let body = "x".repeat(1024);
    let mut response = format!("HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n", body.len())
        .into_bytes();
    response.extend_from_slice(body.as_bytes());
    response
}

fn exchange(client: &mut Client<LoopConnection>) {
    let mut request = Request::new(Method::Get, "/getprop");
    request
        .headers
        .push(Header::new("Host", "10.100.102.4:8080").unwrap())
        .unwrap();
    let response = client.request(&request).expect("exchange failed");
    assert_eq!(response.status_code, 200);
}

pub fn bench_get_exchange(c: &mut Criterion) {
    let response = small_response();
    let mut group = c.benchmark_group("http");
    group.throughput(Throughput::Bytes(response.len() as u64));
    group.bench_function("get_exchange", |b| {
        b.iter_batched_ref(
            || Client::new(LoopConnection::new(small_response())),
            exchange,
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

pub fn bench_large_body_exchange(c: &mut Criterion) {
    let response = large_response();
    let mut group = c.benchmark_group("http");
    group.throughput(Throughput::Bytes(response.len() as u64));
    group.bench_function("large_body_exchange", |b| {
        b.iter_batched_ref(
            || Client::new(LoopConnection::new(large_response())),
            exchange,
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

pub fn bench_dispatch(c: &mut Criterion) {
    c.bench_function("probe_dispatch", |b| {
        b.iter_batched_ref(
            || {
                let network = LoopNetwork {
                    response: small_response(),
                };
                Probe::new(Target::new("10.100.102.4", 8080), network)
            },
            |probe| probe.dispatch(Method::Get, "getprop"),
            BatchSize::SmallInput,
        );
    });
}
