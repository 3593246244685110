use criterion::{criterion_group, criterion_main};

mod network;

criterion_group!(
    benches,
    network::http::bench_get_exchange,
    network::http::bench_large_body_exchange,
    network::http::bench_dispatch
);
criterion_main!(benches);
