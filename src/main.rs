//! Diagnostic driver: exercises the camera-control device's endpoints and
//! prints each outcome. Always exits 0; individual failures are reported
//! inline and never abort the run.

use camprobe::network::tcp::TcpConnector;
use camprobe::probe::{DEVICE_HOST, DEVICE_PORT, Probe, Target};

fn to_stdout(text: &str) {
    print!("{}", text);
}

fn main() {
    let target = Target::new(DEVICE_HOST, DEVICE_PORT);
    let mut probe = Probe::new(target, TcpConnector::new());
    probe.set_output_function(to_stdout);
    probe.run();
}
