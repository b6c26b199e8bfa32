use std::time::Duration;

/// How long a control connection may take to deliver its request.
pub const CONTROL_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Size of the port range shards are allocated from, counted from `base_port`.
pub fn port_span(base_port: u16) -> u32 {
    65536u32 - base_port as u32
}
