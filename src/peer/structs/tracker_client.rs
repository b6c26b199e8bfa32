use std::net::SocketAddr;
use std::time::Duration;

/// Talks to the control tracker of one shard.
#[derive(Clone, Copy, Debug)]
pub struct TrackerClient {
    pub address: SocketAddr,
    pub timeout: Duration,
}
