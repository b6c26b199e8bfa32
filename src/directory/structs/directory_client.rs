use std::net::SocketAddr;
use std::time::Duration;

/// Opens one connection per request to the directory at `address`.
#[derive(Clone, Copy, Debug)]
pub struct DirectoryClient {
    pub address: SocketAddr,
    pub timeout: Duration,
}
