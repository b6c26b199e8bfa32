use std::net::SocketAddr;

/// Where, and with which listening port, one swarm membership is announced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeepAliveTarget {
    pub tracker: SocketAddr,
    pub listen_port: u16,
}
