//! Peer identity used by swarms, queries and piece exchange.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A peer as seen by the trackers: its IP address plus the port its upload
/// server listens on.
///
/// Two addresses are the same peer only when both the IP and the port match.
/// The display form is `[ip::port]`.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerAddress {
    pub ip: IpAddr,
    pub port: u16,
}
