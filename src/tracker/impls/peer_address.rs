use std::fmt;
use std::fmt::Formatter;
use std::net::{IpAddr, SocketAddr};
use crate::tracker::structs::peer_address::PeerAddress;

impl PeerAddress {
    pub fn new(ip: IpAddr, port: u16) -> PeerAddress {
        PeerAddress { ip, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}

impl From<SocketAddr> for PeerAddress {
    fn from(address: SocketAddr) -> PeerAddress {
        PeerAddress::new(address.ip(), address.port())
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{}::{}]", self.ip, self.port)
    }
}
