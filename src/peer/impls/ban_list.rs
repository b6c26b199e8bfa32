use crate::peer::structs::ban_list::BanList;
use crate::tracker::structs::peer_address::PeerAddress;

impl BanList {
    pub fn new() -> BanList {
        BanList::default()
    }

    /// Returns `false` if the peer was already banned.
    pub fn ban(&self, peer: PeerAddress) -> bool {
        self.peers.write().insert(peer)
    }

    pub fn is_banned(&self, peer: &PeerAddress) -> bool {
        self.peers.read().contains(peer)
    }

    pub fn snapshot(&self) -> Vec<PeerAddress> {
        self.peers.read().iter().copied().collect()
    }
}
