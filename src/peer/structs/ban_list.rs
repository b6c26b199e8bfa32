use parking_lot::RwLock;
use std::collections::BTreeSet;
use crate::tracker::structs::peer_address::PeerAddress;

#[derive(Default, Debug)]
pub struct BanList {
    pub(crate) peers: RwLock<BTreeSet<PeerAddress>>,
}
