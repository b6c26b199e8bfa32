use ahash::AHashMap;
use std::collections::BTreeSet;
use crate::tracker::structs::peer_address::PeerAddress;

#[derive(Default, Debug)]
pub struct SelectorState {
    pub advertised: AHashMap<PeerAddress, BTreeSet<u64>>,
    pub owned: BTreeSet<u64>,
    pub in_flight: BTreeSet<u64>,
}
