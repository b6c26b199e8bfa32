use serde::{Deserialize, Serialize};
use crate::tracker::structs::peer_address::PeerAddress;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub enum ControlResponse {
    Allowed,
    Denied,
    /// `None` when no swarm exists for the queried file.
    Members(Option<Vec<PeerAddress>>),
}
