use crate::tracker::structs::peer_address::PeerAddress;

/// What one sweep changed.
#[derive(Default, Debug, Clone)]
pub struct SweepReport {
    /// Members turned from `Alive` into `Dead`.
    pub aged: usize,
    /// Members removed, with the file whose swarm they left.
    pub evicted: Vec<(String, PeerAddress)>,
    /// Files whose swarm lost its last member.
    pub emptied: Vec<String>,
}
