use crate::tracker::structs::swarm_member::SwarmMember;

/// Members of one file's swarm.
///
/// Once the last member is evicted the swarm is marked `closed`; joins racing
/// with that eviction see the flag and fail instead of reviving a swarm that
/// is no longer reachable through the registry.
#[derive(Debug)]
pub struct Swarm {
    pub file_name: String,
    pub members: Vec<SwarmMember>,
    pub closed: bool,
}
