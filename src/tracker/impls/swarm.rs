use crate::tracker::enums::liveness_flag::LivenessFlag;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::swarm_member::SwarmMember;

impl Swarm {
    pub fn new(file_name: &str, seeder: PeerAddress) -> Swarm {
        Swarm {
            file_name: file_name.to_string(),
            members: vec![SwarmMember { peer: seeder, flag: LivenessFlag::Alive }],
            closed: false,
        }
    }

    pub fn position(&self, peer: &PeerAddress) -> Option<usize> {
        self.members.iter().position(|member| member.peer == *peer)
    }

    /// Adds `peer` as `Alive`, or marks it `Alive` again if it is already a member.
    pub fn insert(&mut self, peer: PeerAddress) {
        match self.position(&peer) {
            Some(index) => self.members[index].flag = LivenessFlag::Alive,
            None => self.members.push(SwarmMember { peer, flag: LivenessFlag::Alive }),
        }
    }

    pub fn peers(&self) -> Vec<PeerAddress> {
        self.members.iter().map(|member| member.peer).collect()
    }
}
