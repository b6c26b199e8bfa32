use crate::tracker::enums::liveness_flag::LivenessFlag;
use crate::tracker::structs::peer_address::PeerAddress;

#[derive(Clone, Copy, Debug)]
pub struct SwarmMember {
    pub peer: PeerAddress,
    pub flag: LivenessFlag,
}
