use std::fmt;
use std::fmt::Formatter;
use crate::tracker::enums::liveness_flag::LivenessFlag;

impl fmt::Display for LivenessFlag {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LivenessFlag::Alive => write!(f, "ALIVE"),
            LivenessFlag::Dead => write!(f, "DEAD"),
        }
    }
}
