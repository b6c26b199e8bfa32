use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub enum ControlRequest {
    /// Join the swarm of `file_name`; the tracker takes the address from the
    /// connection and pairs it with `listen_port`.
    JoinSwarm {
        file_name: String,
        listen_port: u16,
    },
    /// List the current members of the swarm of `file_name`.
    Query {
        file_name: String,
    },
}
