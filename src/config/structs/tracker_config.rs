use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    pub directory_bind_address: String,
    pub tracker_bind_ip: String,
    pub shard_base_port: u16,
    pub max_swarms_per_shard: usize,
    pub sweep_interval: u64,
    pub control_workers: usize,
}
