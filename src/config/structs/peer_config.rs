use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PeerConfig {
    pub directory_address: String,
    pub upload_bind_ip: String,
    pub upload_port: u16,
    pub max_upload_connections: usize,
    pub max_download_connections: usize,
    pub keep_alive_interval: u64,
    pub round_timeout: u64,
    pub connect_timeout: u64,
    pub part_directory: String,
    pub complete_directory: String,
}
