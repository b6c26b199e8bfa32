#![allow(dead_code)]
use rand::RngExt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use torrust_swarm::common::structs::log_sink::LogSink;
use torrust_swarm::common::traits::output_sink::OutputSink;
use torrust_swarm::config::structs::configuration::Configuration;
use torrust_swarm::config::structs::peer_config::PeerConfig;
use torrust_swarm::config::structs::tracker_config::TrackerConfig;
use torrust_swarm::directory::structs::tracker_host::TrackerHost;
use torrust_swarm::peer::structs::swarm_peer::SwarmPeer;

pub fn test_sink() -> Arc<dyn OutputSink> {
    Arc::new(LogSink::new("TEST"))
}

pub fn random_port() -> u16 {
    let mut rng = rand::rng();
    rng.random_range(20000..60000)
}

pub fn random_bytes(length: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..length).map(|_| rng.random()).collect()
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn create_test_tracker_config(sweep_interval: u64) -> TrackerConfig {
    let mut config = Configuration::init().tracker;
    config.directory_bind_address = String::from("127.0.0.1:0");
    config.tracker_bind_ip = String::from("127.0.0.1");
    config.shard_base_port = random_port();
    config.sweep_interval = sweep_interval;
    config
}

pub fn create_test_host(sweep_interval: u64) -> TrackerHost {
    TrackerHost::start(&create_test_tracker_config(sweep_interval), test_sink()).expect("tracker host starts")
}

pub fn create_test_peer_config(host: &TrackerHost, root: &Path) -> PeerConfig {
    let mut config = Configuration::init().peer;
    config.directory_address = host.directory_address.to_string();
    config.upload_bind_ip = String::from("127.0.0.1");
    config.upload_port = random_port();
    config.keep_alive_interval = 1;
    config.round_timeout = 30;
    config.connect_timeout = 5;
    config.part_directory = root.join("part.dir").display().to_string();
    config.complete_directory = root.join("complete.dir").display().to_string();
    config
}

pub async fn create_test_peer(host: &TrackerHost, root: &Path) -> Arc<SwarmPeer> {
    SwarmPeer::start(&create_test_peer_config(host, root), test_sink()).await.expect("peer starts")
}

/// Starts a peer holding `content` as a complete file named `file_name`.
pub async fn create_test_seeder(host: &TrackerHost, root: &Path, file_name: &str, content: &[u8]) -> Arc<SwarmPeer> {
    let complete = root.join("complete.dir");
    tokio::fs::create_dir_all(&complete).await.expect("complete directory is created");
    tokio::fs::write(complete.join(file_name), content).await.expect("seed file is written");
    create_test_peer(host, root).await
}

/// Polls `check` until it holds or `limit` passes.
pub async fn eventually<F: Fn() -> bool>(limit: Duration, check: F) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    check()
}
