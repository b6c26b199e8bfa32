use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

/// One shard: a registry plus its control, liveness and sweeper tasks, all
/// bound to `port`.
pub struct ShardUnit {
    pub port: u16,
    pub registry: Arc<SwarmRegistry>,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) handles: Mutex<Vec<JoinHandle<()>>>,
}
