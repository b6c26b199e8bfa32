use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use crate::common::common::shutdown_waiting;
use crate::tracker::structs::liveness_sweeper::LivenessSweeper;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

impl LivenessSweeper {
    pub fn new(registry: Arc<SwarmRegistry>, interval: Duration) -> LivenessSweeper {
        LivenessSweeper { registry, interval }
    }

    /// Sweeps every `interval` until the shutdown flag is raised.
    pub async fn start(self, mut shutdown: watch::Receiver<bool>) {
        info!("[SWEEP] Starting liveness sweeper, interval {} seconds", self.interval.as_secs());
        while !shutdown_waiting(self.interval, &mut shutdown).await {
            self.registry.sweep();
        }
        info!("[SWEEP] Liveness sweeper stopped");
    }
}
