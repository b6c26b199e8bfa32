use std::sync::Arc;
use std::time::Duration;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

/// Ages the liveness flags of one registry every `interval`.
pub struct LivenessSweeper {
    pub registry: Arc<SwarmRegistry>,
    pub interval: Duration,
}
