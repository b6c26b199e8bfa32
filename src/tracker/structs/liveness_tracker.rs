use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::common::traits::output_sink::OutputSink;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

/// UDP service of a shard receiving keep-alive datagrams.
pub struct LivenessTracker {
    pub(crate) socket: UdpSocket,
    pub(crate) registry: Arc<SwarmRegistry>,
    pub(crate) sink: Arc<dyn OutputSink>,
}
