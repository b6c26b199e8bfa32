use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use crate::common::traits::output_sink::OutputSink;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

/// TCP service of a shard answering `JoinSwarm` and `Query` requests.
///
/// Connections are accepted without limit and queue on `workers`; at most
/// that many requests are handled at the same time.
pub struct ControlTracker {
    pub(crate) listener: TcpListener,
    pub(crate) registry: Arc<SwarmRegistry>,
    pub(crate) workers: Arc<Semaphore>,
    pub(crate) request_timeout: Duration,
    pub(crate) sink: Arc<dyn OutputSink>,
}
