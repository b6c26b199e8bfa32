/// Receives ownership events from a shard.
///
/// `swarm_emptied` is invoked synchronously while the emptied swarm is still
/// locked; implementations must not call back into that swarm.
pub trait SwarmObserver: Send + Sync {
    fn swarm_emptied(&self, file_name: &str);

    /// A shard hit a membership inconsistency and must be discarded.
    fn shard_faulted(&self, _port: u16, _reason: &str) {}
}
