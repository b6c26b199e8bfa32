/// Notifications from registries and trackers to their owner.
pub mod swarm_observer;
