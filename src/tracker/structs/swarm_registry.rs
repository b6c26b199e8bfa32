//! Per-shard swarm storage.

use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use crate::common::traits::output_sink::OutputSink;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::traits::swarm_observer::SwarmObserver;

/// Map from file name to swarm, owned by one shard unit.
///
/// The map lock only guards insertion and removal of swarms. Membership
/// changes lock the individual swarm, so traffic on different files never
/// contends beyond a short read of the map.
///
/// When a sweep evicts the last member of a swarm, the swarm is removed from
/// the map and `observer` is told about it before the swarm lock is released.
pub struct SwarmRegistry {
    pub(crate) swarms: RwLock<BTreeMap<String, Arc<Mutex<Swarm>>>>,
    pub(crate) observer: Weak<dyn SwarmObserver>,
    pub(crate) sink: Arc<dyn OutputSink>,
}
