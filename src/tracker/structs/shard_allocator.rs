//! Placement of swarms on shard units.

use parking_lot::{Mutex, RwLock};
use std::net::IpAddr;
use std::sync::{Arc, Weak};
use std::time::Duration;
use crate::common::traits::output_sink::OutputSink;
use crate::tracker::structs::shard_table::ShardTable;
use crate::tracker::traits::swarm_observer::SwarmObserver;

/// Owns every shard unit of a tracker host.
///
/// New swarms go to any unit holding fewer than `max_swarms_per_shard`
/// swarms; when none has room a new unit is started on the next free port
/// counted from `base_port`. A unit is stopped as soon as its last swarm is
/// gone.
///
/// The allocator is the observer of all of its registries and forwards
/// emptied swarms to `listener` (the directory) after releasing its own lock.
pub struct ShardAllocator {
    pub(crate) bind_ip: IpAddr,
    pub(crate) base_port: u16,
    pub(crate) max_swarms_per_shard: usize,
    pub(crate) sweep_interval: Duration,
    pub(crate) control_workers: usize,
    pub(crate) table: Mutex<ShardTable>,
    pub(crate) listener: RwLock<Option<Weak<dyn SwarmObserver>>>,
    pub(crate) self_ref: Weak<ShardAllocator>,
    pub(crate) sink: Arc<dyn OutputSink>,
}
