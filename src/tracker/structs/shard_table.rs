use std::collections::BTreeMap;
use std::sync::Arc;
use crate::tracker::structs::shard_unit::ShardUnit;

/// Bookkeeping guarded by the allocator lock.
#[derive(Default)]
pub struct ShardTable {
    /// File name to the port of the shard holding its swarm.
    pub files: BTreeMap<String, u16>,
    /// Live shard units by port.
    pub units: BTreeMap<u16, Arc<ShardUnit>>,
    /// Next candidate offset from the base port; wraps around the port space.
    pub port_cursor: u32,
}
