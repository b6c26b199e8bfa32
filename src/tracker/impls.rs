pub mod control_tracker;
pub mod liveness_flag;
pub mod liveness_sweeper;
pub mod liveness_tracker;
pub mod peer_address;
pub mod piece_hash;
pub mod piece_manifest;
pub mod shard_allocator;
pub mod shard_table;
pub mod shard_unit;
pub mod swarm;
pub mod swarm_registry;
