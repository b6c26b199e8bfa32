//! Data structures for swarm tracking.

/// Peer identity: network address plus listening port.
pub mod peer_address;

/// 20-byte SHA-1 digest of one piece.
pub mod piece_hash;

/// Immutable description of a file split into hash-verified pieces.
pub mod piece_manifest;

/// One swarm member and its liveness flag.
pub mod swarm_member;

/// Members of the swarm of a single file.
pub mod swarm;

/// Per-shard map from file name to swarm.
pub mod swarm_registry;

/// Outcome counters of one sweep.
pub mod sweep_report;

/// Periodic task ageing liveness flags.
pub mod liveness_sweeper;

/// TCP join/query service of a shard.
pub mod control_tracker;

/// UDP keep-alive service of a shard.
pub mod liveness_tracker;

/// Registry plus its three tasks bound to one port.
pub mod shard_unit;

/// File-to-shard and port bookkeeping guarded by the allocator lock.
pub mod shard_table;

/// Places swarms on shards and owns their lifecycle.
pub mod shard_allocator;
