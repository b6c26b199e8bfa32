//! Swarm tracking: membership, liveness and sharding.
//!
//! # Architecture
//!
//! Swarms are spread over shard units. Each unit binds one port for both of
//! its transports and owns:
//! - a `SwarmRegistry` holding at most `max_swarms_per_shard` swarms
//! - a `ControlTracker` (TCP) answering join and query requests
//! - a `LivenessTracker` (UDP) receiving keep-alive datagrams
//! - a `LivenessSweeper` ageing every liveness flag on a fixed interval
//!
//! The `ShardAllocator` places new swarms on units with free room, creates
//! units on demand and tears them down once their last swarm is gone.
//!
//! # Soft-state membership
//!
//! A member's flag is `Alive` after a join or a keep-alive. Every sweep turns
//! `Alive` into `Dead` and evicts members already `Dead`, so a silent peer
//! disappears between one and two sweep intervals after its last keep-alive.
//!
//! # Locking
//!
//! Each swarm sits behind its own mutex. The registry map lock is never held
//! while a swarm lock is acquired; removals that empty a swarm drop it from the
//! map and notify the owner while the swarm lock is still held.

/// Enumerations for tracker state.
pub mod enums;

/// Error type for tracker operations.
pub mod errors;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for swarms, shards and manifests.
pub mod structs;

/// Observer traits connecting registries to their owners.
pub mod traits;

/// Tracker constants and port arithmetic.
#[allow(clippy::module_inception)]
pub mod tracker;
