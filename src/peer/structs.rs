//! Data structures for the peer side.

/// Advertised, owned and in-flight offsets of one download.
pub mod piece_selector;

/// Mutable part of the selector, guarded by its lock.
pub mod selector_state;

/// In-flight offsets of one worker, released when dropped.
pub mod in_flight_pieces;

/// Peers banned for serving corrupt pieces.
pub mod ban_list;

/// Compare-and-increment cap on open peer connections.
pub mod connection_gauge;

/// One reserved slot of a `ConnectionGauge`.
pub mod connection_permit;

/// Exchange with a single uploader.
pub mod exchange_worker;

/// Retrieval of one file, round after round.
pub mod download_coordinator;

/// Serves owned pieces to other peers.
pub mod upload_server;

/// Periodic keep-alive datagrams for every joined swarm.
pub mod keep_alive_sender;

/// Destination of the keep-alives of one swarm.
pub mod keep_alive_target;

/// Client of a shard's control tracker.
pub mod tracker_client;

/// Everything one peer runs, behind one handle.
pub mod swarm_peer;
