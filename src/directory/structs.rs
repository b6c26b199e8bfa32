/// Manifest catalogue backed by the shard allocator.
pub mod torrent_directory;

/// TCP service exposing the catalogue.
pub mod directory_server;

/// Client side of the directory protocol.
pub mod directory_client;

/// A running tracker host: allocator, directory and directory server.
pub mod tracker_host;
