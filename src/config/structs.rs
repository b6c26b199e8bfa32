//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Tracker server settings (directory, shards, liveness).
pub mod tracker_config;

/// Peer settings (upload server, downloads, storage).
pub mod peer_config;
