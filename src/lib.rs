//! # Torrust-Swarm
//!
//! Sharded swarm trackers and a hash-verified piece exchange for
//! peer-to-peer file distribution.
//!
//! ## Overview
//!
//! A tracker host runs a directory service and a growing set of shards. Each
//! shard is a port pair: a TCP control tracker that answers JOIN and QUERY,
//! and a UDP liveness tracker that receives keep-alives. Files are split into
//! 4096-byte pieces, each identified by its offset and verified with SHA-1.
//!
//! A peer publishes files it holds completely, retrieves files it does not,
//! and serves every piece it owns to other peers while it runs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrust_swarm::common::structs::log_sink::LogSink;
//! use torrust_swarm::config::structs::configuration::Configuration;
//! use torrust_swarm::peer::structs::swarm_peer::SwarmPeer;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let peer = SwarmPeer::start(&config.peer, Arc::new(LogSink::new("PEER"))).await?;
//! let manifest = peer.lookup("a.bin").await?.expect("published");
//! let path = peer.retrieve(manifest).await?.await??;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, socket helpers, shutdown waiting and the output sink
//! - [`config`] - Configuration management and TOML parsing
//! - [`wire`] - Framing and message types for every protocol
//! - [`tracker`] - Swarm registries, liveness sweeping and shard allocation
//! - [`directory`] - File directory service mapping names to manifests and shards
//! - [`storage`] - Piece storage on disk
//! - [`peer`] - Piece selection, exchange, downloads and uploads
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains logging setup, socket binding helpers, graceful shutdown waiting
/// and the output sink every component writes through.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating the TOML configuration shared by
/// the tracker server and the peer.
pub mod config;

/// Wire formats.
///
/// Length-prefixed MessagePack frames over TCP for control, directory and
/// exchange traffic; a small text datagram for keep-alives.
pub mod wire;

/// Tracker side.
///
/// Swarm registries, the liveness sweeper, control and liveness services per
/// shard, and the allocator that assigns files to shards.
pub mod tracker;

/// Directory service.
///
/// Maps file names to piece manifests and shard ports, and withdraws a file
/// once its swarm empties.
pub mod directory;

/// Piece storage.
///
/// Keeps partially downloaded files as one file per piece and completed files
/// whole, and rebuilds its index from disk on start.
pub mod storage;

/// Peer side.
///
/// Piece selection, the exchange protocol, download rounds, the upload server
/// and keep-alives.
pub mod peer;

/// CLI argument parsing.
pub mod structs;
