//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the configuration
//! from TOML files. The same file drives the tracker server (directory and
//! shards) and the peer (upload server, downloads, keep-alives).
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **tracker**: Directory address, shard port range, sweep interval, worker pools
//! - **peer**: Directory location, upload port, connection caps, timeouts, storage directories
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_swarm::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when missing
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
