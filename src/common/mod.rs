//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the swarm tracker and the peer.
//!
//! # Utilities
//!
//! - Logging setup
//! - Socket binding helpers for the tracker and peer listeners
//! - Graceful shutdown waiting
//!
//! # Data Structures
//!
//! - `CustomError` - Generic message error used during bootstrap
//! - `LogSink` - Output sink forwarding to the `log` facade
//! - `OutputSink` - Output capability injected into every component
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrust_swarm::common::structs::log_sink::LogSink;
//! use torrust_swarm::common::traits::output_sink::OutputSink;
//!
//! let sink: Arc<dyn OutputSink> = Arc::new(LogSink::new("SHARD"));
//! sink.print("shard started");
//! ```

/// Common data structures (errors, output sinks).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Capability traits shared by every component.
pub mod traits;

/// Unit tests for common utilities.
pub mod tests;
