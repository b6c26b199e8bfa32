//! Peer side: piece selection, piece exchange, downloads and uploads.
//!
//! # Download round
//!
//! A `DownloadCoordinator` joins the swarm, queries its members and starts one
//! `ExchangeWorker` per usable candidate. A worker speaks the exchange
//! protocol with one uploader:
//!
//! ```text
//! downloader                         uploader
//!     | -- file name ------------------> |
//!     | <------------- owned offsets --- |
//!     | -- chosen offsets -------------> |
//!     | <-------- piece, piece, ... ---- |  (in the order requested)
//! ```
//!
//! Every piece is checked against the manifest before it is stored. A
//! mismatch bans the uploader and ends that worker.
//!
//! # Connection budget
//!
//! All downloads of a peer share one `ConnectionGauge`. A candidate that
//! cannot reserve a slot is skipped for the round instead of waiting.

/// Download states and worker outcomes.
pub mod enums;

/// Error type for peer operations.
pub mod errors;

/// Implementation blocks for peer structs.
pub mod impls;

/// Data structures for the peer side.
pub mod structs;
