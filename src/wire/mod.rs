//! Wire formats for every transport the swarm speaks.
//!
//! # Stream transports
//!
//! The control-plane tracker, the piece exchange and the directory service all
//! run over TCP. Every message is a frame:
//!
//! ```text
//! +----------------+----------------------------+
//! | length: u32 BE | body (length bytes)        |
//! +----------------+----------------------------+
//! ```
//!
//! Structured bodies are MessagePack encodings (`rmp-serde`). A piece frame
//! carries the raw piece bytes, nothing else.
//!
//! # Datagram transport
//!
//! Keep-alives are plain text datagrams sent to the liveness tracker:
//!
//! ```text
//! KEEPALIVE\n<listen port>\n<file name>\n
//! ```

/// Request/response enums for the control plane and the directory.
pub mod enums;

/// Error type for encoding, decoding and framing.
pub mod errors;

/// Implementation blocks for wire structs.
pub mod impls;

/// Data structures for wire messages.
pub mod structs;

/// Frame codec and protocol constants.
#[allow(clippy::module_inception)]
pub mod wire;

/// Unit tests for the wire formats.
pub mod tests;
