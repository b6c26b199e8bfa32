//! Local piece storage.
//!
//! Partial downloads live in the part directory, one file per piece named
//! `<file name>.part.<offset>`. Complete files live in the complete directory
//! under their own name. The owned-offset index is rebuilt from both
//! directories when the store opens.

/// Error type for storage operations.
pub mod errors;

/// Implementation blocks for storage structs.
pub mod impls;

/// Data structures for the directory-backed store.
pub mod structs;

/// Storage abstraction consumed by the peer.
pub mod traits;

/// Unit tests for the piece store.
pub mod tests;
