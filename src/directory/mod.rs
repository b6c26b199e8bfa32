//! Directory service: the catalogue of published manifests.
//!
//! Peers publish a manifest here and look manifests up by file name. The
//! directory hands every new file to the shard allocator and stamps the
//! returned shard port into the stored manifest. When a swarm empties, the
//! allocator reports back and the manifest is withdrawn.

/// Implementation blocks for directory structs.
pub mod impls;

/// Data structures for the directory and its network surface.
pub mod structs;

/// Unit tests for the directory.
pub mod tests;
