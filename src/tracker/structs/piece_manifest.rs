//! Immutable description of a distributable file.

use serde::{Deserialize, Serialize};
use crate::tracker::structs::piece_hash::PieceHash;

/// Length of every piece except possibly the last one.
pub const PIECE_LENGTH: u64 = 4096;

/// Describes a file split into fixed-size pieces.
///
/// Pieces are addressed by byte offset: `0, 4096, 8192, ...`. The piece at
/// offset `o` is `min(4096, file_length - o)` bytes long and its expected
/// digest is `piece_hashes[o / 4096]`.
///
/// `tracker_port` stays `None` until the directory assigns the swarm to a
/// shard; it is set exactly once.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct PieceManifest {
    pub file_name: String,
    pub file_length: u64,
    pub piece_hashes: Vec<PieceHash>,
    pub tracker_port: Option<u16>,
}
