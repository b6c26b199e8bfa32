//! SHA-1 digest of a single piece.

/// A 20-byte SHA-1 digest. Serialized as a 40 character hex string.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PieceHash(pub [u8; 20]);
