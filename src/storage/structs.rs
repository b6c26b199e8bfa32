/// Owned-offset bookkeeping shared by the store's operations.
pub mod store_index;

/// Directory-backed implementation of `PieceStorage`.
pub mod piece_store;
