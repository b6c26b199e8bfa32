/// Async storage interface for pieces and complete files.
pub mod piece_storage;
