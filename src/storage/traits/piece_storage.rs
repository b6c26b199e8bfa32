use async_trait::async_trait;
use std::path::PathBuf;
use crate::storage::errors::StorageError;
use crate::tracker::structs::piece_manifest::PieceManifest;

#[async_trait]
pub trait PieceStorage: Send + Sync {
    /// Offsets held for `file_name`, ascending. A complete file owns all of them.
    async fn owned_offsets(&self, file_name: &str) -> Vec<u64>;

    /// Reads the piece at `offset`: 4096 bytes, or the remainder for the final piece.
    async fn read_piece(&self, file_name: &str, offset: u64) -> Result<Vec<u8>, StorageError>;

    /// Stores a verified piece. Storing an offset that is already held is a no-op.
    async fn store_piece(&self, file_name: &str, offset: u64, data: &[u8]) -> Result<(), StorageError>;

    async fn has_complete_copy(&self, manifest: &PieceManifest) -> bool;

    /// Writes the complete file from its pieces and drops the parts.
    async fn assemble_complete(&self, manifest: &PieceManifest) -> Result<PathBuf, StorageError>;

    /// Registers a file already present in the complete directory and returns its length.
    async fn add_complete_file(&self, file_name: &str) -> Result<u64, StorageError>;

    /// Names of every file with at least one owned piece.
    async fn owned_files(&self) -> Vec<String>;
}
