use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::piece_hash::PieceHash;
use crate::tracker::structs::piece_manifest::{PieceManifest, PIECE_LENGTH};

static FILE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^/\\\x00]{1,255}$").expect("file name pattern is valid")
});

impl PieceManifest {
    /// File names are plain names: non-empty, no path separators, no NUL.
    pub fn is_valid_file_name(file_name: &str) -> bool {
        file_name != "." && file_name != ".." && FILE_NAME_PATTERN.is_match(file_name)
    }

    /// Builds the manifest of in-memory content.
    pub fn from_bytes(file_name: &str, data: &[u8]) -> Result<PieceManifest, TrackerError> {
        if !PieceManifest::is_valid_file_name(file_name) {
            return Err(TrackerError::InvalidFileName(file_name.to_string()));
        }
        let piece_hashes = data
            .chunks(PIECE_LENGTH as usize)
            .map(PieceHash::digest)
            .collect();
        Ok(PieceManifest {
            file_name: file_name.to_string(),
            file_length: data.len() as u64,
            piece_hashes,
            tracker_port: None,
        })
    }

    /// Builds the manifest of a file on disk, named after its last path component.
    pub async fn from_file(path: &Path) -> Result<PieceManifest, TrackerError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| TrackerError::InvalidFileName(path.display().to_string()))?;
        let data = tokio::fs::read(path).await?;
        PieceManifest::from_bytes(file_name, &data)
    }

    pub fn pieces_count(&self) -> usize {
        self.file_length.div_ceil(PIECE_LENGTH) as usize
    }

    pub fn is_valid_offset(&self, offset: u64) -> bool {
        offset % PIECE_LENGTH == 0 && offset < self.file_length
    }

    /// Length of the piece starting at `offset`, `None` for offsets that do not
    /// start a piece.
    pub fn piece_length(&self, offset: u64) -> Option<usize> {
        if !self.is_valid_offset(offset) {
            return None;
        }
        Some(PIECE_LENGTH.min(self.file_length - offset) as usize)
    }

    pub fn piece_hash(&self, offset: u64) -> Option<&PieceHash> {
        if !self.is_valid_offset(offset) {
            return None;
        }
        self.piece_hashes.get((offset / PIECE_LENGTH) as usize)
    }

    pub fn offsets(&self) -> impl Iterator<Item = u64> {
        (0..self.file_length).step_by(PIECE_LENGTH as usize)
    }

    /// Whether `piece` is the exact content expected at `offset`.
    pub fn hashes_match(&self, offset: u64, piece: &[u8]) -> bool {
        match (self.piece_length(offset), self.piece_hash(offset)) {
            (Some(length), Some(hash)) => length == piece.len() && hash.matches(piece),
            _ => false,
        }
    }

    /// Checks that the hash list covers exactly the declared length.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !PieceManifest::is_valid_file_name(&self.file_name) {
            return Err(TrackerError::InvalidFileName(self.file_name.clone()));
        }
        if self.piece_hashes.len() != self.pieces_count() {
            return Err(TrackerError::Manifest(format!(
                "{} declares {} bytes but carries {} piece hashes",
                self.file_name,
                self.file_length,
                self.piece_hashes.len()
            )));
        }
        Ok(())
    }

    /// Records the shard port. The port can only be set once.
    pub fn assign_tracker_port(&mut self, port: u16) -> Result<(), TrackerError> {
        match self.tracker_port {
            Some(existing) if existing != port => Err(TrackerError::Manifest(format!(
                "{} is already tracked on port {}",
                self.file_name, existing
            ))),
            _ => {
                self.tracker_port = Some(port);
                Ok(())
            }
        }
    }
}
