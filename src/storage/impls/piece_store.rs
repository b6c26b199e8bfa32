use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use crate::storage::errors::StorageError;
use crate::storage::structs::piece_store::PieceStore;
use crate::storage::structs::store_index::StoreIndex;
use crate::storage::traits::piece_storage::PieceStorage;
use crate::tracker::structs::piece_manifest::{PieceManifest, PIECE_LENGTH};

static PART_FILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+)\.part\.(\d+)$").expect("part file pattern is valid")
});

impl PieceStore {
    /// Opens (creating if needed) both directories and indexes their content.
    pub async fn open(part_directory: &Path, complete_directory: &Path) -> Result<PieceStore, StorageError> {
        tokio::fs::create_dir_all(part_directory).await?;
        tokio::fs::create_dir_all(complete_directory).await?;

        let mut index = StoreIndex::default();

        let mut entries = tokio::fs::read_dir(complete_directory).await?;
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                index.complete.insert(name.to_string(), metadata.len());
            }
        }

        let mut entries = tokio::fs::read_dir(part_directory).await?;
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(captures) = file_name.to_str().and_then(|name| PART_FILE_PATTERN.captures(name)) else {
                continue;
            };
            let Ok(offset) = captures[2].parse::<u64>() else {
                continue;
            };
            index.parts.entry(captures[1].to_string()).or_default().insert(offset);
        }

        info!("[STORAGE] Indexed {} complete files and {} partial files", index.complete.len(), index.parts.len());
        Ok(PieceStore {
            part_directory: part_directory.to_path_buf(),
            complete_directory: complete_directory.to_path_buf(),
            index: RwLock::new(index),
        })
    }

    pub fn complete_path(&self, file_name: &str) -> PathBuf {
        self.complete_directory.join(file_name)
    }

    pub fn part_path(&self, file_name: &str, offset: u64) -> PathBuf {
        self.part_directory.join(format!("{file_name}.part.{offset}"))
    }

    fn check_name(file_name: &str) -> Result<(), StorageError> {
        if PieceManifest::is_valid_file_name(file_name) {
            Ok(())
        } else {
            Err(StorageError::InvalidFileName(file_name.to_string()))
        }
    }
}

#[async_trait]
impl PieceStorage for PieceStore {
    async fn owned_offsets(&self, file_name: &str) -> Vec<u64> {
        self.index.read().offsets_of(file_name)
    }

    async fn read_piece(&self, file_name: &str, offset: u64) -> Result<Vec<u8>, StorageError> {
        PieceStore::check_name(file_name)?;
        let complete_length = {
            let index = self.index.read();
            if !index.owns(file_name, offset) {
                return Err(StorageError::NotOwned { file_name: file_name.to_string(), offset });
            }
            index.complete.get(file_name).copied()
        };

        let Some(file_length) = complete_length else {
            return Ok(tokio::fs::read(self.part_path(file_name, offset)).await?);
        };

        let expected = PIECE_LENGTH.min(file_length - offset) as usize;
        let mut file = tokio::fs::File::open(self.complete_path(file_name)).await?;
        file.seek(SeekFrom::Start(offset)).await?;
        let mut data = Vec::with_capacity(expected);
        (&mut file).take(expected as u64).read_to_end(&mut data).await?;
        if data.len() != expected {
            return Err(StorageError::LengthMismatch {
                file_name: file_name.to_string(),
                offset,
                expected,
                actual: data.len(),
            });
        }
        Ok(data)
    }

    async fn store_piece(&self, file_name: &str, offset: u64, data: &[u8]) -> Result<(), StorageError> {
        PieceStore::check_name(file_name)?;
        if self.index.read().owns(file_name, offset) {
            return Ok(());
        }
        tokio::fs::write(self.part_path(file_name, offset), data).await?;
        self.index.write().parts.entry(file_name.to_string()).or_default().insert(offset);
        debug!("[STORAGE] Stored piece {} of {} ({} bytes)", offset, file_name, data.len());
        Ok(())
    }

    async fn has_complete_copy(&self, manifest: &PieceManifest) -> bool {
        let index = self.index.read();
        if let Some(length) = index.complete.get(&manifest.file_name) {
            return *length == manifest.file_length;
        }
        let owned = index.parts.get(&manifest.file_name);
        manifest.offsets().all(|offset| owned.is_some_and(|offsets| offsets.contains(&offset)))
    }

    async fn assemble_complete(&self, manifest: &PieceManifest) -> Result<PathBuf, StorageError> {
        let file_name = manifest.file_name.as_str();
        PieceStore::check_name(file_name)?;
        let target = self.complete_path(file_name);
        if self.index.read().complete.contains_key(file_name) {
            return Ok(target);
        }

        let missing = {
            let index = self.index.read();
            manifest.offsets().filter(|offset| !index.owns(file_name, *offset)).count()
        };
        if missing > 0 {
            return Err(StorageError::Incomplete { file_name: file_name.to_string(), missing });
        }

        let mut file = tokio::fs::File::create(&target).await?;
        for offset in manifest.offsets() {
            let piece = tokio::fs::read(self.part_path(file_name, offset)).await?;
            file.write_all(&piece).await?;
        }
        file.flush().await?;
        file.sync_all().await?;

        {
            let mut index = self.index.write();
            index.parts.remove(file_name);
            index.complete.insert(file_name.to_string(), manifest.file_length);
        }
        for offset in manifest.offsets() {
            let _ = tokio::fs::remove_file(self.part_path(file_name, offset)).await;
        }

        info!("[STORAGE] Assembled {} ({} bytes)", file_name, manifest.file_length);
        Ok(target)
    }

    async fn add_complete_file(&self, file_name: &str) -> Result<u64, StorageError> {
        PieceStore::check_name(file_name)?;
        let metadata = tokio::fs::metadata(self.complete_path(file_name)).await?;
        self.index.write().complete.insert(file_name.to_string(), metadata.len());
        Ok(metadata.len())
    }

    async fn owned_files(&self) -> Vec<String> {
        self.index.read().file_names()
    }
}
