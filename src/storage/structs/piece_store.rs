use parking_lot::RwLock;
use std::path::PathBuf;
use crate::storage::structs::store_index::StoreIndex;

pub struct PieceStore {
    pub(crate) part_directory: PathBuf,
    pub(crate) complete_directory: PathBuf,
    pub(crate) index: RwLock<StoreIndex>,
}
