use ahash::AHashMap;
use std::collections::BTreeSet;

#[derive(Default, Debug)]
pub struct StoreIndex {
    /// Offsets held as part files, by file name.
    pub parts: AHashMap<String, BTreeSet<u64>>,
    /// Lengths of the files held complete, by file name.
    pub complete: AHashMap<String, u64>,
}
