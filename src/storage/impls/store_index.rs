use crate::storage::structs::store_index::StoreIndex;
use crate::tracker::structs::piece_manifest::PIECE_LENGTH;

impl StoreIndex {
    pub fn offsets_of(&self, file_name: &str) -> Vec<u64> {
        if let Some(length) = self.complete.get(file_name) {
            return (0..*length).step_by(PIECE_LENGTH as usize).collect();
        }
        self.parts
            .get(file_name)
            .map(|offsets| offsets.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn owns(&self, file_name: &str, offset: u64) -> bool {
        match self.complete.get(file_name) {
            Some(length) => offset < *length && offset % PIECE_LENGTH == 0,
            None => self.parts.get(file_name).is_some_and(|offsets| offsets.contains(&offset)),
        }
    }

    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.complete.keys().cloned().collect();
        for (name, offsets) in &self.parts {
            if !offsets.is_empty() && !self.complete.contains_key(name) {
                names.push(name.clone());
            }
        }
        names.sort();
        names
    }
}
