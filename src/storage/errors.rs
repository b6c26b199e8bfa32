use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("piece {offset} of {file_name} is not owned")]
    NotOwned {
        file_name: String,
        offset: u64,
    },

    #[error("piece {offset} of {file_name} has {actual} bytes, expected {expected}")]
    LengthMismatch {
        file_name: String,
        offset: u64,
        expected: usize,
        actual: usize,
    },

    #[error("{file_name} is missing {missing} pieces")]
    Incomplete {
        file_name: String,
        missing: usize,
    },
}
