use thiserror::Error;
use crate::storage::errors::StorageError;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::wire::errors::WireError;

#[derive(Error, Debug)]
pub enum PeerError {
    #[error("tracker denied joining the swarm of {0}")]
    JoinDenied(String),

    #[error("unable to connect to {address}: {reason}")]
    Connect {
        address: String,
        reason: String,
    },

    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("download of {0} was interrupted")]
    Interrupted(String),

    #[error("no more peers to download {file_name} from, {missing} pieces missing")]
    Incomplete {
        file_name: String,
        missing: usize,
    },

    #[error("{0} is not held completely, refusing to seed it")]
    NotSeeder(String),

    #[error("{0} is already being downloaded")]
    AlreadyDownloading(String),

    #[error("{0} has no tracker port assigned")]
    NotPublished(String),

    #[error("peer {0} never advertised any pieces")]
    NotAdvertised(PeerAddress),

    #[error("no free upload port from {0} upward")]
    NoFreePort(u16),

    #[error("directory error: {0}")]
    Directory(#[from] TrackerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
