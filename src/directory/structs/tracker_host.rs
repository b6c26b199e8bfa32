use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::directory::structs::torrent_directory::TorrentDirectory;
use crate::tracker::structs::shard_allocator::ShardAllocator;

/// Everything the `server` command runs.
pub struct TrackerHost {
    pub directory: Arc<TorrentDirectory>,
    pub allocator: Arc<ShardAllocator>,
    pub directory_address: SocketAddr,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) handle: Mutex<Option<JoinHandle<()>>>,
}
