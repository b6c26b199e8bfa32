use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use crate::common::traits::output_sink::OutputSink;
use crate::directory::structs::torrent_directory::TorrentDirectory;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::piece_manifest::PieceManifest;
use crate::tracker::structs::shard_allocator::ShardAllocator;
use crate::tracker::traits::swarm_observer::SwarmObserver;

impl TorrentDirectory {
    /// Creates the directory and registers it as the allocator's listener.
    pub fn new(allocator: Arc<ShardAllocator>, sink: Arc<dyn OutputSink>) -> Arc<TorrentDirectory> {
        let directory = Arc::new(TorrentDirectory {
            manifests: RwLock::new(BTreeMap::new()),
            allocator,
            sink,
        });
        let listener: Arc<dyn SwarmObserver> = directory.clone();
        let listener: Weak<dyn SwarmObserver> = Arc::downgrade(&listener);
        directory.allocator.set_listener(listener);
        directory
    }

    pub fn lookup(&self, file_name: &str) -> Option<PieceManifest> {
        self.manifests.read().get(file_name).cloned()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.manifests.read().keys().cloned().collect()
    }

    pub fn all_peers(&self) -> Vec<PeerAddress> {
        self.allocator.all_peers()
    }

    /// Publishes `manifest` with `seeder` as a member and returns the shard port.
    ///
    /// A new file gets a new swarm. For a file already published with the same
    /// content the seeder joins the existing swarm. If that swarm is emptied
    /// concurrently the join fails; the manifest is then about to be withdrawn,
    /// so the publish is retried until it can create a fresh swarm.
    #[tracing::instrument(level = "debug", skip(self, manifest), fields(file_name = %manifest.file_name))]
    pub async fn publish(&self, manifest: PieceManifest, seeder: PeerAddress) -> Result<u16, TrackerError> {
        manifest.validate()?;
        let file_name = manifest.file_name.clone();

        loop {
            {
                let mut manifests = self.manifests.write();
                let same_content = manifests
                    .get(&file_name)
                    .map(|existing| existing.file_length == manifest.file_length && existing.piece_hashes == manifest.piece_hashes);
                match same_content {
                    None => {
                        let port = self.allocator.publish(&file_name, seeder)?;
                        let mut stored = manifest;
                        stored.tracker_port = None;
                        stored.assign_tracker_port(port)?;
                        manifests.insert(file_name.clone(), stored);
                        drop(manifests);
                        self.sink.print(&format!("published file {file_name} on tracker port {port}"));
                        return Ok(port);
                    }
                    Some(false) => {
                        return Err(TrackerError::Refused(format!("a different file named {file_name} is already published")));
                    }
                    Some(true) => {}
                }
            }

            match self.allocator.join(&file_name, seeder) {
                Ok(port) => {
                    self.sink.print(&format!("peer {seeder} joined existing swarm of {file_name} as seeder"));
                    return Ok(port);
                }
                Err(TrackerError::UnknownFile(_)) => tokio::task::yield_now().await,
                Err(error) => return Err(error),
            }
        }
    }
}

impl SwarmObserver for TorrentDirectory {
    fn swarm_emptied(&self, file_name: &str) {
        if self.manifests.write().remove(file_name).is_some() {
            self.sink.print(&format!("file {file_name} is no longer published"));
        }
    }
}
