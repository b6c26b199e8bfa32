use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;
use crate::common::common::bind_tcp_listener;
use crate::common::traits::output_sink::OutputSink;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::directory::structs::directory_server::DirectoryServer;
use crate::directory::structs::torrent_directory::TorrentDirectory;
use crate::directory::structs::tracker_host::TrackerHost;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::shard_allocator::ShardAllocator;

impl TrackerHost {
    /// Binds the directory address and starts serving. Shards are started
    /// lazily as files get published.
    pub fn start(config: &TrackerConfig, sink: Arc<dyn OutputSink>) -> Result<TrackerHost, TrackerError> {
        let address: SocketAddr = config.directory_bind_address
            .parse()
            .map_err(|_| TrackerError::InvalidAddress(config.directory_bind_address.clone()))?;
        let listener = bind_tcp_listener(address).map_err(|source| TrackerError::Bind { port: address.port(), source })?;
        let directory_address = listener.local_addr()?;

        let allocator = ShardAllocator::new(config, sink.clone())?;
        let directory = TorrentDirectory::new(allocator.clone(), sink.clone());
        let (shutdown, rx) = watch::channel(false);
        let server = DirectoryServer::new(listener, directory.clone(), sink);
        let handle = tokio::spawn(server.start(rx));

        Ok(TrackerHost {
            directory,
            allocator,
            directory_address,
            shutdown,
            handle: Mutex::new(Some(handle)),
        })
    }

    /// Stops the directory server and every shard.
    pub async fn stop(&self) {
        self.shutdown.send_replace(true);
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
        self.allocator.shutdown_all().await;
    }
}
