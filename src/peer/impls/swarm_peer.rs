use futures_util::future::join_all;
use log::info;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::common::traits::output_sink::OutputSink;
use crate::config::structs::peer_config::PeerConfig;
use crate::directory::structs::directory_client::DirectoryClient;
use crate::peer::errors::PeerError;
use crate::peer::structs::ban_list::BanList;
use crate::peer::structs::connection_gauge::ConnectionGauge;
use crate::peer::structs::download_coordinator::DownloadCoordinator;
use crate::peer::structs::keep_alive_sender::KeepAliveSender;
use crate::peer::structs::swarm_peer::SwarmPeer;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::peer::structs::upload_server::UploadServer;
use crate::storage::structs::piece_store::PieceStore;
use crate::storage::traits::piece_storage::PieceStorage;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::piece_hash::PieceHash;
use crate::tracker::structs::piece_manifest::{PieceManifest, PIECE_LENGTH};

impl SwarmPeer {
    /// Opens the piece store named in `config` and starts the peer on it.
    pub async fn start(config: &PeerConfig, sink: Arc<dyn OutputSink>) -> Result<Arc<SwarmPeer>, PeerError> {
        let storage = PieceStore::open(Path::new(&config.part_directory), Path::new(&config.complete_directory)).await?;
        SwarmPeer::start_with_storage(config, Arc::new(storage), sink).await
    }

    /// Binds the upload server and the keep-alive socket and starts both.
    pub async fn start_with_storage(config: &PeerConfig, storage: Arc<dyn PieceStorage>, sink: Arc<dyn OutputSink>) -> Result<Arc<SwarmPeer>, PeerError> {
        let directory_address: SocketAddr = config.directory_address
            .parse()
            .map_err(|_| TrackerError::InvalidAddress(config.directory_address.clone()))?;
        let upload_ip: IpAddr = config.upload_bind_ip
            .parse()
            .map_err(|_| TrackerError::InvalidAddress(config.upload_bind_ip.clone()))?;
        let connect_timeout = Duration::from_secs(config.connect_timeout);

        let upload = UploadServer::bind(upload_ip, config.upload_port, config.max_upload_connections, storage.clone(), sink.clone())?;
        let upload_port = upload.port;

        let keep_alive_bind = match directory_address {
            SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        };
        let keep_alive = Arc::new(KeepAliveSender::new(keep_alive_bind, Duration::from_secs(config.keep_alive_interval), sink.clone())?);

        let (shutdown, rx) = watch::channel(false);
        let handles = vec![
            tokio::spawn(upload.start(rx.clone())),
            tokio::spawn(keep_alive.clone().start(rx)),
        ];

        info!("[PEER] Peer started, uploading on port {}, directory at {}", upload_port, directory_address);
        Ok(Arc::new(SwarmPeer {
            upload_port,
            directory: DirectoryClient::new(directory_address, connect_timeout),
            tracker_ip: directory_address.ip(),
            storage,
            keep_alive,
            gauge: ConnectionGauge::new(config.max_download_connections),
            banned: Arc::new(BanList::new()),
            downloads: Mutex::new(BTreeMap::new()),
            round_timeout: Duration::from_secs(config.round_timeout),
            connect_timeout,
            shutdown,
            handles: Mutex::new(handles),
            sink,
        }))
    }

    fn tracker_address(&self, manifest: &PieceManifest) -> Result<SocketAddr, PeerError> {
        let port = manifest.tracker_port
            .ok_or_else(|| PeerError::NotPublished(manifest.file_name.clone()))?;
        Ok(SocketAddr::new(self.tracker_ip, port))
    }

    /// Publishes a file held in the complete directory and starts sending
    /// keep-alives for its swarm.
    pub async fn publish(&self, file_name: &str) -> Result<PieceManifest, PeerError> {
        let file_length = self.storage
            .add_complete_file(file_name)
            .await
            .map_err(|_| PeerError::NotSeeder(file_name.to_string()))?;

        let mut piece_hashes = Vec::new();
        for offset in (0..file_length).step_by(PIECE_LENGTH as usize) {
            let piece = self.storage.read_piece(file_name, offset).await?;
            piece_hashes.push(PieceHash::digest(&piece));
        }
        let mut manifest = PieceManifest {
            file_name: file_name.to_string(),
            file_length,
            piece_hashes,
            tracker_port: None,
        };
        if !self.storage.has_complete_copy(&manifest).await {
            return Err(PeerError::NotSeeder(file_name.to_string()));
        }

        let port = self.directory.publish(&manifest, self.upload_port).await?;
        manifest.assign_tracker_port(port)?;
        self.keep_alive.add(file_name, self.tracker_address(&manifest)?, self.upload_port);
        self.sink.print(&format!("published {} ({} pieces) on tracker port {}", file_name, manifest.pieces_count(), port));
        Ok(manifest)
    }

    pub async fn lookup(&self, file_name: &str) -> Result<Option<PieceManifest>, PeerError> {
        Ok(self.directory.lookup(file_name).await?)
    }

    pub async fn list_files(&self) -> Result<Vec<String>, PeerError> {
        Ok(self.directory.list_files().await?)
    }

    /// Joins the swarm of `manifest`, starts keep-alives and spawns its download.
    pub async fn retrieve(self: &Arc<Self>, manifest: PieceManifest) -> Result<JoinHandle<Result<PathBuf, PeerError>>, PeerError> {
        manifest.validate()?;
        let file_name = manifest.file_name.clone();
        let tracker = TrackerClient::new(self.tracker_address(&manifest)?, self.connect_timeout);

        let (cancel, cancel_rx) = watch::channel(false);
        {
            let mut downloads = self.downloads.lock();
            if downloads.contains_key(&file_name) {
                return Err(PeerError::AlreadyDownloading(file_name));
            }
            downloads.insert(file_name.clone(), cancel);
        }

        if let Err(error) = tracker.join_swarm(&file_name, self.upload_port).await {
            self.downloads.lock().remove(&file_name);
            return Err(error);
        }
        self.keep_alive.add(&file_name, tracker.address, self.upload_port);

        let coordinator = DownloadCoordinator::new(
            Arc::new(manifest),
            tracker,
            self.upload_port,
            self.storage.clone(),
            self.gauge.clone(),
            self.banned.clone(),
            self.round_timeout,
            self.connect_timeout,
            self.sink.clone(),
        ).await;

        let peer = self.clone();
        Ok(tokio::spawn(async move {
            let result = coordinator.run(cancel_rx).await;
            peer.downloads.lock().remove(&file_name);
            result
        }))
    }

    /// Stops keep-alives for `file_name` and cancels its download, if any.
    pub fn leave_swarm(&self, file_name: &str) -> bool {
        let announced = self.keep_alive.remove(file_name);
        let cancel = self.downloads.lock().remove(file_name);
        match cancel {
            Some(cancel) => {
                cancel.send_replace(true);
                true
            }
            None => announced,
        }
    }

    pub async fn owned(&self) -> Vec<String> {
        self.storage.owned_files().await
    }

    pub fn swarms(&self) -> Vec<String> {
        self.keep_alive.names()
    }

    pub fn banned_peers(&self) -> Vec<PeerAddress> {
        self.banned.snapshot()
    }

    pub fn open_connections(&self) -> usize {
        self.gauge.open()
    }

    /// Cancels every download and stops the upload server and keep-alives.
    pub async fn shutdown(&self) {
        let downloads: Vec<watch::Sender<bool>> = std::mem::take(&mut *self.downloads.lock()).into_values().collect();
        for cancel in downloads {
            cancel.send_replace(true);
        }
        self.shutdown.send_replace(true);
        let handles: Vec<JoinHandle<()>> = std::mem::take(&mut *self.handles.lock());
        join_all(handles).await;
        info!("[PEER] Peer on upload port {} stopped", self.upload_port);
    }
}
