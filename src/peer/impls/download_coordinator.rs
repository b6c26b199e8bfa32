use log::{debug, info};
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinSet;
use crate::common::common::shutdown_waiting;
use crate::common::traits::output_sink::OutputSink;
use crate::peer::enums::download_state::DownloadState;
use crate::peer::enums::exchange_outcome::ExchangeOutcome;
use crate::peer::errors::PeerError;
use crate::peer::structs::ban_list::BanList;
use crate::peer::structs::connection_gauge::ConnectionGauge;
use crate::peer::structs::download_coordinator::DownloadCoordinator;
use crate::peer::structs::exchange_worker::ExchangeWorker;
use crate::peer::structs::piece_selector::PieceSelector;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::storage::traits::piece_storage::PieceStorage;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::piece_manifest::PieceManifest;

/// Pause before the next round when every candidate was skipped for capacity.
const CAPACITY_BACKOFF: Duration = Duration::from_millis(500);

impl DownloadCoordinator {
    #[allow(clippy::too_many_arguments)]
    pub async fn new(manifest: Arc<PieceManifest>, tracker: TrackerClient, listen_port: u16, storage: Arc<dyn PieceStorage>, gauge: Arc<ConnectionGauge>, banned: Arc<BanList>, round_timeout: Duration, connect_timeout: Duration, sink: Arc<dyn OutputSink>) -> DownloadCoordinator {
        let owned = storage.owned_offsets(&manifest.file_name).await;
        let selector = Arc::new(PieceSelector::new(&manifest.file_name, owned));
        DownloadCoordinator {
            manifest,
            tracker,
            listen_port,
            storage,
            selector,
            gauge,
            banned,
            round_timeout,
            connect_timeout,
            state: RwLock::new(DownloadState::Discovering),
            sink,
        }
    }

    pub fn state(&self) -> DownloadState {
        *self.state.read()
    }

    fn set_state(&self, state: DownloadState) {
        *self.state.write() = state;
        debug!("[DOWNLOAD] {} is {}", self.manifest.file_name, state);
    }

    pub fn missing(&self) -> usize {
        self.manifest.pieces_count().saturating_sub(self.selector.owned_count())
    }

    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }

    /// Retrieves the file and returns the path of the assembled copy.
    ///
    /// Raising `cancel` (or dropping its sender) aborts the running round.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) -> Result<PathBuf, PeerError> {
        match self.rounds(&mut cancel).await {
            Ok(()) => {
                let path = self.storage.assemble_complete(&self.manifest).await;
                match path {
                    Ok(path) => {
                        self.set_state(DownloadState::Complete);
                        self.sink.print(&format!("download of {} complete: {}", self.manifest.file_name, path.display()));
                        Ok(path)
                    }
                    Err(error) => {
                        self.set_state(DownloadState::Aborted);
                        Err(error.into())
                    }
                }
            }
            Err(error) => {
                self.set_state(DownloadState::Aborted);
                self.sink.print_err(&format!("download of {} aborted: {}", self.manifest.file_name, error));
                Err(error)
            }
        }
    }

    async fn rounds(&self, cancel: &mut watch::Receiver<bool>) -> Result<(), PeerError> {
        let file_name = self.manifest.file_name.as_str();
        let mut tried: BTreeSet<PeerAddress> = BTreeSet::new();

        loop {
            if is_cancelled(cancel) {
                return Err(PeerError::Interrupted(file_name.to_string()));
            }
            if self.is_complete() {
                return Ok(());
            }

            self.set_state(DownloadState::Discovering);
            self.tracker.join_swarm(file_name, self.listen_port).await?;
            let (members, local_ip) = self.tracker.query(file_name).await?;
            let own_address = PeerAddress::new(local_ip, self.listen_port);

            let candidates: Vec<PeerAddress> = members
                .unwrap_or_default()
                .into_iter()
                .filter(|peer| *peer != own_address && !tried.contains(peer) && !self.banned.is_banned(peer))
                .collect();
            if candidates.is_empty() {
                return Err(PeerError::Incomplete {
                    file_name: file_name.to_string(),
                    missing: self.missing(),
                });
            }

            self.set_state(DownloadState::Exchanging);
            let mut workers = JoinSet::new();
            for candidate in candidates {
                let Some(permit) = self.gauge.try_acquire() else {
                    debug!("[DOWNLOAD] connection cap reached, skipping {} this round", candidate);
                    continue;
                };
                tried.insert(candidate);
                let worker = ExchangeWorker::new(
                    candidate,
                    self.manifest.clone(),
                    self.selector.clone(),
                    self.storage.clone(),
                    self.banned.clone(),
                    self.connect_timeout,
                    self.sink.clone(),
                );
                workers.spawn(async move { (candidate, worker.run(permit).await) });
            }

            if workers.is_empty() {
                if shutdown_waiting(CAPACITY_BACKOFF, cancel).await {
                    return Err(PeerError::Interrupted(file_name.to_string()));
                }
                continue;
            }

            info!("[DOWNLOAD] {}: round with {} peers, {} pieces missing", file_name, workers.len(), self.missing());
            let interrupted = self.wait_round(&mut workers, cancel).await;
            workers.abort_all();
            while workers.join_next().await.is_some() {}
            if interrupted {
                return Err(PeerError::Interrupted(file_name.to_string()));
            }
        }
    }

    /// Collects worker outcomes until all finish, the round times out or the
    /// download is cancelled. Returns `true` on cancellation.
    async fn wait_round(&self, workers: &mut JoinSet<(PeerAddress, ExchangeOutcome)>, cancel: &mut watch::Receiver<bool>) -> bool {
        let deadline = tokio::time::sleep(self.round_timeout);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        return true;
                    }
                }
                _ = &mut deadline => {
                    self.sink.print_err(&format!("round for {} timed out, cancelling {} workers", self.manifest.file_name, workers.len()));
                    return false;
                }
                joined = workers.join_next() => {
                    match joined {
                        None => return false,
                        Some(Ok((peer, outcome))) => {
                            debug!("[DOWNLOAD] {} with {}: {:?}", self.manifest.file_name, peer, outcome);
                        }
                        Some(Err(error)) => {
                            self.sink.print_err(&format!("exchange task for {} ended abnormally: {}", self.manifest.file_name, error));
                        }
                    }
                }
            }
        }
    }
}

fn is_cancelled(cancel: &watch::Receiver<bool>) -> bool {
    *cancel.borrow() || cancel.has_changed().is_err()
}
