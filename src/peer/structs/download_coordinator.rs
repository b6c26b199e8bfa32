use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use crate::common::traits::output_sink::OutputSink;
use crate::peer::enums::download_state::DownloadState;
use crate::peer::structs::ban_list::BanList;
use crate::peer::structs::connection_gauge::ConnectionGauge;
use crate::peer::structs::piece_selector::PieceSelector;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::storage::traits::piece_storage::PieceStorage;
use crate::tracker::structs::piece_manifest::PieceManifest;

/// Drives the retrieval of one file until it is complete or no candidate is left.
pub struct DownloadCoordinator {
    pub manifest: Arc<PieceManifest>,
    pub tracker: TrackerClient,
    pub listen_port: u16,
    pub storage: Arc<dyn PieceStorage>,
    pub selector: Arc<PieceSelector>,
    pub gauge: Arc<ConnectionGauge>,
    pub banned: Arc<BanList>,
    pub round_timeout: Duration,
    pub connect_timeout: Duration,
    pub(crate) state: RwLock<DownloadState>,
    pub(crate) sink: Arc<dyn OutputSink>,
}
