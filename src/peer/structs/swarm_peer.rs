use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::common::traits::output_sink::OutputSink;
use crate::directory::structs::directory_client::DirectoryClient;
use crate::peer::structs::ban_list::BanList;
use crate::peer::structs::connection_gauge::ConnectionGauge;
use crate::peer::structs::keep_alive_sender::KeepAliveSender;
use crate::storage::traits::piece_storage::PieceStorage;

/// One running peer: storage, upload server, keep-alives and downloads.
pub struct SwarmPeer {
    pub upload_port: u16,
    pub(crate) directory: DirectoryClient,
    pub(crate) tracker_ip: IpAddr,
    pub(crate) storage: Arc<dyn PieceStorage>,
    pub(crate) keep_alive: Arc<KeepAliveSender>,
    pub(crate) gauge: Arc<ConnectionGauge>,
    pub(crate) banned: Arc<BanList>,
    pub(crate) downloads: Mutex<BTreeMap<String, watch::Sender<bool>>>,
    pub(crate) round_timeout: Duration,
    pub(crate) connect_timeout: Duration,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) handles: Mutex<Vec<JoinHandle<()>>>,
    pub(crate) sink: Arc<dyn OutputSink>,
}
