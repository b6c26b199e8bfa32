use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use crate::common::traits::output_sink::OutputSink;
use crate::storage::traits::piece_storage::PieceStorage;

/// Serves owned pieces; at most `workers` connections are served at once,
/// the rest wait for a slot.
pub struct UploadServer {
    pub port: u16,
    pub(crate) listener: TcpListener,
    pub(crate) storage: Arc<dyn PieceStorage>,
    pub(crate) workers: Arc<Semaphore>,
    pub(crate) sink: Arc<dyn OutputSink>,
}
