use std::sync::Arc;
use tokio::net::TcpListener;
use crate::common::traits::output_sink::OutputSink;
use crate::directory::structs::torrent_directory::TorrentDirectory;

pub struct DirectoryServer {
    pub(crate) listener: TcpListener,
    pub(crate) directory: Arc<TorrentDirectory>,
    pub(crate) sink: Arc<dyn OutputSink>,
}
