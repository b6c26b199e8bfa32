use log::{debug, info};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::task::JoinSet;
use crate::common::traits::output_sink::OutputSink;
use crate::directory::structs::directory_server::DirectoryServer;
use crate::directory::structs::torrent_directory::TorrentDirectory;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::tracker::CONTROL_REQUEST_TIMEOUT;
use crate::wire::enums::directory_request::DirectoryRequest;
use crate::wire::enums::directory_response::DirectoryResponse;
use crate::wire::errors::WireError;
use crate::wire::wire::{recv_message, send_message};

impl DirectoryServer {
    pub fn new(listener: TcpListener, directory: Arc<TorrentDirectory>, sink: Arc<dyn OutputSink>) -> DirectoryServer {
        DirectoryServer { listener, directory, sink }
    }

    pub async fn start(self, mut shutdown: watch::Receiver<bool>) {
        let local_addr = self.listener.local_addr().ok();
        info!("[DIRECTORY] Starting directory server on {:?}", local_addr);
        let mut connections = JoinSet::new();

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("[DIRECTORY] Stopping directory server on {:?}...", local_addr);
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            let directory = self.directory.clone();
                            let sink = self.sink.clone();
                            connections.spawn(async move {
                                if let Err(error) = DirectoryServer::handle_connection(stream, remote_addr, &directory, sink.as_ref()).await {
                                    sink.print_err(&format!("directory request from {remote_addr} failed: {error}"));
                                }
                            });
                        }
                        Err(error) => {
                            self.sink.print_err(&format!("directory server accept failed: {error}"));
                        }
                    }
                }
                Some(_) = connections.join_next(), if !connections.is_empty() => {}
            }
        }

        connections.abort_all();
    }

    async fn handle_connection(mut stream: TcpStream, remote_addr: SocketAddr, directory: &TorrentDirectory, sink: &dyn OutputSink) -> Result<(), WireError> {
        let request: DirectoryRequest = tokio::time::timeout(CONTROL_REQUEST_TIMEOUT, recv_message(&mut stream))
            .await
            .map_err(|_| WireError::Unexpected(String::from("request timed out")))??;
        debug!("[DIRECTORY] {remote_addr} sent a {} request", request_kind(&request));
        let response = DirectoryServer::handle_request(directory, sink, remote_addr.ip(), request).await;
        send_message(&mut stream, &response).await
    }

    pub async fn handle_request(directory: &TorrentDirectory, sink: &dyn OutputSink, remote_ip: IpAddr, request: DirectoryRequest) -> DirectoryResponse {
        match request {
            DirectoryRequest::Lookup { file_name } => DirectoryResponse::Manifest(directory.lookup(&file_name)),
            DirectoryRequest::Publish { manifest, listen_port } => {
                let seeder = PeerAddress::new(remote_ip, listen_port);
                let file_name = manifest.file_name.clone();
                match directory.publish(manifest, seeder).await {
                    Ok(tracker_port) => DirectoryResponse::Published { tracker_port },
                    Err(error) => {
                        sink.print_err(&format!("publish of {file_name} by {seeder} refused: {error}"));
                        DirectoryResponse::Refused { reason: error.to_string() }
                    }
                }
            }
            DirectoryRequest::ListFiles => DirectoryResponse::Files(directory.file_names()),
        }
    }
}

fn request_kind(request: &DirectoryRequest) -> &'static str {
    match request {
        DirectoryRequest::Lookup { .. } => "lookup",
        DirectoryRequest::Publish { .. } => "publish",
        DirectoryRequest::ListFiles => "list",
    }
}
