use log::{debug, info};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::{watch, Semaphore};
use tokio::task::JoinSet;
use crate::common::common::bind_tcp_listener;
use crate::common::traits::output_sink::OutputSink;
use crate::peer::errors::PeerError;
use crate::peer::structs::upload_server::UploadServer;
use crate::storage::traits::piece_storage::PieceStorage;
use crate::wire::wire::{recv_message, send_message, write_frame};

impl UploadServer {
    /// Binds the first free port from `start_port` upward.
    pub fn bind(bind_ip: IpAddr, start_port: u16, max_connections: usize, storage: Arc<dyn PieceStorage>, sink: Arc<dyn OutputSink>) -> Result<UploadServer, PeerError> {
        for port in start_port..=u16::MAX {
            match bind_tcp_listener(SocketAddr::new(bind_ip, port)) {
                Ok(listener) => {
                    let port = listener.local_addr()?.port();
                    info!("[UPLOAD] Upload server bound to {}:{}", bind_ip, port);
                    return Ok(UploadServer {
                        port,
                        listener,
                        storage,
                        workers: Arc::new(Semaphore::new(max_connections.max(1))),
                        sink,
                    });
                }
                Err(error) => debug!("[UPLOAD] Port {} unavailable: {}", port, error),
            }
        }
        Err(PeerError::NoFreePort(start_port))
    }

    /// Serves until shutdown, then cuts every connection still open.
    pub async fn start(self, mut shutdown: watch::Receiver<bool>) {
        let mut connections = JoinSet::new();

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("[UPLOAD] Stopping upload server on port {}...", self.port);
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            let storage = self.storage.clone();
                            let workers = self.workers.clone();
                            let sink = self.sink.clone();
                            connections.spawn(async move {
                                let Ok(_permit) = workers.acquire_owned().await else {
                                    return;
                                };
                                if let Err(error) = UploadServer::serve(stream, storage.as_ref(), sink.as_ref()).await {
                                    sink.print_err(&format!("upload to {remote_addr} failed: {error}"));
                                }
                            });
                        }
                        Err(error) => {
                            self.sink.print_err(&format!("upload server accept failed: {error}"));
                        }
                    }
                }
                Some(_) = connections.join_next(), if !connections.is_empty() => {}
            }
        }

        connections.abort_all();
    }

    /// One upload: file name in, owned offsets out, selection in, pieces out
    /// in the order requested.
    pub async fn serve(mut stream: TcpStream, storage: &dyn PieceStorage, sink: &dyn OutputSink) -> Result<(), PeerError> {
        let file_name: String = recv_message(&mut stream).await?;
        let owned = storage.owned_offsets(&file_name).await;
        send_message(&mut stream, &owned).await?;

        let requested: Vec<u64> = recv_message(&mut stream).await?;
        let remote = stream.peer_addr().ok();
        for offset in &requested {
            let piece = storage.read_piece(&file_name, *offset).await?;
            write_frame(&mut stream, &piece).await?;
        }
        if !requested.is_empty() {
            sink.print(&format!("uploaded {} pieces of {} to {:?}", requested.len(), file_name, remote));
        }
        Ok(())
    }
}
