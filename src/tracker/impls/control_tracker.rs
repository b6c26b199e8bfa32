use log::{debug, info};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{watch, Semaphore};
use tokio::task::JoinSet;
use crate::common::traits::output_sink::OutputSink;
use crate::tracker::structs::control_tracker::ControlTracker;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::swarm_registry::SwarmRegistry;
use crate::wire::enums::control_request::ControlRequest;
use crate::wire::enums::control_response::ControlResponse;
use crate::wire::errors::WireError;
use crate::wire::wire::{recv_message, send_message};

impl ControlTracker {
    pub fn new(listener: TcpListener, registry: Arc<SwarmRegistry>, workers: usize, request_timeout: Duration, sink: Arc<dyn OutputSink>) -> ControlTracker {
        ControlTracker {
            listener,
            registry,
            workers: Arc::new(Semaphore::new(workers.max(1))),
            request_timeout,
            sink,
        }
    }

    /// Accepts connections until the shutdown flag is raised, then aborts the
    /// requests still in flight.
    pub async fn start(self, mut shutdown: watch::Receiver<bool>) {
        let local_addr = self.listener.local_addr().ok();
        info!("[CONTROL] Starting control tracker on {:?}", local_addr);
        let mut connections = JoinSet::new();

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("[CONTROL] Stopping control tracker on {:?}...", local_addr);
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            let registry = self.registry.clone();
                            let workers = self.workers.clone();
                            let sink = self.sink.clone();
                            let request_timeout = self.request_timeout;
                            connections.spawn(async move {
                                let Ok(_permit) = workers.acquire_owned().await else {
                                    return;
                                };
                                if let Err(error) = ControlTracker::handle_connection(stream, remote_addr, &registry, sink.as_ref(), request_timeout).await {
                                    sink.print_err(&format!("control request from {remote_addr} failed: {error}"));
                                }
                            });
                        }
                        Err(error) => {
                            self.sink.print_err(&format!("control tracker accept failed: {error}"));
                        }
                    }
                }
                Some(_) = connections.join_next(), if !connections.is_empty() => {}
            }
        }

        connections.abort_all();
    }

    async fn handle_connection(mut stream: TcpStream, remote_addr: SocketAddr, registry: &SwarmRegistry, sink: &dyn OutputSink, request_timeout: Duration) -> Result<(), WireError> {
        let request: ControlRequest = tokio::time::timeout(request_timeout, recv_message(&mut stream))
            .await
            .map_err(|_| WireError::Unexpected(String::from("request timed out")))??;
        debug!("[CONTROL] {remote_addr} sent {request:?}");
        let response = ControlTracker::handle_request(registry, sink, remote_addr.ip(), request);
        send_message(&mut stream, &response).await
    }

    /// Answers one request. The joining peer is the connection's address paired
    /// with the advertised listening port.
    pub fn handle_request(registry: &SwarmRegistry, sink: &dyn OutputSink, remote_ip: IpAddr, request: ControlRequest) -> ControlResponse {
        match request {
            ControlRequest::JoinSwarm { file_name, listen_port } => {
                let peer = PeerAddress::new(remote_ip, listen_port);
                if registry.add_member(&file_name, peer) {
                    sink.print(&format!("peer {peer} joined swarm associated with file {file_name}"));
                    ControlResponse::Allowed
                } else {
                    sink.print(&format!("peer {peer} denied: no swarm associated with file {file_name}"));
                    ControlResponse::Denied
                }
            }
            ControlRequest::Query { file_name } => {
                let members = registry.members_of(&file_name);
                sink.print(&format!("query for file {} from {}: {} members", file_name, remote_ip, members.as_ref().map_or(0, |m| m.len())));
                ControlResponse::Members(members)
            }
        }
    }
}
