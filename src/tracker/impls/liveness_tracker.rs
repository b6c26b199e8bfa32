use log::{debug, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::watch;
use crate::common::traits::output_sink::OutputSink;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::liveness_tracker::LivenessTracker;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::swarm_registry::SwarmRegistry;
use crate::wire::structs::keep_alive::KeepAlive;
use crate::wire::wire::MAX_DATAGRAM_LENGTH;

impl LivenessTracker {
    pub fn new(socket: UdpSocket, registry: Arc<SwarmRegistry>, sink: Arc<dyn OutputSink>) -> LivenessTracker {
        LivenessTracker { socket, registry, sink }
    }

    /// Receives keep-alives until shutdown.
    ///
    /// Malformed datagrams are reported and dropped. A keep-alive from a peer
    /// that is not a member of the named swarm is a consistency fault and
    /// ends the service with an error.
    pub async fn start(self, mut shutdown: watch::Receiver<bool>) -> Result<(), TrackerError> {
        let local_addr = self.socket.local_addr().ok();
        info!("[LIVENESS] Starting liveness tracker on {:?}", local_addr);
        let mut data = [0u8; MAX_DATAGRAM_LENGTH];

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("[LIVENESS] Stopping liveness tracker on {:?}...", local_addr);
                    return Ok(());
                }
                result = self.socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, remote_addr)) => {
                            self.handle_datagram(&data[..valid_bytes], remote_addr)?;
                        }
                        Err(error) => {
                            match error.kind() {
                                std::io::ErrorKind::WouldBlock => tokio::task::yield_now().await,
                                _ => self.sink.print_err(&format!("liveness tracker recv_from error: {error}")),
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn handle_datagram(&self, payload: &[u8], remote_addr: SocketAddr) -> Result<(), TrackerError> {
        let keep_alive = match KeepAlive::from_bytes(payload) {
            Ok(keep_alive) => keep_alive,
            Err(error) => {
                self.sink.print_err(&format!("dropping datagram from {remote_addr}: {error}"));
                return Ok(());
            }
        };

        let peer = PeerAddress::new(remote_addr.ip(), keep_alive.listen_port);
        if self.registry.refresh(&keep_alive.file_name, &peer) {
            debug!("[LIVENESS] {} refreshed in swarm {}", peer, keep_alive.file_name);
            return Ok(());
        }

        let reason = format!("keep-alive from {} which is not a member of swarm {}", peer, keep_alive.file_name);
        self.sink.print_err(&reason);
        Err(TrackerError::ConsistencyFault(reason))
    }
}
