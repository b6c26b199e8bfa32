use log::{debug, info};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use crate::common::common::{bind_udp_socket, shutdown_waiting};
use crate::common::traits::output_sink::OutputSink;
use crate::peer::structs::keep_alive_sender::KeepAliveSender;
use crate::peer::structs::keep_alive_target::KeepAliveTarget;
use crate::wire::structs::keep_alive::KeepAlive;

impl KeepAliveSender {
    /// Binds an ephemeral UDP socket on `bind_address`.
    pub fn new(bind_address: SocketAddr, interval: Duration, sink: Arc<dyn OutputSink>) -> std::io::Result<KeepAliveSender> {
        Ok(KeepAliveSender {
            socket: bind_udp_socket(bind_address)?,
            targets: RwLock::new(BTreeMap::new()),
            interval,
            sink,
        })
    }

    /// Starts announcing `file_name`. Returns `false` if it is already announced.
    pub fn add(&self, file_name: &str, tracker: SocketAddr, listen_port: u16) -> bool {
        let mut targets = self.targets.write();
        if targets.contains_key(file_name) {
            return false;
        }
        targets.insert(file_name.to_string(), KeepAliveTarget { tracker, listen_port });
        true
    }

    pub fn remove(&self, file_name: &str) -> bool {
        self.targets.write().remove(file_name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.targets.read().keys().cloned().collect()
    }

    /// Sends one keep-alive per announced swarm.
    pub async fn send_all(&self) {
        let targets: Vec<(String, KeepAliveTarget)> = self.targets
            .read()
            .iter()
            .map(|(name, target)| (name.clone(), *target))
            .collect();

        for (file_name, target) in targets {
            let payload = KeepAlive::new(target.listen_port, &file_name).to_bytes();
            match self.socket.send_to(&payload, target.tracker).await {
                Ok(_) => debug!("[KEEPALIVE] sent for {} to {}", file_name, target.tracker),
                Err(error) => self.sink.print_err(&format!("keep-alive for {} to {} failed: {}", file_name, target.tracker, error)),
            }
        }
    }

    pub async fn start(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        info!("[KEEPALIVE] Sending keep-alives every {} seconds", self.interval.as_secs());
        while !shutdown_waiting(self.interval, &mut shutdown).await {
            self.send_all().await;
        }
        info!("[KEEPALIVE] Keep-alive sender stopped");
    }
}
