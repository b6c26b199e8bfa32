use parking_lot::Mutex;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use crate::common::common::{bind_tcp_listener, bind_udp_socket};
use crate::common::traits::output_sink::OutputSink;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::control_tracker::ControlTracker;
use crate::tracker::structs::liveness_sweeper::LivenessSweeper;
use crate::tracker::structs::liveness_tracker::LivenessTracker;
use crate::tracker::structs::shard_unit::ShardUnit;
use crate::tracker::structs::swarm_registry::SwarmRegistry;
use crate::tracker::traits::swarm_observer::SwarmObserver;
use crate::tracker::tracker::CONTROL_REQUEST_TIMEOUT;

impl ShardUnit {
    /// Binds `port` for both TCP and UDP and spawns the three shard tasks.
    /// Must be called from within a tokio runtime.
    pub fn start(bind_ip: IpAddr, port: u16, control_workers: usize, sweep_interval: Duration, observer: Weak<dyn SwarmObserver>, sink: Arc<dyn OutputSink>) -> Result<ShardUnit, TrackerError> {
        let address = SocketAddr::new(bind_ip, port);
        let listener = bind_tcp_listener(address).map_err(|source| TrackerError::Bind { port, source })?;
        let socket = bind_udp_socket(address).map_err(|source| TrackerError::Bind { port, source })?;

        let registry = Arc::new(SwarmRegistry::new(observer.clone(), sink.clone()));
        let (shutdown, rx) = watch::channel(false);

        let control = ControlTracker::new(listener, registry.clone(), control_workers, CONTROL_REQUEST_TIMEOUT, sink.clone());
        let liveness = LivenessTracker::new(socket, registry.clone(), sink);
        let sweeper = LivenessSweeper::new(registry.clone(), sweep_interval);

        let liveness_rx = rx.clone();
        let handles = vec![
            tokio::spawn(control.start(rx.clone())),
            tokio::spawn(async move {
                if let Err(error) = liveness.start(liveness_rx).await {
                    if let Some(observer) = observer.upgrade() {
                        observer.shard_faulted(port, &error.to_string());
                    }
                }
            }),
            tokio::spawn(sweeper.start(rx)),
        ];

        Ok(ShardUnit {
            port,
            registry,
            shutdown,
            handles: Mutex::new(handles),
        })
    }

    /// Raises the shutdown flag without waiting. Safe to call from the
    /// shard's own tasks.
    pub fn signal_stop(&self) {
        self.shutdown.send_replace(true);
    }

    /// Raises the shutdown flag and waits for the three tasks to finish.
    pub async fn stop(&self) {
        self.signal_stop();
        let handles: Vec<_> = std::mem::take(&mut *self.handles.lock());
        for handle in handles {
            let _ = handle.await;
        }
    }

    pub fn is_stopping(&self) -> bool {
        *self.shutdown.borrow()
    }
}
