use futures_util::future::join_all;
use log::info;
use parking_lot::{Mutex, RwLock};
use std::net::IpAddr;
use std::sync::{Arc, Weak};
use std::time::Duration;
use crate::common::traits::output_sink::OutputSink;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::shard_allocator::ShardAllocator;
use crate::tracker::structs::shard_table::ShardTable;
use crate::tracker::structs::shard_unit::ShardUnit;
use crate::tracker::structs::swarm_registry::SwarmRegistry;
use crate::tracker::traits::swarm_observer::SwarmObserver;
use crate::tracker::tracker::port_span;

impl ShardAllocator {
    pub fn new(config: &TrackerConfig, sink: Arc<dyn OutputSink>) -> Result<Arc<ShardAllocator>, TrackerError> {
        let bind_ip: IpAddr = config.tracker_bind_ip
            .parse()
            .map_err(|_| TrackerError::InvalidAddress(config.tracker_bind_ip.clone()))?;
        if config.shard_base_port == 0 {
            return Err(TrackerError::InvalidAddress(String::from("shard base port must not be 0")));
        }

        Ok(Arc::new_cyclic(|self_ref| ShardAllocator {
            bind_ip,
            base_port: config.shard_base_port,
            max_swarms_per_shard: config.max_swarms_per_shard.max(1),
            sweep_interval: Duration::from_secs(config.sweep_interval),
            control_workers: config.control_workers,
            table: Mutex::new(ShardTable::default()),
            listener: RwLock::new(None),
            self_ref: self_ref.clone(),
            sink,
        }))
    }

    /// Registers the observer receiving emptied swarms after the allocator
    /// has updated its own bookkeeping.
    pub fn set_listener(&self, listener: Weak<dyn SwarmObserver>) {
        *self.listener.write() = Some(listener);
    }

    /// Creates the swarm of `file_name` on a shard with room, starting a new
    /// shard when every existing one is full. Returns the shard port.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn publish(&self, file_name: &str, seeder: PeerAddress) -> Result<u16, TrackerError> {
        let mut table = self.table.lock();
        if table.files.contains_key(file_name) {
            return Err(TrackerError::SwarmExists(file_name.to_string()));
        }

        let with_room = table.units
            .values()
            .find(|unit| unit.registry.swarms_count() < self.max_swarms_per_shard)
            .cloned();
        let unit = match with_room {
            Some(unit) => unit,
            None => self.allocate_unit(&mut table)?,
        };

        unit.registry.add_new_swarm(file_name, seeder)?;
        table.files.insert(file_name.to_string(), unit.port);
        Ok(unit.port)
    }

    /// Starts a shard on the next port after the cursor that binds, trying
    /// each port of the range at most once.
    fn allocate_unit(&self, table: &mut ShardTable) -> Result<Arc<ShardUnit>, TrackerError> {
        let span = port_span(self.base_port);
        for _ in 0..span {
            let port = (self.base_port as u32 + table.port_cursor % span) as u16;
            table.port_cursor = (table.port_cursor + 1) % span;
            if table.units.contains_key(&port) {
                continue;
            }

            let observer: Weak<dyn SwarmObserver> = self.self_ref.clone();
            match ShardUnit::start(self.bind_ip, port, self.control_workers, self.sweep_interval, observer, self.sink.clone()) {
                Ok(unit) => {
                    let unit = Arc::new(unit);
                    table.units.insert(port, unit.clone());
                    self.sink.print(&format!("started tracker shard on port {port}"));
                    return Ok(unit);
                }
                Err(error) => {
                    self.sink.print_err(&format!("skipping tracker port {port}: {error}"));
                }
            }
        }
        Err(TrackerError::PortSpaceExhausted(self.base_port))
    }

    /// Adds `peer` to the existing swarm of `file_name` and returns its port.
    ///
    /// The allocator lock is released before the swarm is touched.
    pub fn join(&self, file_name: &str, peer: PeerAddress) -> Result<u16, TrackerError> {
        let (port, registry) = self.locate(file_name)
            .ok_or_else(|| TrackerError::UnknownFile(file_name.to_string()))?;
        if registry.add_member(file_name, peer) {
            Ok(port)
        } else {
            Err(TrackerError::UnknownFile(file_name.to_string()))
        }
    }

    fn locate(&self, file_name: &str) -> Option<(u16, Arc<SwarmRegistry>)> {
        let table = self.table.lock();
        let port = *table.files.get(file_name)?;
        let unit = table.units.get(&port)?;
        Some((port, unit.registry.clone()))
    }

    pub fn port_of(&self, file_name: &str) -> Result<u16, TrackerError> {
        self.table.lock()
            .files
            .get(file_name)
            .copied()
            .ok_or_else(|| TrackerError::UnknownFile(file_name.to_string()))
    }

    pub fn registry_of(&self, file_name: &str) -> Option<Arc<SwarmRegistry>> {
        self.locate(file_name).map(|(_, registry)| registry)
    }

    pub fn shards_count(&self) -> usize {
        self.table.lock().units.len()
    }

    /// Port and swarm count of every live shard.
    pub fn shard_loads(&self) -> Vec<(u16, usize)> {
        let table = self.table.lock();
        table.units
            .iter()
            .map(|(port, unit)| (*port, unit.registry.swarms_count()))
            .collect()
    }

    /// Union of the members of every swarm on every shard, without duplicates.
    pub fn all_peers(&self) -> Vec<PeerAddress> {
        let registries: Vec<Arc<SwarmRegistry>> = self.table.lock()
            .units
            .values()
            .map(|unit| unit.registry.clone())
            .collect();
        let mut peers: Vec<PeerAddress> = Vec::new();
        for registry in registries {
            for peer in registry.all_members() {
                if !peers.contains(&peer) {
                    peers.push(peer);
                }
            }
        }
        peers
    }

    fn forward_emptied(&self, file_name: &str) {
        let listener = self.listener.read().clone();
        if let Some(listener) = listener.and_then(|listener| listener.upgrade()) {
            listener.swarm_emptied(file_name);
        }
    }

    /// Stops every shard and waits for their tasks.
    pub async fn shutdown_all(&self) {
        let units: Vec<Arc<ShardUnit>> = {
            let mut table = self.table.lock();
            table.files.clear();
            std::mem::take(&mut table.units).into_values().collect()
        };
        info!("[SHARDS] Stopping {} tracker shards", units.len());
        join_all(units.iter().map(|unit| unit.stop())).await;
    }
}

impl SwarmObserver for ShardAllocator {
    fn swarm_emptied(&self, file_name: &str) {
        let stopped = {
            let mut table = self.table.lock();
            let Some(port) = table.files.remove(file_name) else {
                return;
            };
            let idle = table.units
                .get(&port)
                .is_some_and(|unit| unit.registry.swarms_count() == 0);
            if idle { table.units.remove(&port) } else { None }
        };

        if let Some(unit) = stopped {
            unit.signal_stop();
            self.sink.print(&format!("stopped idle tracker shard on port {}", unit.port));
        }
        self.forward_emptied(file_name);
    }

    fn shard_faulted(&self, port: u16, reason: &str) {
        let (unit, files) = {
            let mut table = self.table.lock();
            let files = table.files_on(port);
            for file_name in &files {
                table.files.remove(file_name);
            }
            (table.units.remove(&port), files)
        };

        self.sink.print_err(&format!("tracker shard on port {} failed ({}), dropping {} swarms", port, reason, files.len()));
        if let Some(unit) = unit {
            unit.signal_stop();
        }
        for file_name in files {
            self.forward_emptied(&file_name);
        }
    }
}
