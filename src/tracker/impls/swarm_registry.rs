use log::debug;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use crate::common::traits::output_sink::OutputSink;
use crate::tracker::enums::liveness_flag::LivenessFlag;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::swarm_registry::SwarmRegistry;
use crate::tracker::structs::sweep_report::SweepReport;
use crate::tracker::traits::swarm_observer::SwarmObserver;

impl SwarmRegistry {
    pub fn new(observer: Weak<dyn SwarmObserver>, sink: Arc<dyn OutputSink>) -> SwarmRegistry {
        SwarmRegistry {
            swarms: RwLock::new(BTreeMap::new()),
            observer,
            sink,
        }
    }

    fn swarm(&self, file_name: &str) -> Option<Arc<Mutex<Swarm>>> {
        self.swarms.read().get(file_name).cloned()
    }

    /// Creates the swarm of `file_name` with `seeder` as its only, `Alive`, member.
    pub fn add_new_swarm(&self, file_name: &str, seeder: PeerAddress) -> Result<(), TrackerError> {
        let mut lock = self.swarms.write();
        if lock.contains_key(file_name) {
            return Err(TrackerError::SwarmExists(file_name.to_string()));
        }
        lock.insert(file_name.to_string(), Arc::new(Mutex::new(Swarm::new(file_name, seeder))));
        drop(lock);
        self.sink.print(&format!("new swarm for file {file_name} seeded by {seeder}"));
        Ok(())
    }

    /// Adds `peer` to the swarm of `file_name` as `Alive`.
    ///
    /// Returns `false` when there is no such swarm, including a swarm that was
    /// emptied concurrently. Joining twice only refreshes the member.
    pub fn add_member(&self, file_name: &str, peer: PeerAddress) -> bool {
        let Some(swarm) = self.swarm(file_name) else {
            return false;
        };
        let mut guard = swarm.lock();
        if guard.closed {
            return false;
        }
        guard.insert(peer);
        true
    }

    /// Snapshot of the members of `file_name`, `None` if there is no swarm.
    pub fn members_of(&self, file_name: &str) -> Option<Vec<PeerAddress>> {
        let swarm = self.swarm(file_name)?;
        let guard = swarm.lock();
        if guard.closed {
            return None;
        }
        Some(guard.peers())
    }

    /// Union of all swarms, without duplicates. Each swarm is read under its
    /// own lock, so the result is not one atomic snapshot.
    pub fn all_members(&self) -> Vec<PeerAddress> {
        let swarms: Vec<Arc<Mutex<Swarm>>> = self.swarms.read().values().cloned().collect();
        let mut peers: Vec<PeerAddress> = Vec::new();
        for swarm in swarms {
            for peer in swarm.lock().peers() {
                if !peers.contains(&peer) {
                    peers.push(peer);
                }
            }
        }
        peers
    }

    pub fn swarms_count(&self) -> usize {
        self.swarms.read().len()
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.swarms.read().contains_key(file_name)
    }

    pub fn file_names(&self) -> Vec<String> {
        self.swarms.read().keys().cloned().collect()
    }

    pub fn flag_of(&self, file_name: &str, peer: &PeerAddress) -> Option<LivenessFlag> {
        let swarm = self.swarm(file_name)?;
        let guard = swarm.lock();
        guard.position(peer).map(|index| guard.members[index].flag)
    }

    /// Marks `peer` `Alive` in the swarm of `file_name`.
    ///
    /// Returns `false` when the peer is not a member of that swarm.
    pub fn refresh(&self, file_name: &str, peer: &PeerAddress) -> bool {
        let Some(swarm) = self.swarm(file_name) else {
            return false;
        };
        let mut guard = swarm.lock();
        if guard.closed {
            return false;
        }
        match guard.position(peer) {
            Some(index) => {
                guard.members[index].flag = LivenessFlag::Alive;
                true
            }
            None => false,
        }
    }

    /// Ages every member once.
    ///
    /// Per swarm, the first pass turns `Alive` into `Dead` and collects the
    /// members that were already `Dead`; the second pass removes them.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn sweep(&self) -> SweepReport {
        let swarms: Vec<Arc<Mutex<Swarm>>> = self.swarms.read().values().cloned().collect();
        let mut report = SweepReport::default();

        for swarm in swarms {
            let mut guard = swarm.lock();
            if guard.closed {
                continue;
            }

            let mut evict: Vec<PeerAddress> = Vec::new();
            for member in guard.members.iter_mut() {
                match member.flag {
                    LivenessFlag::Alive => {
                        member.flag = LivenessFlag::Dead;
                        report.aged += 1;
                    }
                    LivenessFlag::Dead => evict.push(member.peer),
                }
            }

            for peer in evict {
                guard.members.retain(|member| member.peer != peer);
                self.sink.print(&format!("removing peer {} from swarm associated with file {}", peer, guard.file_name));
                report.evicted.push((guard.file_name.clone(), peer));
            }

            if guard.members.is_empty() {
                guard.closed = true;
                self.swarms.write().remove(&guard.file_name);
                self.sink.print(&format!("swarm associated with file {} is empty", guard.file_name));
                if let Some(observer) = self.observer.upgrade() {
                    observer.swarm_emptied(&guard.file_name);
                }
                report.emptied.push(guard.file_name.clone());
            }
        }

        debug!("[SWEEP] aged {} members, evicted {}, emptied {} swarms", report.aged, report.evicted.len(), report.emptied.len());
        report
    }
}
