use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use crate::peer::structs::connection_gauge::ConnectionGauge;
use crate::peer::structs::connection_permit::ConnectionPermit;

impl ConnectionGauge {
    pub fn new(limit: usize) -> Arc<ConnectionGauge> {
        Arc::new(ConnectionGauge {
            open: AtomicUsize::new(0),
            limit,
        })
    }

    /// Reserves a slot if one is free. Never waits.
    pub fn try_acquire(self: &Arc<Self>) -> Option<ConnectionPermit> {
        let mut current = self.open.load(Ordering::Acquire);
        loop {
            if current >= self.limit {
                return None;
            }
            match self.open.compare_exchange_weak(current, current + 1, Ordering::AcqRel, Ordering::Acquire) {
                Ok(_) => return Some(ConnectionPermit { gauge: self.clone() }),
                Err(actual) => current = actual,
            }
        }
    }

    pub fn open(&self) -> usize {
        self.open.load(Ordering::Acquire)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
