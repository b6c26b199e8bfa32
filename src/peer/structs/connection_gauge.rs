use std::sync::atomic::AtomicUsize;

/// Counts open peer connections against `limit`.
#[derive(Debug)]
pub struct ConnectionGauge {
    pub(crate) open: AtomicUsize,
    pub(crate) limit: usize,
}
