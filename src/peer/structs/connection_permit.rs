use std::sync::Arc;
use crate::peer::structs::connection_gauge::ConnectionGauge;

/// A reserved connection slot, given back on drop.
#[derive(Debug)]
pub struct ConnectionPermit {
    pub(crate) gauge: Arc<ConnectionGauge>,
}
