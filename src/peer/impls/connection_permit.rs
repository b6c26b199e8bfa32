use std::sync::atomic::Ordering;
use crate::peer::structs::connection_permit::ConnectionPermit;

impl Drop for ConnectionPermit {
    fn drop(&mut self) {
        self.gauge.open.fetch_sub(1, Ordering::AcqRel);
    }
}
