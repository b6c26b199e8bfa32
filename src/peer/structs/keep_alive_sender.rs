use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use crate::common::traits::output_sink::OutputSink;
use crate::peer::structs::keep_alive_target::KeepAliveTarget;

pub struct KeepAliveSender {
    pub(crate) socket: UdpSocket,
    pub(crate) targets: RwLock<BTreeMap<String, KeepAliveTarget>>,
    pub(crate) interval: Duration,
    pub(crate) sink: Arc<dyn OutputSink>,
}
