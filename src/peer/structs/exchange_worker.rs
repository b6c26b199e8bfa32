use std::sync::Arc;
use std::time::Duration;
use crate::common::traits::output_sink::OutputSink;
use crate::peer::structs::ban_list::BanList;
use crate::peer::structs::piece_selector::PieceSelector;
use crate::storage::traits::piece_storage::PieceStorage;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::piece_manifest::PieceManifest;

/// Downloads from `remote` whatever the selector grants for it.
pub struct ExchangeWorker {
    pub remote: PeerAddress,
    pub manifest: Arc<PieceManifest>,
    pub selector: Arc<PieceSelector>,
    pub storage: Arc<dyn PieceStorage>,
    pub banned: Arc<BanList>,
    pub connect_timeout: Duration,
    pub sink: Arc<dyn OutputSink>,
}
