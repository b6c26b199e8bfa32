use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use crate::common::traits::output_sink::OutputSink;
use crate::tracker::structs::piece_manifest::PieceManifest;
use crate::tracker::structs::shard_allocator::ShardAllocator;

/// Published manifests by file name.
///
/// The manifest lock is taken before the allocator lock when a new file is
/// published, and is never held while a swarm is locked.
pub struct TorrentDirectory {
    pub(crate) manifests: RwLock<BTreeMap<String, PieceManifest>>,
    pub(crate) allocator: Arc<ShardAllocator>,
    pub(crate) sink: Arc<dyn OutputSink>,
}
