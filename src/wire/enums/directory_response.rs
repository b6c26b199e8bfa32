use serde::{Deserialize, Serialize};
use crate::tracker::structs::piece_manifest::PieceManifest;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub enum DirectoryResponse {
    Manifest(Option<PieceManifest>),
    Published {
        tracker_port: u16,
    },
    Refused {
        reason: String,
    },
    Files(Vec<String>),
}
