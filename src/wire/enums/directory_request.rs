use serde::{Deserialize, Serialize};
use crate::tracker::structs::piece_manifest::PieceManifest;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub enum DirectoryRequest {
    Lookup {
        file_name: String,
    },
    /// The seeder is the requesting address paired with `listen_port`.
    Publish {
        manifest: PieceManifest,
        listen_port: u16,
    },
    ListFiles,
}
