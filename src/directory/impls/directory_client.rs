use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use crate::directory::structs::directory_client::DirectoryClient;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::piece_manifest::PieceManifest;
use crate::wire::enums::directory_request::DirectoryRequest;
use crate::wire::enums::directory_response::DirectoryResponse;
use crate::wire::errors::WireError;
use crate::wire::wire::{recv_message, send_message};

impl DirectoryClient {
    pub fn new(address: SocketAddr, timeout: Duration) -> DirectoryClient {
        DirectoryClient { address, timeout }
    }

    async fn exchange(&self, request: &DirectoryRequest) -> Result<DirectoryResponse, TrackerError> {
        let call = async {
            let mut stream = TcpStream::connect(self.address).await?;
            send_message(&mut stream, request).await?;
            let response: DirectoryResponse = recv_message(&mut stream).await?;
            Ok::<DirectoryResponse, WireError>(response)
        };
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(TrackerError::Wire(WireError::Unexpected(format!("directory {} did not answer in time", self.address)))),
        }
    }

    pub async fn lookup(&self, file_name: &str) -> Result<Option<PieceManifest>, TrackerError> {
        match self.exchange(&DirectoryRequest::Lookup { file_name: file_name.to_string() }).await? {
            DirectoryResponse::Manifest(manifest) => Ok(manifest),
            other => Err(unexpected(other)),
        }
    }

    /// Publishes `manifest`; the directory pairs this connection's address
    /// with `listen_port` to identify the seeder.
    pub async fn publish(&self, manifest: &PieceManifest, listen_port: u16) -> Result<u16, TrackerError> {
        let request = DirectoryRequest::Publish {
            manifest: manifest.clone(),
            listen_port,
        };
        match self.exchange(&request).await? {
            DirectoryResponse::Published { tracker_port } => Ok(tracker_port),
            DirectoryResponse::Refused { reason } => Err(TrackerError::Refused(reason)),
            other => Err(unexpected(other)),
        }
    }

    pub async fn list_files(&self) -> Result<Vec<String>, TrackerError> {
        match self.exchange(&DirectoryRequest::ListFiles).await? {
            DirectoryResponse::Files(files) => Ok(files),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(response: DirectoryResponse) -> TrackerError {
    TrackerError::Wire(WireError::Unexpected(format!("{response:?}")))
}
