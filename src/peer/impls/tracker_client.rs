use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use crate::peer::errors::PeerError;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::wire::enums::control_request::ControlRequest;
use crate::wire::enums::control_response::ControlResponse;
use crate::wire::errors::WireError;
use crate::wire::wire::{recv_message, send_message};

impl TrackerClient {
    pub fn new(address: SocketAddr, timeout: Duration) -> TrackerClient {
        TrackerClient { address, timeout }
    }

    /// Sends one request and returns the reply together with the local IP
    /// of the connection, which is the address the tracker sees for us.
    async fn exchange(&self, request: &ControlRequest) -> Result<(ControlResponse, IpAddr), PeerError> {
        let call = async {
            let mut stream = TcpStream::connect(self.address).await.map_err(|error| PeerError::Connect {
                address: self.address.to_string(),
                reason: error.to_string(),
            })?;
            let local_ip = stream.local_addr()?.ip();
            send_message(&mut stream, request).await?;
            let response: ControlResponse = recv_message(&mut stream).await?;
            Ok::<(ControlResponse, IpAddr), PeerError>((response, local_ip))
        };
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| PeerError::Connect {
                address: self.address.to_string(),
                reason: String::from("tracker did not answer in time"),
            })?
    }

    pub async fn join_swarm(&self, file_name: &str, listen_port: u16) -> Result<(), PeerError> {
        let request = ControlRequest::JoinSwarm {
            file_name: file_name.to_string(),
            listen_port,
        };
        match self.exchange(&request).await? {
            (ControlResponse::Allowed, _) => Ok(()),
            (ControlResponse::Denied, _) => Err(PeerError::JoinDenied(file_name.to_string())),
            (other, _) => Err(PeerError::Wire(WireError::Unexpected(format!("{other:?}")))),
        }
    }

    /// Current members of the swarm (`None` if the tracker has no such swarm)
    /// and our own IP as seen by the tracker.
    pub async fn query(&self, file_name: &str) -> Result<(Option<Vec<PeerAddress>>, IpAddr), PeerError> {
        let request = ControlRequest::Query {
            file_name: file_name.to_string(),
        };
        match self.exchange(&request).await? {
            (ControlResponse::Members(members), local_ip) => Ok((members, local_ip)),
            (other, _) => Err(PeerError::Wire(WireError::Unexpected(format!("{other:?}")))),
        }
    }
}
