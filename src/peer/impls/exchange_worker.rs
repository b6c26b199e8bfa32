use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use crate::common::traits::output_sink::OutputSink;
use crate::peer::enums::exchange_outcome::ExchangeOutcome;
use crate::peer::errors::PeerError;
use crate::peer::structs::ban_list::BanList;
use crate::peer::structs::connection_permit::ConnectionPermit;
use crate::peer::structs::exchange_worker::ExchangeWorker;
use crate::peer::structs::in_flight_pieces::InFlightPieces;
use crate::peer::structs::piece_selector::PieceSelector;
use crate::storage::traits::piece_storage::PieceStorage;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::piece_manifest::PieceManifest;
use crate::wire::wire::{read_frame, recv_message, send_message};

impl ExchangeWorker {
    pub fn new(remote: PeerAddress, manifest: Arc<PieceManifest>, selector: Arc<PieceSelector>, storage: Arc<dyn PieceStorage>, banned: Arc<BanList>, connect_timeout: Duration, sink: Arc<dyn OutputSink>) -> ExchangeWorker {
        ExchangeWorker {
            remote,
            manifest,
            selector,
            storage,
            banned,
            connect_timeout,
            sink,
        }
    }

    /// Runs one exchange. The permit is held for as long as the connection
    /// may be open, including when the task is aborted.
    pub async fn run(self, _permit: ConnectionPermit) -> ExchangeOutcome {
        let file_name = self.manifest.file_name.as_str();
        let mut stream = match tokio::time::timeout(self.connect_timeout, TcpStream::connect(self.remote.socket_addr())).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(error)) => {
                self.sink.print_err(&format!("unable to connect to peer {} for {}: {}", self.remote, file_name, error));
                return ExchangeOutcome::ConnectFailed(error.to_string());
            }
            Err(_) => {
                self.sink.print_err(&format!("unable to connect to peer {} for {}: timed out", self.remote, file_name));
                return ExchangeOutcome::ConnectFailed(String::from("connect timed out"));
            }
        };

        match self.exchange(&mut stream).await {
            Ok(outcome) => outcome,
            Err(error) => {
                self.sink.print_err(&format!("exchange of {} with peer {} failed: {}", file_name, self.remote, error));
                ExchangeOutcome::Failed(error.to_string())
            }
        }
    }

    async fn exchange(&self, stream: &mut TcpStream) -> Result<ExchangeOutcome, PeerError> {
        let file_name = self.manifest.file_name.as_str();
        send_message(stream, &file_name).await?;

        let advertised: Vec<u64> = recv_message(stream).await?;
        let valid: Vec<u64> = advertised
            .into_iter()
            .filter(|offset| self.manifest.is_valid_offset(*offset))
            .collect();
        self.selector.record_advertised(self.remote, &valid);

        let chosen = self.selector.choose_pieces(self.remote)?;
        let mut pending = InFlightPieces::new(self.selector.clone(), chosen.clone());
        send_message(stream, &chosen).await?;
        debug!("[EXCHANGE] {} advertises {} pieces of {}, requesting {}", self.remote, valid.len(), file_name, chosen.len());

        let mut received = 0usize;
        for offset in chosen {
            let piece = read_frame(stream).await?;
            if !self.manifest.hashes_match(offset, &piece) {
                self.banned.ban(self.remote);
                self.sink.print_err(&format!(
                    "piece {} of {} from peer {} does not match its hash, banning peer ({} pieces not received)",
                    offset, file_name, self.remote, pending.remaining().len()
                ));
                return Ok(ExchangeOutcome::Corrupted { offset, received });
            }

            self.storage.store_piece(file_name, offset, &piece).await?;
            pending.stored(offset);
            received += 1;
            self.sink.print(&format!("downloaded piece {} of {} from peer {}", offset, file_name, self.remote));
        }

        Ok(ExchangeOutcome::Completed { received })
    }
}
