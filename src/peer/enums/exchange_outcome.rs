#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ExchangeOutcome {
    /// Every chosen piece was received, verified and stored.
    Completed {
        received: usize,
    },
    /// The uploader could not be reached.
    ConnectFailed(String),
    /// The piece at `offset` failed verification; the uploader is banned.
    Corrupted {
        offset: u64,
        received: usize,
    },
    /// I/O or protocol fault after connecting.
    Failed(String),
}
