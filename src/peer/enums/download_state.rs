#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum DownloadState {
    /// Joining the swarm and querying its members.
    Discovering,
    /// Workers of the current round are running.
    Exchanging,
    /// Every piece is owned and the file has been assembled.
    Complete,
    /// Interrupted, denied, or out of candidates with pieces missing.
    Aborted,
}
