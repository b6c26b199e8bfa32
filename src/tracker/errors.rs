use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("a swarm for file {0} already exists")]
    SwarmExists(String),

    #[error("there is no swarm associated with file {0}")]
    UnknownFile(String),

    #[error("no free tracker port left (base port {0})")]
    PortSpaceExhausted(u16),

    #[error("unable to bind tracker port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("consistency fault: {0}")]
    ConsistencyFault(String),

    #[error("manifest error: {0}")]
    Manifest(String),

    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("request refused: {0}")]
    Refused(String),

    #[error("wire error: {0}")]
    Wire(#[from] crate::wire::errors::WireError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
