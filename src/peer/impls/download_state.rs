use std::fmt;
use std::fmt::Formatter;
use crate::peer::enums::download_state::DownloadState;

impl fmt::Display for DownloadState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DownloadState::Discovering => write!(f, "discovering"),
            DownloadState::Exchanging => write!(f, "exchanging"),
            DownloadState::Complete => write!(f, "complete"),
            DownloadState::Aborted => write!(f, "aborted"),
        }
    }
}
