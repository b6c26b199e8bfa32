use std::sync::Arc;
use crate::peer::structs::piece_selector::PieceSelector;

/// Offsets granted to one worker and not stored yet.
///
/// Whatever is left when the value is dropped goes back to the selector, so a
/// failed, aborted or cancelled worker never keeps offsets in flight.
pub struct InFlightPieces {
    pub(crate) selector: Arc<PieceSelector>,
    pub(crate) offsets: Vec<u64>,
}
