use std::sync::Arc;
use crate::peer::structs::in_flight_pieces::InFlightPieces;
use crate::peer::structs::piece_selector::PieceSelector;

impl InFlightPieces {
    pub fn new(selector: Arc<PieceSelector>, offsets: Vec<u64>) -> InFlightPieces {
        InFlightPieces { selector, offsets }
    }

    /// Marks `offset` stored; it will not be released on drop.
    pub fn stored(&mut self, offset: u64) {
        self.offsets.retain(|pending| *pending != offset);
        self.selector.mark_owned(offset);
    }

    pub fn remaining(&self) -> &[u64] {
        &self.offsets
    }
}

impl Drop for InFlightPieces {
    fn drop(&mut self) {
        if !self.offsets.is_empty() {
            self.selector.release(&self.offsets);
        }
    }
}
