use parking_lot::Mutex;
use crate::peer::structs::selector_state::SelectorState;

/// Decides which pieces to request from which uploader for one file.
///
/// An offset handed out by `choose_pieces` stays in flight until it is either
/// stored (`mark_owned`) or given back (`release`), so no two workers request
/// the same offset at the same time.
pub struct PieceSelector {
    pub file_name: String,
    pub(crate) state: Mutex<SelectorState>,
}
