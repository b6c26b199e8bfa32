use parking_lot::Mutex;
use crate::peer::errors::PeerError;
use crate::peer::structs::piece_selector::PieceSelector;
use crate::peer::structs::selector_state::SelectorState;
use crate::tracker::structs::peer_address::PeerAddress;

impl PieceSelector {
    pub fn new(file_name: &str, owned: impl IntoIterator<Item = u64>) -> PieceSelector {
        PieceSelector {
            file_name: file_name.to_string(),
            state: Mutex::new(SelectorState {
                owned: owned.into_iter().collect(),
                ..SelectorState::default()
            }),
        }
    }

    /// Merges `offsets` into what `peer` advertises. Repeated offsets are ignored.
    pub fn record_advertised(&self, peer: PeerAddress, offsets: &[u64]) {
        self.state.lock()
            .advertised
            .entry(peer)
            .or_default()
            .extend(offsets.iter().copied());
    }

    /// Offsets to request from `peer`: advertised by it, neither owned nor in
    /// flight. The result is marked in flight before it is returned.
    #[tracing::instrument(level = "debug", skip(self), fields(file_name = %self.file_name))]
    pub fn choose_pieces(&self, peer: PeerAddress) -> Result<Vec<u64>, PeerError> {
        let mut lock = self.state.lock();
        let state = &mut *lock;
        let advertised = state.advertised
            .get(&peer)
            .ok_or(PeerError::NotAdvertised(peer))?;

        let chosen: Vec<u64> = advertised
            .iter()
            .filter(|offset| !state.owned.contains(offset) && !state.in_flight.contains(offset))
            .copied()
            .collect();
        state.in_flight.extend(chosen.iter().copied());
        Ok(chosen)
    }

    /// Records a stored piece.
    pub fn mark_owned(&self, offset: u64) {
        let mut state = self.state.lock();
        state.in_flight.remove(&offset);
        state.owned.insert(offset);
    }

    /// Returns offsets that were granted but never stored.
    pub fn release(&self, offsets: &[u64]) {
        let mut state = self.state.lock();
        for offset in offsets {
            state.in_flight.remove(offset);
        }
    }

    pub fn owned_count(&self) -> usize {
        self.state.lock().owned.len()
    }

    pub fn in_flight(&self) -> Vec<u64> {
        self.state.lock().in_flight.iter().copied().collect()
    }

    pub fn is_owned(&self, offset: u64) -> bool {
        self.state.lock().owned.contains(&offset)
    }
}
