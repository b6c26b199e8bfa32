#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LivenessFlag {
    /// A keep-alive (or the join itself) arrived during the current window.
    Alive,
    /// The last sweep found no keep-alive; the next one evicts.
    Dead,
}
