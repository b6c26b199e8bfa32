/// Per-member liveness state.
pub mod liveness_flag;
