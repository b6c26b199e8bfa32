/// Requests accepted by the control-plane tracker.
pub mod control_request;

/// Replies sent by the control-plane tracker.
pub mod control_response;

/// Requests accepted by the directory service.
pub mod directory_request;

/// Replies sent by the directory service.
pub mod directory_response;
