pub mod ban_list;
pub mod connection_gauge;
pub mod connection_permit;
pub mod download_coordinator;
pub mod download_state;
pub mod exchange_worker;
pub mod in_flight_pieces;
pub mod keep_alive_sender;
pub mod piece_selector;
pub mod swarm_peer;
pub mod tracker_client;
pub mod upload_server;
