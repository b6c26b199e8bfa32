pub mod directory_client;
pub mod directory_server;
pub mod torrent_directory;
pub mod tracker_host;
