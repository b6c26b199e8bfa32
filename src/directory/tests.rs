#[cfg(test)]
mod directory_tests {
    use rand::RngExt;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;
    use std::time::Duration;
    use crate::common::traits::output_sink::{MockOutputSink, OutputSink};
    use crate::config::structs::configuration::Configuration;
    use crate::config::structs::tracker_config::TrackerConfig;
    use crate::directory::structs::directory_client::DirectoryClient;
    use crate::directory::structs::directory_server::DirectoryServer;
    use crate::directory::structs::torrent_directory::TorrentDirectory;
    use crate::directory::structs::tracker_host::TrackerHost;
    use crate::tracker::errors::TrackerError;
    use crate::tracker::structs::peer_address::PeerAddress;
    use crate::tracker::structs::piece_manifest::PieceManifest;
    use crate::tracker::structs::shard_allocator::ShardAllocator;
    use crate::wire::enums::directory_request::DirectoryRequest;
    use crate::wire::enums::directory_response::DirectoryResponse;

    fn quiet_sink() -> Arc<dyn OutputSink> {
        let mut sink = MockOutputSink::new();
        sink.expect_print().return_const(());
        sink.expect_print_err().return_const(());
        Arc::new(sink)
    }

    fn tracker_config() -> TrackerConfig {
        let mut rng = rand::rng();
        let mut config = Configuration::init().tracker;
        config.directory_bind_address = String::from("127.0.0.1:0");
        config.tracker_bind_ip = String::from("127.0.0.1");
        config.shard_base_port = rng.random_range(20000..60000);
        config.sweep_interval = 3600;
        config
    }

    fn directory() -> Arc<TorrentDirectory> {
        let allocator = ShardAllocator::new(&tracker_config(), quiet_sink()).unwrap();
        TorrentDirectory::new(allocator, quiet_sink())
    }

    fn seeder(last: u8) -> PeerAddress {
        PeerAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, last)), 5700)
    }

    #[tokio::test]
    async fn test_publish_stamps_tracker_port() {
        let directory = directory();
        let manifest = PieceManifest::from_bytes("a.bin", &[1u8; 5096]).unwrap();

        let port = directory.publish(manifest, seeder(1)).await.unwrap();
        let stored = directory.lookup("a.bin").unwrap();
        assert_eq!(stored.tracker_port, Some(port));
        assert_eq!(stored.pieces_count(), 2);
        assert_eq!(directory.file_names(), vec![String::from("a.bin")]);
        assert!(directory.lookup("b.bin").is_none());
        directory.allocator.shutdown_all().await;
    }

    #[tokio::test]
    async fn test_publish_existing_adds_seeder() {
        let directory = directory();
        let manifest = PieceManifest::from_bytes("a.bin", &[1u8; 100]).unwrap();

        let first = directory.publish(manifest.clone(), seeder(1)).await.unwrap();
        let second = directory.publish(manifest, seeder(2)).await.unwrap();
        assert_eq!(first, second);

        let registry = directory.allocator.registry_of("a.bin").unwrap();
        assert_eq!(registry.members_of("a.bin"), Some(vec![seeder(1), seeder(2)]));
        assert_eq!(directory.all_peers().len(), 2);
        directory.allocator.shutdown_all().await;
    }

    #[tokio::test]
    async fn test_publish_different_content_refused() {
        let directory = directory();
        directory.publish(PieceManifest::from_bytes("a.bin", &[1u8; 100]).unwrap(), seeder(1)).await.unwrap();

        let other = PieceManifest::from_bytes("a.bin", &[2u8; 100]).unwrap();
        assert!(matches!(directory.publish(other, seeder(2)).await, Err(TrackerError::Refused(_))));
        directory.allocator.shutdown_all().await;
    }

    #[tokio::test]
    async fn test_empty_swarm_withdraws_manifest() {
        let directory = directory();
        directory.publish(PieceManifest::from_bytes("a.bin", &[1u8; 100]).unwrap(), seeder(1)).await.unwrap();

        let registry = directory.allocator.registry_of("a.bin").unwrap();
        registry.sweep();
        assert!(directory.lookup("a.bin").is_some(), "one missed window only marks the seeder dead");
        registry.sweep();

        assert!(directory.lookup("a.bin").is_none());
        assert!(directory.file_names().is_empty());
        assert_eq!(directory.allocator.shards_count(), 0);

        let port = directory.publish(PieceManifest::from_bytes("a.bin", &[1u8; 100]).unwrap(), seeder(2)).await;
        assert!(port.is_ok(), "the file can be published again");
        directory.allocator.shutdown_all().await;
    }

    #[tokio::test]
    async fn test_handle_request_identifies_seeder_by_connection() {
        let directory = directory();
        let sink = quiet_sink();
        let remote = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20));
        let manifest = PieceManifest::from_bytes("a.bin", b"hello").unwrap();

        let response = DirectoryServer::handle_request(&directory, sink.as_ref(), remote, DirectoryRequest::Publish { manifest, listen_port: 5711 }).await;
        assert!(matches!(response, DirectoryResponse::Published { .. }));

        let registry = directory.allocator.registry_of("a.bin").unwrap();
        assert_eq!(registry.members_of("a.bin"), Some(vec![PeerAddress::new(remote, 5711)]));

        let files = DirectoryServer::handle_request(&directory, sink.as_ref(), remote, DirectoryRequest::ListFiles).await;
        assert_eq!(files, DirectoryResponse::Files(vec![String::from("a.bin")]));

        let broken = PieceManifest {
            file_name: String::from("b.bin"),
            file_length: 10_000,
            piece_hashes: Vec::new(),
            tracker_port: None,
        };
        let refused = DirectoryServer::handle_request(&directory, sink.as_ref(), remote, DirectoryRequest::Publish { manifest: broken, listen_port: 5711 }).await;
        assert!(matches!(refused, DirectoryResponse::Refused { .. }));
        directory.allocator.shutdown_all().await;
    }

    #[tokio::test]
    async fn test_client_against_running_host() {
        let host = TrackerHost::start(&tracker_config(), quiet_sink()).unwrap();
        let client = DirectoryClient::new(host.directory_address, Duration::from_secs(5));
        let manifest = PieceManifest::from_bytes("a.bin", &[9u8; 5000]).unwrap();

        assert_eq!(client.lookup("a.bin").await.unwrap(), None);
        let port = client.publish(&manifest, 5700).await.unwrap();

        let found = client.lookup("a.bin").await.unwrap().unwrap();
        assert_eq!(found.tracker_port, Some(port));
        assert_eq!(found.piece_hashes, manifest.piece_hashes);
        assert_eq!(client.list_files().await.unwrap(), vec![String::from("a.bin")]);
        host.stop().await;
    }
}
