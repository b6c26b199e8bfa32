mod common;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use torrust_swarm::directory::structs::directory_client::DirectoryClient;
use torrust_swarm::peer::errors::PeerError;
use torrust_swarm::peer::structs::tracker_client::TrackerClient;
use torrust_swarm::tracker::structs::peer_address::PeerAddress;
use torrust_swarm::tracker::structs::piece_manifest::PieceManifest;

const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

#[tokio::test]
async fn test_seed_and_fetch_two_pieces() {
    let host = common::create_test_host(3600);
    let seeder_root = common::create_temp_dir();
    let data = common::random_bytes(4096 + 1000);
    let seeder = common::create_test_seeder(&host, seeder_root.path(), "a.bin", &data).await;

    let published = seeder.publish("a.bin").await.expect("seeder publishes");
    assert_eq!(published.pieces_count(), 2);
    assert!(published.tracker_port.is_some());
    assert_eq!(seeder.swarms(), vec![String::from("a.bin")]);

    let root = common::create_temp_dir();
    let downloader = common::create_test_peer(&host, root.path()).await;
    let manifest = downloader.lookup("a.bin").await.unwrap().expect("a.bin is published");
    assert_eq!(manifest, published);

    let path = downloader.retrieve(manifest).await.unwrap().await.unwrap().expect("download completes");
    assert_eq!(tokio::fs::read(&path).await.unwrap(), data, "assembled file is byte-identical");
    assert_eq!(downloader.owned().await, vec![String::from("a.bin")]);
    assert!(downloader.banned_peers().is_empty());
    assert_eq!(downloader.open_connections(), 0);

    let registry = host.allocator.registry_of("a.bin").unwrap();
    let members = registry.members_of("a.bin").unwrap();
    assert!(members.contains(&PeerAddress::new(LOCALHOST, seeder.upload_port)));
    assert!(members.contains(&PeerAddress::new(LOCALHOST, downloader.upload_port)), "downloaders join the swarm");

    downloader.shutdown().await;
    seeder.shutdown().await;
    host.stop().await;
}

#[tokio::test]
async fn test_corrupt_uploader_is_banned() {
    let host = common::create_test_host(3600);
    let data = common::random_bytes(4096 * 2 + 10);

    let corrupt_root = common::create_temp_dir();
    let corrupt = common::create_test_seeder(&host, corrupt_root.path(), "a.bin", &data).await;
    corrupt.publish("a.bin").await.unwrap();
    let mut damaged = data.clone();
    damaged[100] ^= 0x80;
    tokio::fs::write(corrupt_root.path().join("complete.dir").join("a.bin"), &damaged).await.unwrap();

    let root = common::create_temp_dir();
    let downloader = common::create_test_peer(&host, root.path()).await;
    let manifest = downloader.lookup("a.bin").await.unwrap().unwrap();

    let first = downloader.retrieve(manifest.clone()).await.unwrap().await.unwrap();
    assert!(matches!(first, Err(PeerError::Incomplete { missing: 3, .. })));
    let corrupt_address = PeerAddress::new(LOCALHOST, corrupt.upload_port);
    assert_eq!(downloader.banned_peers(), vec![corrupt_address]);
    assert!(downloader.owned().await.is_empty(), "the corrupt piece is not persisted");

    let honest_root = common::create_temp_dir();
    let honest = common::create_test_seeder(&host, honest_root.path(), "a.bin", &data).await;
    honest.publish("a.bin").await.expect("same content joins the existing swarm");

    let path = downloader.retrieve(manifest).await.unwrap().await.unwrap().expect("banned peer is skipped");
    assert_eq!(tokio::fs::read(&path).await.unwrap(), data);

    downloader.shutdown().await;
    honest.shutdown().await;
    corrupt.shutdown().await;
    host.stop().await;
}

#[tokio::test]
async fn test_eleven_files_use_two_shards() {
    let host = common::create_test_host(3600);
    let client = DirectoryClient::new(host.directory_address, Duration::from_secs(5));

    let mut ports = Vec::new();
    for index in 0..11u8 {
        let manifest = PieceManifest::from_bytes(&format!("file-{index}.bin"), &[index; 100]).unwrap();
        ports.push(client.publish(&manifest, 5700).await.unwrap());
    }

    assert!(host.allocator.shards_count() >= 2);
    assert!(host.allocator.shard_loads().iter().all(|(_, swarms)| *swarms <= 10));
    assert_eq!(ports.iter().filter(|port| **port == ports[0]).count(), 10);
    assert_eq!(client.list_files().await.unwrap().len(), 11);
    host.stop().await;
}

#[tokio::test]
async fn test_unknown_file_join_denied_and_query_absent() {
    let host = common::create_test_host(3600);
    let client = DirectoryClient::new(host.directory_address, Duration::from_secs(5));
    let manifest = PieceManifest::from_bytes("a.bin", b"payload").unwrap();
    let port = client.publish(&manifest, 5700).await.unwrap();

    let tracker = TrackerClient::new(SocketAddr::new(LOCALHOST, port), Duration::from_secs(5));
    assert!(matches!(tracker.join_swarm("missing.bin", 5701).await, Err(PeerError::JoinDenied(_))));
    let (members, local_ip) = tracker.query("missing.bin").await.unwrap();
    assert_eq!(members, None);
    assert_eq!(local_ip, LOCALHOST);

    let (members, _) = tracker.query("a.bin").await.unwrap();
    assert_eq!(members, Some(vec![PeerAddress::new(LOCALHOST, 5700)]));
    host.stop().await;
}

#[tokio::test]
async fn test_silent_seeder_is_evicted_and_file_withdrawn() {
    let host = common::create_test_host(1);
    let client = DirectoryClient::new(host.directory_address, Duration::from_secs(5));
    let manifest = PieceManifest::from_bytes("a.bin", b"payload").unwrap();
    client.publish(&manifest, 5700).await.unwrap();
    assert_eq!(host.allocator.shards_count(), 1);

    let directory = host.directory.clone();
    assert!(common::eventually(Duration::from_secs(10), || directory.lookup("a.bin").is_none()).await);
    assert_eq!(host.allocator.shards_count(), 0, "the idle shard is released");
    assert_eq!(client.lookup("a.bin").await.unwrap(), None);
    host.stop().await;
}

#[tokio::test]
async fn test_keep_alives_hold_membership() {
    let host = common::create_test_host(2);
    let root = common::create_temp_dir();
    let seeder = common::create_test_seeder(&host, root.path(), "a.bin", b"still here").await;
    seeder.publish("a.bin").await.unwrap();

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(host.directory.lookup("a.bin").is_some(), "keep-alives keep the seeder alive");

    assert!(seeder.leave_swarm("a.bin"));
    let directory = host.directory.clone();
    assert!(common::eventually(Duration::from_secs(10), || directory.lookup("a.bin").is_none()).await);

    seeder.shutdown().await;
    host.stop().await;
}

#[tokio::test]
async fn test_publish_requires_complete_copy() {
    let host = common::create_test_host(3600);
    let root = common::create_temp_dir();
    let peer = common::create_test_peer(&host, root.path()).await;

    assert!(matches!(peer.publish("absent.bin").await, Err(PeerError::NotSeeder(_))));
    assert_eq!(peer.lookup("absent.bin").await.unwrap(), None);

    let unpublished = PieceManifest::from_bytes("absent.bin", b"data").unwrap();
    assert!(matches!(peer.retrieve(unpublished).await, Err(PeerError::NotPublished(_))));

    peer.shutdown().await;
    host.stop().await;
}
