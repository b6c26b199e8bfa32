// Performance benchmarks for Torrust-Swarm
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngExt;
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use torrust_swarm::common::structs::log_sink::LogSink;
use torrust_swarm::common::traits::output_sink::OutputSink;
use torrust_swarm::peer::structs::piece_selector::PieceSelector;
use torrust_swarm::tracker::structs::peer_address::PeerAddress;
use torrust_swarm::tracker::structs::piece_manifest::PieceManifest;
use torrust_swarm::tracker::structs::swarm_registry::SwarmRegistry;
use torrust_swarm::tracker::traits::swarm_observer::SwarmObserver;

struct IgnoreEmptied;

impl SwarmObserver for IgnoreEmptied {
    fn swarm_emptied(&self, _file_name: &str) {}
}

fn random_peer() -> PeerAddress {
    let mut rng = rand::rng();
    let octets: [u8; 4] = rng.random();
    PeerAddress::new(IpAddr::V4(Ipv4Addr::from(octets)), rng.random_range(1024..65535))
}

fn create_registry(observer: &Arc<dyn SwarmObserver>) -> SwarmRegistry {
    let sink: Arc<dyn OutputSink> = Arc::new(LogSink::new("BENCH"));
    SwarmRegistry::new(Arc::downgrade(observer), sink)
}

fn bench_add_member(c: &mut Criterion) {
    let observer: Arc<dyn SwarmObserver> = Arc::new(IgnoreEmptied);
    let registry = create_registry(&observer);
    registry.add_new_swarm("a.bin", random_peer()).unwrap();

    c.bench_function("add_member", |b| {
        b.iter(|| {
            black_box(registry.add_member("a.bin", random_peer()));
        });
    });
}

fn bench_members_of(c: &mut Criterion) {
    let observer: Arc<dyn SwarmObserver> = Arc::new(IgnoreEmptied);
    let mut group = c.benchmark_group("members_of");

    for size in [10, 100, 1000].iter() {
        let registry = create_registry(&observer);
        registry.add_new_swarm("a.bin", random_peer()).unwrap();
        for _ in 1..*size {
            registry.add_member("a.bin", random_peer());
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(registry.members_of("a.bin"));
            });
        });
    }

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let observer: Arc<dyn SwarmObserver> = Arc::new(IgnoreEmptied);
    let registry = create_registry(&observer);
    for index in 0..10 {
        let file_name = format!("file-{index}.bin");
        registry.add_new_swarm(&file_name, random_peer()).unwrap();
        for _ in 0..100 {
            registry.add_member(&file_name, random_peer());
        }
    }
    let members: Vec<(String, PeerAddress)> = registry
        .file_names()
        .into_iter()
        .flat_map(|file_name| {
            let peers = registry.members_of(&file_name).unwrap_or_default();
            peers.into_iter().map(move |peer| (file_name.clone(), peer))
        })
        .collect();

    c.bench_function("sweep_with_refresh", |b| {
        b.iter(|| {
            for (file_name, peer) in &members {
                registry.refresh(file_name, peer);
            }
            black_box(registry.sweep());
        });
    });
}

fn bench_choose_pieces(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_pieces");

    for pieces in [16u64, 256, 4096].iter() {
        let offsets: Vec<u64> = (0..*pieces).map(|piece| piece * 4096).collect();
        let owned: Vec<u64> = offsets.iter().copied().step_by(3).collect();

        group.bench_with_input(BenchmarkId::from_parameter(pieces), &offsets, |b, offsets| {
            b.iter(|| {
                let selector = PieceSelector::new("a.bin", owned.iter().copied());
                let first = random_peer();
                let second = random_peer();
                selector.record_advertised(first, offsets);
                selector.record_advertised(second, offsets);
                black_box(selector.choose_pieces(first).unwrap());
                black_box(selector.choose_pieces(second).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_manifest(c: &mut Criterion) {
    let mut rng = rand::rng();
    let data: Vec<u8> = (0..1024 * 1024).map(|_| rng.random()).collect();

    c.bench_function("manifest_from_1mib", |b| {
        b.iter(|| {
            black_box(PieceManifest::from_bytes("a.bin", &data).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_add_member,
    bench_members_of,
    bench_sweep,
    bench_choose_pieces,
    bench_manifest
);
criterion_main!(benches);
