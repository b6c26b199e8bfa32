use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use torrust_swarm::common::common::setup_logging;
use torrust_swarm::common::structs::log_sink::LogSink;
use torrust_swarm::config::structs::configuration::Configuration;
use torrust_swarm::directory::structs::tracker_host::TrackerHost;
use torrust_swarm::peer::structs::swarm_peer::SwarmPeer;
use torrust_swarm::structs::{Cli, Command};

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown signal handlers");
                    exit(1);
                }
            };

            let succeeded = match args.command {
                Command::Server => run_server(&config, tokio_shutdown).await,
                Command::Seed { file } => run_seed(&config, &file, tokio_shutdown).await,
                Command::Fetch { name } => run_fetch(&config, &name, tokio_shutdown).await,
            };

            if !succeeded {
                exit(1);
            }
            Ok(())
        })
}

async fn run_server(config: &Configuration, tokio_shutdown: Shutdown) -> bool
{
    let host = match TrackerHost::start(&config.tracker, Arc::new(LogSink::new("TRACKER"))) {
        Ok(host) => host,
        Err(error) => {
            error!("[BOOT] Unable to start the tracker: {error}");
            return false;
        }
    };

    let deadlocks_handler = tokio_shutdown.clone();
    tokio::spawn(async move {
        info!("[BOOT] Starting thread for deadlocks...");
        let mut interval = tokio::time::interval(Duration::from_secs(30));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let deadlocks = deadlock::check_deadlock();
                    if !deadlocks.is_empty() {
                        info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                        for (i, threads) in deadlocks.iter().enumerate() {
                            info!("[DEADLOCK] #{i}");
                            for t in threads {
                                info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                info!("[DEADLOCK] {:#?}", t.backtrace());
                            }
                        }
                    }
                }
                _ = deadlocks_handler.handle() => {
                    info!("[BOOT] Shutting down thread for deadlocks...");
                    return;
                }
            }
        }
    });

    info!("[BOOT] Directory listening on {}", host.directory_address);
    tokio_shutdown.handle().await;
    info!("Shutdown request received, shutting down...");
    host.stop().await;
    info!("Server shutting down completed");
    true
}

async fn run_seed(config: &Configuration, file: &str, tokio_shutdown: Shutdown) -> bool
{
    let peer = match SwarmPeer::start(&config.peer, Arc::new(LogSink::new("PEER"))).await {
        Ok(peer) => peer,
        Err(error) => {
            error!("[BOOT] Unable to start the peer: {error}");
            return false;
        }
    };

    let published = match peer.publish(file).await {
        Ok(manifest) => {
            info!("[SEED] Seeding {} ({} bytes) on upload port {}", manifest.file_name, manifest.file_length, peer.upload_port);
            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");
            true
        }
        Err(error) => {
            error!("[SEED] Unable to publish {file}: {error}");
            false
        }
    };

    peer.shutdown().await;
    published
}

async fn run_fetch(config: &Configuration, name: &str, tokio_shutdown: Shutdown) -> bool
{
    let peer = match SwarmPeer::start(&config.peer, Arc::new(LogSink::new("PEER"))).await {
        Ok(peer) => peer,
        Err(error) => {
            error!("[BOOT] Unable to start the peer: {error}");
            return false;
        }
    };

    let fetched = match peer.lookup(name).await {
        Ok(Some(manifest)) => match peer.retrieve(manifest).await {
            Ok(download) => {
                tokio::select! {
                    joined = download => match joined {
                        Ok(Ok(path)) => {
                            info!("[FETCH] {} retrieved to {}", name, path.display());
                            true
                        }
                        Ok(Err(error)) => {
                            error!("[FETCH] Retrieving {name} failed: {error}");
                            false
                        }
                        Err(error) => {
                            error!("[FETCH] Download task for {name} ended abnormally: {error}");
                            false
                        }
                    },
                    _ = tokio_shutdown.handle() => {
                        info!("Shutdown request received, leaving the swarm of {name}...");
                        peer.leave_swarm(name);
                        false
                    }
                }
            }
            Err(error) => {
                error!("[FETCH] Unable to retrieve {name}: {error}");
                false
            }
        },
        Ok(None) => {
            error!("[FETCH] {name} is not published");
            false
        }
        Err(error) => {
            error!("[FETCH] Lookup of {name} failed: {error}");
            false
        }
    };

    peer.shutdown().await;
    fetched
}
