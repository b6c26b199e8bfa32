use std::net::SocketAddr;
use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::watch;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(path) = &config.log_file {
        let file = fern::log_file(path)
            .map_err(|e| CustomError::new(&format!("Unable to open log file {path}: {e}")))?;
        dispatch = dispatch.chain(file);
    }

    if dispatch.apply().is_err() {
        return Err(CustomError::new("Failed to initialize logging."));
    }
    info!("logging initialized.");
    Ok(())
}

/// Sleeps for `timeout` unless the shutdown flag flips first.
///
/// Returns `true` when the caller should stop. A dropped sender counts as a shutdown.
pub async fn shutdown_waiting(timeout: Duration, rx: &mut watch::Receiver<bool>) -> bool
{
    if *rx.borrow() {
        return true;
    }
    tokio::select! {
        _ = tokio::time::sleep(timeout) => false,
        changed = rx.changed() => {
            changed.is_err() || *rx.borrow()
        }
    }
}

/// Binds a listening TCP socket. Must be called from within a tokio runtime.
pub fn bind_tcp_listener(address: SocketAddr) -> std::io::Result<TcpListener>
{
    let domain = if address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&address.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Binds a UDP socket without address reuse, so two shards can never share a port.
/// Must be called from within a tokio runtime.
pub fn bind_udp_socket(address: SocketAddr) -> std::io::Result<UdpSocket>
{
    let domain = if address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    socket.bind(&address.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
