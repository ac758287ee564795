use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio::sync::watch;
use tokio_shutdown::Shutdown;
use swarm_tracker::common::common::{setup_logging, shutdown_waiting};
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::database::structs::database_connector::DatabaseConnector;
use swarm_tracker::http::http::http_service;
use swarm_tracker::stats::structs::stats_atomics::StatsAtomics;
use swarm_tracker::structs::Cli;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = match config.sentry_config.enabled {
        true => Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }))),
        false => None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let connector = match DatabaseConnector::new(config.clone(), args.create_database).await {
                Ok(connector) => connector,
                Err(error) => {
                    error!("[BOOT] Unable to open the {:?} database at {}: {}", config.database.engine, config.database.path, error);
                    exit(1);
                }
            };
            let storage = connector.backend();

            match storage.ping().await {
                Ok(true) => {}
                Ok(false) | Err(_) => {
                    error!("[BOOT] The {:?} database does not answer, exiting...", connector.engine());
                    exit(1);
                }
            }
            match storage.list_torrents().await {
                Ok(torrents) => info!("[BOOT] Storage holds {} torrents", torrents.len()),
                Err(error) => warn!("[BOOT] Unable to count the stored torrents: {}", error)
            }

            let stats = Arc::new(StatsAtomics::new());
            let tracker = Arc::new(TorrentTracker::new(config.clone(), storage, stats.clone()));
            let tokio_shutdown = match Shutdown::new() {
                Ok(tokio_shutdown) => tokio_shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown signal handler");
                    exit(1);
                }
            };
            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            let console_interval = config.log_console_interval;
            let mut console_shutdown = shutdown_rx.clone();
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            let console_thread = tokio::spawn(async move {
                loop {
                    if shutdown_waiting(Duration::from_secs(console_interval), &mut console_shutdown).await {
                        info!("[BOOT] Shutting down thread for console updates...");
                        return;
                    }
                    let snapshot = stats.get_stats();
                    info!(
                        "[STATS] Announces: {} ({} ok) - Scrapes: {} ({} ok) - Torrents created: {} - Peers evicted: {}",
                        snapshot.announces, snapshot.announce_replies, snapshot.scrapes, snapshot.scrape_replies,
                        snapshot.torrents_created, snapshot.peers_evicted
                    );
                    info!(
                        "[STATS] Bad requests: {} - Unauthorized: {} - Internal errors: {} - 404: {} - Failed sweeps: {}",
                        snapshot.bad_requests, snapshot.unauthorized, snapshot.internal_errors, snapshot.not_found, snapshot.sweeps_failed
                    );
                }
            });

            let cleanup_thread = tokio::spawn(tracker.clone().peers_cleanup_thread(shutdown_rx.clone()));

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(_) => {
                        error!("[BOOT] Invalid bind address {}", http_server_object.bind_address);
                        exit(1);
                    }
                };
                let (handle, future) = match http_service(address, tracker.clone(), http_server_object.clone()).await {
                    Ok(server) => server,
                    Err(error) => {
                        error!("[BOOT] Unable to start the HTTP server on {}: {}", address, error);
                        exit(1);
                    }
                };
                http_handles.push(handle);
                http_futures.push(future);
            }
            if http_futures.is_empty() {
                warn!("[BOOT] No HTTP server is enabled, only background threads are running");
            }
            let http_servers = tokio::spawn(async move {
                if let Err(error) = try_join_all(http_futures).await {
                    sentry::capture_error(&error);
                    error!("[HTTP] Server stopped with an error: {}", error);
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            let _ = shutdown_tx.send(true);
            for handle in http_handles {
                handle.stop(true).await;
            }
            let _ = http_servers.await;
            let _ = console_thread.await;
            let _ = cleanup_thread.await;

            info!("Server shutting down completed");
            Ok(())
        })
}
