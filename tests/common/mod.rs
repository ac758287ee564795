#![allow(dead_code)]
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use rand::RngExt;
use tempfile::TempDir;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use swarm_tracker::database::enums::database_drivers::DatabaseDrivers;
use swarm_tracker::database::errors::StorageError;
use swarm_tracker::database::structs::database_connector_memory::DatabaseConnectorMemory;
use swarm_tracker::database::traits::database_backend::DatabaseBackend;
use swarm_tracker::stats::structs::stats_atomics::StatsAtomics;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::peer_announcement::PeerAnnouncement;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::torrent::Torrent;
use swarm_tracker::tracker::structs::torrent_id::TorrentId;
use swarm_tracker::tracker::structs::torrent_peer::TorrentPeer;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub const CLIENT_IP: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 1);

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.database.engine = DatabaseDrivers::memory;
    config.database.path = String::new();
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:6969".to_string(),
        real_ip: "X-Forwarded-For".to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
        ssl: false,
        ssl_key: String::new(),
        ssl_cert: String::new(),
    })
}

pub fn create_tracker_with(config: TestConfig, storage: Arc<dyn DatabaseBackend>) -> (TestTracker, Arc<StatsAtomics>) {
    let stats = Arc::new(StatsAtomics::new());
    (Arc::new(TorrentTracker::new(config, storage, stats.clone())), stats)
}

pub fn create_test_tracker() -> (TestTracker, Arc<StatsAtomics>) {
    create_tracker_with(create_test_config(), Arc::new(DatabaseConnectorMemory::new()))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes)
}

pub fn url_encode(bytes: &[u8]) -> String {
    percent_encode(bytes, NON_ALPHANUMERIC).to_string()
}

/// Builds an announce query string; `extra` is appended verbatim.
pub fn announce_query(info_hash: InfoHash, peer_id: PeerId, port: u16, left: u64, extra: &str) -> String {
    format!(
        "info_hash={}&peer_id={}&port={}&uploaded=0&downloaded=0&left={}{}",
        url_encode(&info_hash.0),
        url_encode(&peer_id.0),
        port,
        left,
        extra
    )
}

pub fn client_addr(port: u16) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(CLIENT_IP), port)
}

/// A storage backend that is never reachable.
pub struct FailingBackend;

fn unavailable<T>() -> Result<T, StorageError> {
    Err(StorageError::Unavailable(String::from("connection refused")))
}

#[async_trait]
impl DatabaseBackend for FailingBackend {
    async fn create_torrent(&self, _info_hash: InfoHash) -> Result<Torrent, StorageError> { unavailable() }
    async fn get_torrent(&self, _info_hash: InfoHash) -> Result<Option<Torrent>, StorageError> { unavailable() }
    async fn list_torrents(&self) -> Result<Vec<Torrent>, StorageError> { unavailable() }
    async fn increment_completed(&self, _torrent_id: TorrentId) -> Result<(), StorageError> { unavailable() }
    async fn list_peers(&self, _torrent_id: TorrentId, _limit: u64) -> Result<Vec<TorrentPeer>, StorageError> { unavailable() }
    async fn update_peer_by_key(&self, _torrent_id: TorrentId, _key: &str, _fields: &PeerAnnouncement) -> Result<u64, StorageError> { unavailable() }
    async fn upsert_peer(&self, _torrent_id: TorrentId, _fields: &PeerAnnouncement) -> Result<u64, StorageError> { unavailable() }
    async fn delete_stale_peers(&self, _threshold: Duration) -> Result<u64, StorageError> { unavailable() }
    async fn ping(&self) -> Result<bool, StorageError> { unavailable() }
}
