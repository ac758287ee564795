use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use crate::common::common::current_time;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::StorageError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_id::TorrentId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

pub fn placeholder(engine: DatabaseDrivers, index: usize) -> String {
    match engine {
        DatabaseDrivers::pgsql => format!("${index}"),
        _ => format!("?{index}"),
    }
}

pub fn binary_type(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::pgsql => "BYTEA",
        _ => "BLOB",
    }
}

pub fn integer_type(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::pgsql => "BIGINT",
        _ => "INTEGER",
    }
}

pub fn build_create_tables_queries(engine: DatabaseDrivers) -> Vec<String> {
    let binary = binary_type(engine);
    let integer = integer_type(engine);
    vec![
        format!(
            "CREATE TABLE IF NOT EXISTS torrents (id TEXT PRIMARY KEY NOT NULL, info_hash {binary} NOT NULL UNIQUE, completed {integer} NOT NULL DEFAULT 0, created_at {integer} NOT NULL)"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS peers (torrent_id TEXT NOT NULL REFERENCES torrents (id) ON DELETE CASCADE, peer_id {binary} NOT NULL, ip TEXT NOT NULL, port {integer} NOT NULL, uploaded {integer} NOT NULL DEFAULT 0, downloaded {integer} NOT NULL DEFAULT 0, \"left\" {integer} NOT NULL DEFAULT 0, event TEXT NOT NULL DEFAULT '', \"key\" TEXT NOT NULL DEFAULT '', updated_at {integer} NOT NULL, PRIMARY KEY (torrent_id, peer_id))"
        ),
        String::from("CREATE INDEX IF NOT EXISTS peers_torrent_key ON peers (torrent_id, \"key\")"),
        String::from("CREATE INDEX IF NOT EXISTS peers_updated_at ON peers (updated_at)"),
    ]
}

const SELECT_TORRENT_COLUMNS: &str = "t.id, t.info_hash, t.completed, t.created_at, \
    (SELECT COUNT(*) FROM peers p WHERE p.torrent_id = t.id AND p.\"left\" = 0) AS seeders, \
    (SELECT COUNT(*) FROM peers p WHERE p.torrent_id = t.id AND p.\"left\" > 0) AS leechers";

pub fn build_select_torrent_query(engine: DatabaseDrivers) -> String {
    format!("SELECT {SELECT_TORRENT_COLUMNS} FROM torrents t WHERE t.info_hash = {}", placeholder(engine, 1))
}

pub fn build_list_torrents_query() -> String {
    format!("SELECT {SELECT_TORRENT_COLUMNS} FROM torrents t ORDER BY t.created_at")
}

pub fn build_insert_torrent_query(engine: DatabaseDrivers) -> String {
    format!(
        "INSERT INTO torrents (id, info_hash, completed, created_at) VALUES ({}, {}, 0, {})",
        placeholder(engine, 1), placeholder(engine, 2), placeholder(engine, 3)
    )
}

pub fn build_increment_completed_query(engine: DatabaseDrivers) -> String {
    format!("UPDATE torrents SET completed = completed + 1 WHERE id = {}", placeholder(engine, 1))
}

pub fn build_select_peers_query(engine: DatabaseDrivers) -> String {
    format!(
        "SELECT peer_id, ip, port, uploaded, downloaded, \"left\", event, \"key\", updated_at FROM peers WHERE torrent_id = {} ORDER BY updated_at DESC LIMIT {}",
        placeholder(engine, 1), placeholder(engine, 2)
    )
}

/// Binds: peer_id, ip, port, uploaded, downloaded, left, event, updated_at, torrent_id, key.
pub fn build_update_peer_by_key_query(engine: DatabaseDrivers) -> String {
    let p = |index| placeholder(engine, index);
    format!(
        "UPDATE peers SET peer_id = {}, ip = {}, port = {}, uploaded = {}, downloaded = {}, \"left\" = {}, event = {}, updated_at = {} WHERE torrent_id = {} AND \"key\" = {}",
        p(1), p(2), p(3), p(4), p(5), p(6), p(7), p(8), p(9), p(10)
    )
}

/// Binds: torrent_id, peer_id, ip, port, uploaded, downloaded, left, event, key, updated_at.
///
/// The conflict branch only fires while the stored key is empty or matches,
/// so a keyed peer can never be overwritten by a request without its key.
pub fn build_upsert_peer_query(engine: DatabaseDrivers) -> String {
    let p = |index| placeholder(engine, index);
    format!(
        "INSERT INTO peers (torrent_id, peer_id, ip, port, uploaded, downloaded, \"left\", event, \"key\", updated_at) VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {}, {}) \
        ON CONFLICT (torrent_id, peer_id) DO UPDATE SET ip = excluded.ip, port = excluded.port, uploaded = excluded.uploaded, downloaded = excluded.downloaded, \"left\" = excluded.\"left\", event = excluded.event, \"key\" = excluded.\"key\", updated_at = excluded.updated_at \
        WHERE peers.\"key\" = '' OR peers.\"key\" = excluded.\"key\"",
        p(1), p(2), p(3), p(4), p(5), p(6), p(7), p(8), p(9), p(10)
    )
}

pub fn build_delete_stale_peers_query(engine: DatabaseDrivers) -> String {
    format!("DELETE FROM peers WHERE updated_at < {}", placeholder(engine, 1))
}

/// Oldest `updated_at` that survives a sweep with the given threshold.
pub fn stale_cutoff(threshold: Duration) -> i64 {
    current_time().saturating_sub(i64::try_from(threshold.as_secs()).unwrap_or(i64::MAX))
}

pub fn encode_key(key: &Option<String>) -> &str {
    key.as_deref().unwrap_or("")
}

pub fn decode_key(key: String) -> Option<String> {
    if key.is_empty() { None } else { Some(key) }
}

pub fn build_torrent(id: &str, info_hash: &[u8], completed: i64, created_at: i64, seeders: i64, leechers: i64) -> Result<Torrent, StorageError> {
    Ok(Torrent {
        id: id.parse::<TorrentId>().map_err(|e| StorageError::Corrupt(format!("torrent id {id}: {e}")))?,
        info_hash: InfoHash::try_from(info_hash).map_err(|_| StorageError::Corrupt(format!("info_hash of torrent {id} is {} bytes", info_hash.len())))?,
        completed: completed.max(0) as u64,
        created_at,
        seeders: seeders.max(0) as u64,
        leechers: leechers.max(0) as u64,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn build_torrent_peer(torrent_id: TorrentId, peer_id: &[u8], ip: &str, port: i64, uploaded: i64, downloaded: i64, left: i64, event: &str, key: String, updated_at: i64) -> Result<TorrentPeer, StorageError> {
    let ip = ip.parse::<IpAddr>().map_err(|_| StorageError::Corrupt(format!("peer ip '{ip}'")))?;
    let port = u16::try_from(port).map_err(|_| StorageError::Corrupt(format!("peer port {port}")))?;
    Ok(TorrentPeer {
        torrent_id,
        peer_id: PeerId::try_from(peer_id).map_err(|_| StorageError::Corrupt(format!("peer_id is {} bytes", peer_id.len())))?,
        peer_addr: SocketAddr::new(ip, port),
        uploaded,
        downloaded,
        left,
        event: AnnounceEvent::parse(event.as_bytes()).ok_or_else(|| StorageError::Corrupt(format!("peer event '{event}'")))?,
        key: decode_key(key),
        updated_at,
    })
}
