use std::collections::btree_map::Entry;
use std::net::SocketAddr;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use crate::common::common::current_time;
use crate::database::errors::StorageError;
use crate::database::helpers::stale_cutoff;
use crate::database::structs::database_connector_memory::{DatabaseConnectorMemory, MemoryState};
use crate::database::traits::database_backend::DatabaseBackend;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_announcement::PeerAnnouncement;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_id::TorrentId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

const LOG_PREFIX: &str = "[MEMORY]";

impl DatabaseConnectorMemory {
    pub fn new() -> DatabaseConnectorMemory {
        DatabaseConnectorMemory::default()
    }

    fn with_counts(state: &MemoryState, torrent: &Torrent) -> Torrent {
        let (seeders, leechers) = state.peers.get(&torrent.id).map(|peers| {
            peers.values().fold((0u64, 0u64), |(seeders, leechers), peer| {
                if peer.is_seeder() { (seeders + 1, leechers) } else { (seeders, leechers + 1) }
            })
        }).unwrap_or((0, 0));
        Torrent { seeders, leechers, ..torrent.clone() }
    }

    fn write_fields(torrent_id: TorrentId, fields: &PeerAnnouncement, key: Option<String>) -> TorrentPeer {
        TorrentPeer {
            torrent_id,
            peer_id: fields.peer_id,
            peer_addr: SocketAddr::V4(fields.peer_addr),
            uploaded: fields.uploaded,
            downloaded: fields.downloaded,
            left: fields.left,
            event: fields.event,
            key,
            updated_at: fields.updated_at,
        }
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorMemory {
    async fn create_torrent(&self, info_hash: InfoHash) -> Result<Torrent, StorageError> {
        let mut state = self.state.write();
        if state.info_hashes.contains_key(&info_hash) {
            return Err(StorageError::Conflict(format!("torrent {info_hash} already exists")));
        }
        let torrent = Torrent {
            id: TorrentId::new_v4(),
            info_hash,
            completed: 0,
            created_at: current_time(),
            seeders: 0,
            leechers: 0,
        };
        state.info_hashes.insert(info_hash, torrent.id);
        state.torrents.insert(torrent.id, torrent.clone());
        debug!("{LOG_PREFIX} Created torrent {info_hash} as {}", torrent.id);
        Ok(torrent)
    }

    async fn get_torrent(&self, info_hash: InfoHash) -> Result<Option<Torrent>, StorageError> {
        let state = self.state.read();
        Ok(state.info_hashes.get(&info_hash)
            .and_then(|torrent_id| state.torrents.get(torrent_id))
            .map(|torrent| Self::with_counts(&state, torrent)))
    }

    async fn list_torrents(&self) -> Result<Vec<Torrent>, StorageError> {
        let state = self.state.read();
        Ok(state.torrents.values().map(|torrent| Self::with_counts(&state, torrent)).collect())
    }

    async fn increment_completed(&self, torrent_id: TorrentId) -> Result<(), StorageError> {
        if let Some(torrent) = self.state.write().torrents.get_mut(&torrent_id) {
            torrent.completed += 1;
        }
        Ok(())
    }

    async fn list_peers(&self, torrent_id: TorrentId, limit: u64) -> Result<Vec<TorrentPeer>, StorageError> {
        let state = self.state.read();
        let mut peers: Vec<TorrentPeer> = state.peers.get(&torrent_id)
            .map(|peers| peers.values().cloned().collect())
            .unwrap_or_default();
        peers.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        peers.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(peers)
    }

    async fn update_peer_by_key(&self, torrent_id: TorrentId, key: &str, fields: &PeerAnnouncement) -> Result<u64, StorageError> {
        let mut state = self.state.write();
        let Some(peers) = state.peers.get_mut(&torrent_id) else {
            return Ok(0);
        };
        let owners: Vec<_> = peers.values()
            .filter(|peer| peer.key.as_deref() == Some(key))
            .map(|peer| peer.peer_id)
            .collect();
        if owners.is_empty() {
            return Ok(0);
        }
        if owners.len() > 1 || (owners[0] != fields.peer_id && peers.contains_key(&fields.peer_id)) {
            return Err(StorageError::Conflict(format!("peer_id {} is already registered", fields.peer_id)));
        }
        if let Some(previous) = peers.remove(&owners[0]) {
            peers.insert(fields.peer_id, Self::write_fields(torrent_id, fields, previous.key));
        }
        Ok(1)
    }

    async fn upsert_peer(&self, torrent_id: TorrentId, fields: &PeerAnnouncement) -> Result<u64, StorageError> {
        let mut state = self.state.write();
        let peers = state.peers.entry(torrent_id).or_default();
        match peers.entry(fields.peer_id) {
            Entry::Vacant(entry) => {
                entry.insert(Self::write_fields(torrent_id, fields, fields.key.clone()));
                Ok(1)
            }
            Entry::Occupied(mut entry) => {
                let stored_key = entry.get().key.clone();
                if stored_key.is_some() && stored_key != fields.key {
                    return Ok(0);
                }
                entry.insert(Self::write_fields(torrent_id, fields, fields.key.clone()));
                Ok(1)
            }
        }
    }

    async fn delete_stale_peers(&self, threshold: Duration) -> Result<u64, StorageError> {
        let cutoff = stale_cutoff(threshold);
        let mut state = self.state.write();
        let mut removed = 0u64;
        for peers in state.peers.values_mut() {
            let before = peers.len();
            peers.retain(|_, peer| peer.updated_at >= cutoff);
            removed += (before - peers.len()) as u64;
        }
        state.peers.retain(|_, peers| !peers.is_empty());
        Ok(removed)
    }

    async fn ping(&self) -> Result<bool, StorageError> {
        Ok(true)
    }
}
