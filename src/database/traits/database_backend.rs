use std::time::Duration;
use async_trait::async_trait;
use crate::database::errors::StorageError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_announcement::PeerAnnouncement;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_id::TorrentId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// Everything the tracker engine needs from durable storage.
///
/// Implementations must make each call a single atomic operation. Cancelling
/// a call means dropping its future.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    /// Fails with [`StorageError::Conflict`] when the info hash already exists.
    async fn create_torrent(&self, info_hash: InfoHash) -> Result<Torrent, StorageError>;

    async fn get_torrent(&self, info_hash: InfoHash) -> Result<Option<Torrent>, StorageError>;

    async fn list_torrents(&self) -> Result<Vec<Torrent>, StorageError>;

    async fn increment_completed(&self, torrent_id: TorrentId) -> Result<(), StorageError>;

    /// Returns at most `limit` peers of the torrent, most recently announced first.
    async fn list_peers(&self, torrent_id: TorrentId, limit: u64) -> Result<Vec<TorrentPeer>, StorageError>;

    /// Rewrites the peer holding `key` with `fields`, including its peer id.
    ///
    /// Fails with [`StorageError::Conflict`] when the new peer id already
    /// belongs to another record of the same torrent, or when more than one
    /// record of the torrent holds `key`.
    async fn update_peer_by_key(&self, torrent_id: TorrentId, key: &str, fields: &PeerAnnouncement) -> Result<u64, StorageError>;

    /// Inserts the peer, or overwrites it when its stored key is empty or
    /// equal to `fields.key`. Returns 0 when a different key owns the peer id.
    async fn upsert_peer(&self, torrent_id: TorrentId, fields: &PeerAnnouncement) -> Result<u64, StorageError>;

    /// Deletes every peer whose last announce is older than `threshold`.
    async fn delete_stale_peers(&self, threshold: Duration) -> Result<u64, StorageError>;

    async fn ping(&self) -> Result<bool, StorageError>;
}
