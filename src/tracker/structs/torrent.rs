use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_id::TorrentId;

/// A torrent as read back from storage.
///
/// `seeders` and `leechers` are derived from the current peer records on every
/// read and never stored.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Torrent {
    pub id: TorrentId,
    pub info_hash: InfoHash,
    pub completed: u64,
    pub created_at: i64,
    pub seeders: u64,
    pub leechers: u64,
}
