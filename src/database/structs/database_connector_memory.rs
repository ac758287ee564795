use std::collections::BTreeMap;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_id::TorrentId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// In-process storage with the same semantics as the SQL backends.
#[derive(Debug, Default)]
pub struct DatabaseConnectorMemory {
    pub(crate) state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
pub struct MemoryState {
    pub(crate) torrents: BTreeMap<TorrentId, Torrent>,
    pub(crate) info_hashes: BTreeMap<InfoHash, TorrentId>,
    pub(crate) peers: BTreeMap<TorrentId, BTreeMap<PeerId, TorrentPeer>>,
}
