use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// What an announce hands back to the transport.
///
/// `complete` and `incomplete` are counted over `peers`, the subset that is
/// actually returned, not over the whole swarm.
#[derive(Debug, Clone)]
pub struct AnnounceResult {
    pub torrent: Torrent,
    pub peers: Vec<TorrentPeer>,
    pub complete: u64,
    pub incomplete: u64,
}
