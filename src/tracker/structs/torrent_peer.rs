use std::net::SocketAddr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_id::TorrentId;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TorrentPeer {
    pub torrent_id: TorrentId,
    pub peer_id: PeerId,
    pub peer_addr: SocketAddr,
    pub uploaded: i64,
    pub downloaded: i64,
    pub left: i64,
    pub event: AnnounceEvent,
    pub key: Option<String>,
    pub updated_at: i64,
}
