use std::net::SocketAddrV4;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::peer_id::PeerId;

/// The peer fields a single announce writes to storage.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PeerAnnouncement {
    pub peer_id: PeerId,
    pub peer_addr: SocketAddrV4,
    pub uploaded: i64,
    pub downloaded: i64,
    pub left: i64,
    pub event: AnnounceEvent,
    pub key: Option<String>,
    pub updated_at: i64,
}
