use std::net::SocketAddrV4;
use crate::common::common::current_time;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::peer_announcement::PeerAnnouncement;

impl PeerAnnouncement {
    /// Builds the storage write for a validated announce, stamped with the current time.
    pub fn from_request(request: &AnnounceQueryRequest) -> PeerAnnouncement {
        PeerAnnouncement {
            peer_id: request.peer_id,
            peer_addr: SocketAddrV4::new(request.remote_addr, request.port),
            uploaded: request.uploaded,
            downloaded: request.downloaded,
            left: request.left,
            event: request.event,
            key: request.key.clone(),
            updated_at: current_time(),
        }
    }
}
