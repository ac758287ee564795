use std::net::Ipv4Addr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// Announce parameters that passed validation.
///
/// Counters are already range-checked to fit a signed 64-bit column, and
/// `left` has been clamped when a client sent the maximum integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub remote_addr: Ipv4Addr,
    pub port: u16,
    pub uploaded: i64,
    pub downloaded: i64,
    pub left: i64,
    pub event: AnnounceEvent,
    pub key: Option<String>,
}
