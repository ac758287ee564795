use std::net::SocketAddrV4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceResponse {
    pub interval: i64,
    pub min_interval: i64,
    pub complete: i64,
    pub incomplete: i64,
    pub peers: Vec<SocketAddrV4>,
}
