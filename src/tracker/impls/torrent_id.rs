use std::fmt;
use uuid::Uuid;
use crate::tracker::structs::torrent_id::TorrentId;

impl TorrentId {
    pub fn new_v4() -> TorrentId {
        TorrentId(Uuid::new_v4())
    }
}

impl fmt::Display for TorrentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TorrentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TorrentId(Uuid::parse_str(s)?))
    }
}
