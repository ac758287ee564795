use crate::tracker::structs::torrent_peer::TorrentPeer;

impl TorrentPeer {
    pub fn is_seeder(&self) -> bool {
        self.left == 0
    }
}
