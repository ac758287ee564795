use uuid::Uuid;

/// Opaque identifier assigned by storage when a torrent is first seen.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TorrentId(pub Uuid);
