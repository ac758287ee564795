//! Implementation blocks for tracker structs.

pub mod announce_event;
pub mod info_hash;
pub mod peer_announcement;
pub mod peer_id;
pub mod torrent_id;
pub mod torrent_peer;
pub mod torrent_tracker;
pub mod torrent_tracker_cleanup;
pub mod torrent_tracker_handlers;
