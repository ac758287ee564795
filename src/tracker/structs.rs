//! Data structures for tracker operations.

/// Validated announce parameters.
pub mod announce_query_request;

/// Outcome of a successful announce.
pub mod announce_result;

/// 20-byte torrent identifier.
pub mod info_hash;

/// Mutable peer fields written by one announce.
pub mod peer_announcement;

/// 20-byte peer identifier chosen by the client.
pub mod peer_id;

/// Validated scrape parameters.
pub mod scrape_query_request;

/// Per info-hash scrape statistics.
pub mod scrape_entry;

/// A stored torrent with its derived swarm counts.
pub mod torrent;

/// Storage-assigned torrent identifier.
pub mod torrent_id;

/// A stored peer record.
pub mod torrent_peer;

/// The tracker engine.
pub mod torrent_tracker;
