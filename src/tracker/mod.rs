//! Core BitTorrent tracker implementation.
//!
//! This module contains the announce/scrape engine: request validation, the
//! swarm coordinator, the scrape aggregator and the stale peer eviction policy.
//!
//! # Architecture
//!
//! The engine keeps no swarm state in memory. Every announce and scrape goes
//! through the [`DatabaseBackend`](crate::database::traits::database_backend::DatabaseBackend)
//! trait, so any number of tracker processes may share one database and a
//! restart loses nothing.
//!
//! # Main Components
//!
//! - `TorrentTracker` - The engine instance
//! - `InfoHash` - 20-byte torrent identifier
//! - `PeerId` - 20-byte peer identifier
//! - `Torrent` - Stored torrent with derived seeders and leechers
//! - `TorrentPeer` - Stored peer record
//!
//! # Example
//!
//! ```rust,ignore
//! let tracker = TorrentTracker::new(config, storage, stats);
//! let request = tracker.validate_announce(ip, &parse_query(query))?;
//! let result = tracker.handle_announce(request).await?;
//! ```

/// Enumerations for tracker operations.
pub mod enums;

/// Errors surfaced to the HTTP layer.
pub mod errors;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;
