//! Storage interface and backends.
//!
//! The tracker engine only ever talks to the [`DatabaseBackend`](traits::database_backend::DatabaseBackend)
//! trait. Three implementations are provided:
//!
//! - **memory**: `BTreeMap`s behind a `parking_lot::RwLock`, for tests and throwaway setups
//! - **sqlite3**: a `sqlx` SQLite pool
//! - **pgsql**: a `sqlx` PostgreSQL pool
//!
//! Every write is a single statement, so a dropped request future never leaves
//! a half-applied announce behind.
//!
//! # Tables
//!
//! ```text
//! torrents(id PK, info_hash UNIQUE, completed, created_at)
//! peers(torrent_id, peer_id, ip, port, uploaded, downloaded, "left", event, "key", updated_at,
//!       PRIMARY KEY (torrent_id, peer_id))
//! ```

/// Backend selection.
pub mod enums;

/// Storage errors.
pub mod errors;

/// SQL builders and row conversion shared by the SQL backends.
pub mod helpers;

/// Backend implementations.
pub mod impls;

/// Backend structures.
pub mod structs;

/// The storage capability trait.
pub mod traits;

/// Unit tests for the SQL helpers and the memory backend.
pub mod tests;
