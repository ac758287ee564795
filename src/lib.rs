//! # Swarm Tracker
//!
//! A BitTorrent HTTP tracker built with Rust and the Actix-web framework.
//!
//! ## Overview
//!
//! Peers announce their participation in a swarm (identified by a 20-byte info hash)
//! and receive a compact list of other peers in return. A scrape endpoint reports the
//! seeder, leecher and completed counts of one or more swarms.
//!
//! The tracker keeps no swarm state in process: every announce and scrape re-reads
//! the current truth from a pluggable storage backend (in-memory, SQLite or
//! PostgreSQL), so several tracker processes can share one database.
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification
//! - BEP 23: Tracker Returns Compact Peer Lists (IPv4 only)
//! - BEP 48: Tracker Protocol Extension: Scrape
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::database::structs::database_connector::DatabaseConnector;
//! use swarm_tracker::stats::structs::stats_atomics::StatsAtomics;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::init());
//! let connector = DatabaseConnector::new(config.clone(), true).await?;
//! let tracker = TorrentTracker::new(config, connector.backend(), Arc::new(StatsAtomics::new()));
//! ```
//!
//! ## Modules
//!
//! - [`codec`] - Bencode responses and the compact peer format
//! - [`common`] - Query parsing, logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Storage interface and its memory, SQLite and PostgreSQL backends
//! - [`http`] - HTTP/HTTPS announce and scrape endpoints
//! - [`stats`] - Injected statistics reporting
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Request validation, swarm coordination, scrape and eviction

/// Wire codec for tracker responses.
///
/// Encodes and decodes the bencoded announce, scrape and failure dictionaries,
/// and the 6-byte compact IPv4 peer representation.
pub mod codec;

/// Common utilities and shared functionality.
///
/// Contains the raw query string parser, logging setup, timestamps and
/// shutdown helpers used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Storage interface and backends.
///
/// Defines the `DatabaseBackend` capability trait the tracker engine talks to,
/// with in-memory, SQLite and PostgreSQL implementations.
pub mod database;

/// HTTP/HTTPS tracker protocol implementation.
///
/// Serves `/announce` and `/scrape` with bencoded, ISO-8859-1 plain text responses.
pub mod http;

/// Statistics reporting module.
///
/// An injected reporting interface with an atomic counter implementation.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains request validation, the swarm coordinator, the scrape aggregator
/// and the stale peer eviction policy.
pub mod tracker;
