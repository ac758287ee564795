//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Storage backend selection and connection settings.
pub mod database_config;

/// HTTP/HTTPS server configuration.
pub mod http_trackers_config;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// Announce intervals, peer list size and eviction timings.
pub mod tracker_config;
