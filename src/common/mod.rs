//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the tracker codebase.
//!
//! # Utilities
//!
//! - Raw query string parsing (binary safe)
//! - Hex formatting of 20-byte identifiers
//! - Logging setup
//! - Timestamp utilities
//! - Graceful shutdown handling
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::common::common::parse_query;
//!
//! let params = parse_query("info_hash=%ab%cd&port=6881");
//! assert_eq!(params.get("port"), Some(&vec![b"6881".to_vec()]));
//! assert_eq!(params.get("info_hash"), Some(&vec![vec![0xab, 0xcd]]));
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Type aliases shared between the HTTP layer and the request validator.
pub mod types;
