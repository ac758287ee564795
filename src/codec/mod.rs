//! Wire codec for tracker responses.
//!
//! Tracker responses are bencoded dictionaries. Announce responses carry the
//! peer list in the compact format of BEP 23: six bytes per peer, a big-endian
//! IPv4 address followed by a big-endian port.
//!
//! ```rust
//! use std::net::Ipv4Addr;
//! use swarm_tracker::codec::codec::compact_peer;
//!
//! assert_eq!(compact_peer(Ipv4Addr::new(127, 0, 0, 1), 9999), [0x7F, 0x00, 0x00, 0x01, 0x27, 0x0F]);
//! ```

/// Encoders and decoders.
#[allow(clippy::module_inception)]
pub mod codec;

/// Codec errors.
pub mod errors;

/// Decoded response structures.
pub mod structs;

/// Unit tests for the codec.
pub mod tests;
