//! HTTP/HTTPS tracker protocol implementation.
//!
//! Serves the two tracker endpoints over actix-web:
//!
//! - `GET /announce` registers the caller in a swarm and returns compact peers
//! - `GET /scrape` reports swarm counts for one or more info hashes
//!
//! Every response, including failures and the 404 fallback, is a bencoded
//! dictionary sent as `text/plain; charset=ISO-8859-1`. Failures carry a
//! `failure reason` and a 400, 401 or 500 status.

/// Server setup, routing and request handlers.
#[allow(clippy::module_inception)]
pub mod http;

/// Shared state handed to every handler.
pub mod structs;
