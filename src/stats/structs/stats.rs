use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub announces: i64,
    pub announce_replies: i64,
    pub scrapes: i64,
    pub scrape_replies: i64,
    pub torrents_created: i64,
    pub peers_evicted: i64,
    pub bad_requests: i64,
    pub unauthorized: i64,
    pub internal_errors: i64,
    pub sweeps_failed: i64,
    pub not_found: i64,
}
