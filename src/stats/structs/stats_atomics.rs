use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub announces: AtomicI64,
    pub announce_replies: AtomicI64,
    pub scrapes: AtomicI64,
    pub scrape_replies: AtomicI64,
    pub torrents_created: AtomicI64,
    pub peers_evicted: AtomicI64,
    pub bad_requests: AtomicI64,
    pub unauthorized: AtomicI64,
    pub internal_errors: AtomicI64,
    pub sweeps_failed: AtomicI64,
    pub not_found: AtomicI64,
}
