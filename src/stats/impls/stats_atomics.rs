use std::sync::atomic::{AtomicI64, Ordering};
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::traits::stats_reporter::StatsReporter;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(current_time()),
            ..Default::default()
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::Announces => &self.announces,
            StatsEvent::AnnounceReplies => &self.announce_replies,
            StatsEvent::Scrapes => &self.scrapes,
            StatsEvent::ScrapeReplies => &self.scrape_replies,
            StatsEvent::TorrentsCreated => &self.torrents_created,
            StatsEvent::PeersEvicted => &self.peers_evicted,
            StatsEvent::BadRequests => &self.bad_requests,
            StatsEvent::Unauthorized => &self.unauthorized,
            StatsEvent::InternalErrors => &self.internal_errors,
            StatsEvent::SweepsFailed => &self.sweeps_failed,
            StatsEvent::NotFound => &self.not_found,
        }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn get_stats(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            announces: self.announces.load(Ordering::SeqCst),
            announce_replies: self.announce_replies.load(Ordering::SeqCst),
            scrapes: self.scrapes.load(Ordering::SeqCst),
            scrape_replies: self.scrape_replies.load(Ordering::SeqCst),
            torrents_created: self.torrents_created.load(Ordering::SeqCst),
            peers_evicted: self.peers_evicted.load(Ordering::SeqCst),
            bad_requests: self.bad_requests.load(Ordering::SeqCst),
            unauthorized: self.unauthorized.load(Ordering::SeqCst),
            internal_errors: self.internal_errors.load(Ordering::SeqCst),
            sweeps_failed: self.sweeps_failed.load(Ordering::SeqCst),
            not_found: self.not_found.load(Ordering::SeqCst),
        }
    }
}

impl StatsReporter for StatsAtomics {
    fn update_stats(&self, event: StatsEvent, value: i64) {
        self.counter(event).fetch_add(value, Ordering::SeqCst);
    }
}
