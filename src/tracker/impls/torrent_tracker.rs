use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::traits::stats_reporter::StatsReporter;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn new(config: Arc<Configuration>, storage: Arc<dyn DatabaseBackend>, stats: Arc<dyn StatsReporter>) -> TorrentTracker
    {
        TorrentTracker {
            config,
            storage,
            stats,
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.update_stats(event, value);
    }
}
