use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::stats::traits::stats_reporter::StatsReporter;

/// The announce/scrape engine.
///
/// Holds no swarm state of its own; every request reads the current truth
/// from `storage`.
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub storage: Arc<dyn DatabaseBackend>,
    pub stats: Arc<dyn StatsReporter>,
}
