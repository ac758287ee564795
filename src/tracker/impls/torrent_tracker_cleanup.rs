use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{error, info};
use tokio::sync::watch;
use crate::common::common::shutdown_waiting;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Deletes every peer that has not announced within `threshold`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn sweep_stale_peers(&self, threshold: Duration) -> Result<u64, TrackerError>
    {
        let removed = self.storage.delete_stale_peers(threshold).await?;
        if removed > 0 {
            self.update_stats(StatsEvent::PeersEvicted, removed as i64);
        }
        Ok(removed)
    }

    /// Runs [`TorrentTracker::sweep_stale_peers`] every `peers_cleanup_interval`
    /// seconds until `shutdown` flips to `true`. A failed sweep is reported and
    /// retried on the next tick.
    pub async fn peers_cleanup_thread(self: Arc<Self>, mut shutdown: watch::Receiver<bool>)
    {
        let interval = Duration::from_secs(self.config.tracker_config.peers_cleanup_interval);
        let threshold = Duration::from_secs(self.config.tracker_config.peers_timeout);
        info!("[BOOT] Starting thread for peers cleanup with {} seconds delay...", interval.as_secs());

        loop {
            if shutdown_waiting(interval, &mut shutdown).await {
                info!("[BOOT] Shutting down thread for peers cleanup...");
                return;
            }

            let start = Instant::now();
            match self.sweep_stale_peers(threshold).await {
                Ok(removed) => {
                    info!("[CLEANUP] Removed {} stale peers in {:?}", removed, start.elapsed());
                }
                Err(error) => {
                    self.update_stats(StatsEvent::SweepsFailed, 1);
                    sentry::capture_error(&error);
                    error!("[CLEANUP] Sweep failed, retrying in {} seconds: {:?}", interval.as_secs(), error);
                }
            }
        }
    }
}
