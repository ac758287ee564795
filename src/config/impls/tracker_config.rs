use crate::config::structs::tracker_config::TrackerConfig;

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            request_interval: 60,
            request_interval_minimum: 120,
            peers_returned: 24,
            peers_timeout: 3600,
            peers_cleanup_interval: 300,
        }
    }
}
