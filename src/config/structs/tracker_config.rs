use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    pub request_interval: u64,
    pub request_interval_minimum: u64,
    pub peers_returned: u64,
    pub peers_timeout: u64,
    pub peers_cleanup_interval: u64,
}
