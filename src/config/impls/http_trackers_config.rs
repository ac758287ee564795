use std::thread::available_parallelism;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;

impl Default for HttpTrackersConfig {
    fn default() -> Self {
        HttpTrackersConfig {
            enabled: true,
            bind_address: String::from("0.0.0.0:6969"),
            real_ip: String::from("X-Forwarded-For"),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
            ssl: false,
            ssl_key: String::new(),
            ssl_cert: String::new(),
        }
    }
}
