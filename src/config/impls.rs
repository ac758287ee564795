pub mod configuration;
pub mod configuration_error;
pub mod database_config;
pub mod http_trackers_config;
pub mod sentry_config;
pub mod tracker_config;
