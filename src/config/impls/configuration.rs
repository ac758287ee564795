use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::path::Path;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig::default(),
            database: DatabaseConfig::default(),
            http_server: vec!(HttpTrackersConfig::default()),
            sentry_config: SentryConfig::default()
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)
            .map_err(|e| ConfigurationError::ValidationError(format!("unable to serialize configuration: {e}")))?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`.
    ///
    /// When the file is missing or broken and `create` is set, a default
    /// configuration is written in its place and an error is still returned,
    /// so the operator gets a chance to edit it before the tracker starts.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(format!("will not create automatically {path} file")));
                }
                if Path::new(path).exists() {
                    eprintln!("Refusing to overwrite the existing {path} file, fix or remove it first.");
                    return Err(CustomError::new(format!("{path} exists but is not valid")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(CustomError::new(format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new(error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(self.log_level.as_str()).is_none() {
            return Err(ConfigurationError::ValidationError(format!("log_level '{}' is not one of off, trace, debug, info, warn, error", self.log_level)));
        }

        let tracker_config = &self.tracker_config;
        Self::validate_range("tracker_config.peers_timeout", tracker_config.peers_timeout, 3600, 86400)?;
        Self::validate_range("tracker_config.peers_returned", tracker_config.peers_returned, 1, 200)?;
        Self::validate_range("tracker_config.peers_cleanup_interval", tracker_config.peers_cleanup_interval, 1, 86400)?;
        Self::validate_range("tracker_config.request_interval", tracker_config.request_interval, 1, 86400)?;
        Self::validate_range("tracker_config.request_interval_minimum", tracker_config.request_interval_minimum, 1, 86400)?;

        if self.database.max_connections == 0 {
            return Err(ConfigurationError::ValidationError(String::from("database.max_connections must be at least 1")));
        }

        for http_server in &self.http_server {
            if http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("http_server.bind_address '{}' is not a socket address", http_server.bind_address)));
            }
            Self::validate_value("http_server.real_ip", http_server.real_ip.as_str(), r"^[A-Za-z0-9-]{1,64}$")?;
            if http_server.ssl && (http_server.ssl_key.is_empty() || http_server.ssl_cert.is_empty()) {
                return Err(ConfigurationError::ValidationError(format!("http_server {} has ssl enabled without ssl_key and ssl_cert", http_server.bind_address)));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{name}: {e}")))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }

    fn validate_range(name: &str, value: u64, min: u64, max: u64) -> Result<(), ConfigurationError> {
        if !(min..=max).contains(&value) {
            return Err(ConfigurationError::ValidationError(format!("{name} is {value}, expected {min}..={max}")));
        }
        Ok(())
    }
}
