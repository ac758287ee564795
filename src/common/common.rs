use std::fmt;
use std::fmt::Formatter;
use std::time::{Duration, SystemTime};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio::sync::watch;
use crate::common::structs::custom_error::CustomError;
use crate::common::types::QueryMap;
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into lower-cased names and raw byte values.
///
/// Values are percent-decoded into bytes without any UTF-8 interpretation, so
/// binary `info_hash` and `peer_id` values survive intact. A name given more
/// than once collects every value in order; a name without `=` gets an empty value.
pub fn parse_query(query: &str) -> QueryMap {
    let mut queries = QueryMap::new();
    for query_item in query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_name_raw, value_data_raw) = query_item.split_once('=').unwrap_or((query_item, ""));
        let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let value_data = percent_encoding::percent_decode_str(value_data_raw).collect::<Vec<u8>>();
        queries.entry(key_name).or_default().push(value_data);
    }
    queries
}

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    let mut chars = [0u8; 40];
    binascii::bin2hex(data, &mut chars).map_err(|_| fmt::Error)?;
    write!(f, "{}", std::str::from_utf8(&chars).map_err(|_| fmt::Error)?)
}

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())
        .ok_or_else(|| CustomError::new(format!("Unknown log level encountered: '{}'", config.log_level)))?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| CustomError::new(format!("Failed to initialize logging: {e}")))?;

    info!("logging initialized.");
    Ok(())
}

/// Seconds since the unix epoch, the timestamp unit used by every stored record.
pub fn current_time() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or_default()
}

/// Sleeps for `timeout`, returning `true` early when a shutdown was signalled
/// or the signalling side went away.
pub async fn shutdown_waiting(timeout: Duration, shutdown_handler: &mut watch::Receiver<bool>) -> bool {
    if *shutdown_handler.borrow() {
        return true;
    }
    tokio::select! {
        _ = tokio::time::sleep(timeout) => false,
        changed = shutdown_handler.changed() => changed.is_err() || *shutdown_handler.borrow(),
    }
}
