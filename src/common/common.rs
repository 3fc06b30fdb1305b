use std::time::SystemTime;
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Result<LevelFilter, CustomError>
{
    match level {
        "off" => Ok(LevelFilter::Off),
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{level}'"))),
    }
}

/// Installs the global colored stdout logger at the configured level.
///
/// Fails on an unknown level or when a logger is already installed.
pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())?;

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
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| CustomError::new(&format!("Failed to initialize logging: {e}")))?;
    info!("[BOOT] logging initialized.");
    Ok(())
}

pub fn current_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or_default()
}
