//! Logger configuration.

use std::fs;
use std::fs::OpenOptions;
use std::str::FromStr;
use tracing::{debug, info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{filter, Layer, Registry};

/// Sets the global logger features for the application.
/// * `level` - Log level (DEBUG, INFO, WARN, ERROR); unknown values fall back to INFO.
/// * `to_file` - Whether to log to file (true/false).
/// * `to_stdout` - Whether to log to stdout (true/false).
/// * `log_dir` - Directory to store log files.
/// * `log_file` - Log file name inside `log_dir`.
///
/// Stdout gets a compact human-friendly layer; the file gets JSON lines.
/// # Errors
/// 1) Returns an error if the log directory cannot be created or the log file cannot be opened.
/// 2) Returns an error if the global subscriber cannot be set.
pub fn set_logger(
    level: String,
    to_file: bool,
    to_stdout: bool,
    log_dir: String,
    log_file: String,
) -> anyhow::Result<()> {
    let lvl = Level::from_str(&level).unwrap_or(Level::INFO);
    let lf = filter::LevelFilter::from_level(lvl);

    let stdout_layer = if to_stdout {
        Some(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_filter(lf),
        )
    } else {
        None
    };

    let path = format!("{log_dir}/{log_file}");
    let file_layer = if to_file {
        fs::create_dir_all(&log_dir)?;
        let f = OpenOptions::new().append(true).create(true).open(&path)?;
        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(f)
                .with_filter(lf),
        )
    } else {
        None
    };

    const BANNER: &str = r#"
|----------------------------------------|
|    __  ___     _ ______     __         |
|   /  |/  /__ _(_) / _ \___ / /__ ___ __|
|  / /|_/ / _ `/ / / , _/ -_) / _ `/ // /|
| /_/  /_/\_,_/_/_/_/|_|\__/_/\_,_/\_, / |
|                                 /___/  |
|----------------------------------------|
    "#;
    let subscriber = Registry::default().with(stdout_layer).with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    info!("{}", BANNER);
    info!("Logger initialized, log level set to: {lvl}");
    if to_stdout {
        debug!("Logging to stdout.")
    }
    if to_file {
        debug!("Logging to file: {path}")
    }
    Ok(())
}
