//! Configuration module for the email relay API.

use std::env;

/// Struct containing all configuration options.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub log_to_file: bool,
    pub log_to_stdout: bool,
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub listen_addr: String,
    pub listen_port: u16,
    pub sendgrid_api_key: String,
    pub sendgrid_from_email: String,
    pub sendgrid_from_name: String,
    pub sendgrid_base_url: String,
}

/// # get_defaults()
/// Returns an `ApiConfig` populated with default values for all options.
/// Each can be overridden by an environment variable via [`from_env`].
/// # Environment Variables:
/// |Variable|Description|
/// |:------:|:---------:|
/// |`LOG_LEVEL`|Log level (DEBUG, INFO, WARN, ERROR)|
/// |`LOG_TO_FILE`|Whether to log to file (true/false)|
/// |`LOG_TO_STDOUT`|Whether to log to stdout (true/false)|
/// |`LOG_DIR`|Directory to log to (relative to executable)|
/// |`LOG_FILE`|File to log to (relative to `LOG_DIR`)|
/// |`LISTEN_ADDR`|Address to bind to (e.g. `127.0.0.1`)|
/// |`LISTEN_PORT`|Port to bind to (e.g. `8080`)|
/// |`SENDGRID_API_KEY`|SendGrid API key (bearer credential)|
/// |`SENDGRID_FROM_EMAIL`|Sender email address|
/// |`SENDGRID_FROM_NAME`|Sender display name|
/// |`SENDGRID_BASE_URL`|SendGrid API base URL|
///
/// --------------------------------------------------------------------
/// ## Log defaults:
/// |`log_file`|`log_dir` |`log_to_file`|`log_to_stdout`|`log_level`|
/// |:--------:|:--------:|:-----------:|:-------------:|:---------:|
/// |`out.log` |`logs`    |`true`       |`true`         |`DEBUG`    |
/// --------------------------------------------------------------------
/// ## App defaults:
/// |`listen_addr`|`listen_port`|
/// |:-----------:|:-----------:|
/// |`127.0.0.1`  |`8080`       |
/// --------------------------------------------------------------------
/// ## SendGrid defaults:
/// |`sendgrid_api_key`|`sendgrid_from_email` |`sendgrid_from_name`|`sendgrid_base_url`        |
/// |:----------------:|:--------------------:|:------------------:|:-------------------------:|
/// |empty             |`noreply@localhost.com`|`Mail Relay`       |`https://api.sendgrid.com` |
///
/// An empty API key is not a startup failure; it is detected per send.
pub fn get_defaults() -> ApiConfig {
    ApiConfig {
        log_file: "out.log".into(),
        log_dir: "logs".into(),
        log_to_file: true,
        log_to_stdout: true,
        log_level: "DEBUG".into(),
        listen_addr: "127.0.0.1".into(),
        listen_port: 8080,
        sendgrid_api_key: String::new(),
        sendgrid_from_email: "noreply@localhost.com".into(),
        sendgrid_from_name: "Mail Relay".into(),
        sendgrid_base_url: "https://api.sendgrid.com".into(),
    }
}

/// Build the runtime config: defaults, then env var overrides.
/// Unparseable boolean/port values fall back to the defaults.
pub fn from_env() -> ApiConfig {
    let mut cfg = get_defaults();
    if let Ok(v) = env::var("LOG_LEVEL") {
        cfg.log_level = v;
    }
    if let Ok(v) = env::var("LOG_TO_FILE") {
        cfg.log_to_file = v.parse().unwrap_or(cfg.log_to_file);
    }
    if let Ok(v) = env::var("LOG_TO_STDOUT") {
        cfg.log_to_stdout = v.parse().unwrap_or(cfg.log_to_stdout);
    }
    if let Ok(v) = env::var("LOG_DIR") {
        cfg.log_dir = v;
    }
    if let Ok(v) = env::var("LOG_FILE") {
        cfg.log_file = v;
    }
    if let Ok(v) = env::var("LISTEN_ADDR") {
        cfg.listen_addr = v;
    }
    if let Ok(v) = env::var("LISTEN_PORT") {
        cfg.listen_port = v.parse().unwrap_or(cfg.listen_port);
    }
    if let Ok(v) = env::var("SENDGRID_API_KEY") {
        cfg.sendgrid_api_key = v;
    }
    if let Ok(v) = env::var("SENDGRID_FROM_EMAIL") {
        cfg.sendgrid_from_email = v;
    }
    if let Ok(v) = env::var("SENDGRID_FROM_NAME") {
        cfg.sendgrid_from_name = v;
    }
    if let Ok(v) = env::var("SENDGRID_BASE_URL") {
        cfg.sendgrid_base_url = v;
    }
    cfg
}
