//! Binary entrypoint: loads config, sets up logging, builds the Axum app, and serves `/api/email/send`.

use std::{net::SocketAddr, sync::Arc};

use dotenvy::dotenv;
use tracing::{debug, info};

use mailrelay::{config, email::EmailState, logger, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Load environment (.env is optional)
    dotenv().ok();

    // 2) Configuration: defaults overridden by env vars
    let cfg = config::from_env();

    // 3) Logging: compact console and/or a JSON log file, per config
    logger::set_logger(
        cfg.log_level.clone(),
        cfg.log_to_file,
        cfg.log_to_stdout,
        cfg.log_dir.clone(),
        cfg.log_file.clone(),
    )?;
    debug!("SendGrid base URL: {}", cfg.sendgrid_base_url);

    // 4) Build app state (HTTP client + SendGrid addressing) from config
    let state = Arc::new(EmailState::from_config(&cfg)?);

    // 5) Router
    let app = routes::router(state);

    // 6) Bind address
    let addr: SocketAddr = format!("{}:{}", cfg.listen_addr, cfg.listen_port).parse()?;
    info!("Starting server on {addr}");

    // 7) Serve
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
