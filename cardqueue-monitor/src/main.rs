//! Card Queue Monitor
//!
//! Terminal shell around the queue poller. Loads configuration from the
//! environment, polls the queue endpoint and prints the queue after every
//! poll until interrupted.

use std::sync::Arc;

use anyhow::{Context, Result};
use cardqueue_client::QueueClient;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardqueue_monitor::{Config, DisplaySink, QueuePoller, TerminalDisplay};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardqueue_monitor=info,cardqueue_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Card Queue Monitor");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;
    info!(
        "Loaded configuration: queue_url={}, poll_interval={:?}, visual_mode={:?}",
        config.queue_url, config.poll_interval, config.visual_mode
    );

    // Initialize queue client
    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let client = Arc::new(QueueClient::with_client(config.queue_url.clone(), http_client));

    let display = Arc::new(TerminalDisplay::new(config.render_options()));

    let mut poller = QueuePoller::new(client, display.clone());
    display.state_changed(&poller.state());
    poller
        .start(config.poll_interval)
        .context("Failed to start queue poller")?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    info!("Shutdown requested");
    poller.stop();

    Ok(())
}
