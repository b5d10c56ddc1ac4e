//! Downmon CLI
//!
//! Command-line interface for the Downdetector monitoring and notification
//! service.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use downmon::{load_config, save_config, Config};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Parser)]
#[command(name = "downmon")]
#[command(about = "Downdetector incident monitoring and notification service")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default configuration to the --config path and exit
    #[arg(long)]
    init_config: bool,

    /// Append log output to this file in addition to the console
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_tracing(args.log_level, args.log_file.as_deref())?;

    if args.init_config {
        let path = args
            .config
            .as_deref()
            .ok_or("--init-config requires --config")?;
        save_config(path, &Config::default())?;
        tracing::info!("Wrote default configuration to {:?}", path);
        return Ok(());
    }

    let config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    tracing::debug!(
        "Poll interval: {}s, popups: {}, sound: {}",
        config.api.poll_interval,
        config.notifications.popup_alerts,
        config.notifications.alert_sound
    );

    downmon::run(config).await?;

    Ok(())
}

fn init_tracing(level: Level, log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = LevelFilter::from_level(level);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;

            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_filter(filter))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Arc::new(file))
                        .with_filter(filter),
                )
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_max_level(level).init();
        }
    }

    Ok(())
}
