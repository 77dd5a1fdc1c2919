use std::path::PathBuf;

use clap::Parser;
use eventy::api::{DEFAULT_API_URL, DEFAULT_NOMINATIM_URL};
use eventy::data::{AppConfig, DataDirectory};
use eventy::{App, AppSettings, init_logging};

#[derive(Parser, Debug)]
#[command(name = "eventy")]
#[command(about = "A terminal client for the Eventy event platform")]
struct Args {
    /// Path to the data directory (default: ~/.eventy/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Override the platform API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Access token for authenticated calls (skips interactive login)
    #[arg(long, env = "EVENTY_TOKEN")]
    token: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let storage = DataDirectory::new(data_dir.clone());
    let config = if storage.config_exists() {
        match storage.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "config unreadable, using defaults");
                Default::default()
            }
        }
    } else {
        // First run: seed an empty config so there is a file to edit.
        let config = AppConfig::default();
        if let Err(e) = storage.save_config(&config) {
            tracing::warn!(error = %e, "could not write default config");
        }
        config
    };

    let settings = AppSettings {
        api_url: args
            .api_url
            .or(config.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        nominatim_url: config
            .nominatim_url
            .unwrap_or_else(|| DEFAULT_NOMINATIM_URL.to_string()),
        token: args.token,
    };

    let mut app = App::new(settings)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
