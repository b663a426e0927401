//! SkyBook - search flights and pick seats from the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use skybook_app::config::{default_config_path, init_config_file, load_settings, Settings};
use skybook_core::prelude::*;

/// SkyBook - search flights and pick seats from the terminal
#[derive(Parser, Debug)]
#[command(name = "skybook")]
#[command(about = "A terminal client for searching flights and picking seats", long_about = None)]
struct Args {
    /// Base URL of the booking API (overrides api.base_url)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(default_config_path)
    }

    /// File settings with command-line overrides applied
    fn settings(&self) -> Settings {
        let mut settings = match self.config_path() {
            Some(path) => load_settings(&path),
            None => {
                warn!("No config directory on this platform, using defaults");
                Settings::default()
            }
        };
        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
        settings
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config_path()
            .ok_or_else(|| Error::config("Could not determine a config directory"))?;
        if init_config_file(&path)? {
            println!("Wrote default config to {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    // Log to file, the TUI owns stdout
    skybook_core::logging::init()?;

    let settings = args.settings();
    settings.validate()?;
    info!(
        "Settings: api={} timeout={}ms policy={:?}",
        settings.api.base_url, settings.api.timeout_ms, settings.search.empty_result_policy
    );

    let result = skybook_tui::run(settings).await;
    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("Could not start: {:?}", e);
        } else {
            error!("Application error: {:?}", e);
        }
        if let Ok(log_file) = skybook_core::logging::get_current_log_file() {
            eprintln!("Details logged to {}", log_file.display());
        }
    }
    Ok(result?)
}
