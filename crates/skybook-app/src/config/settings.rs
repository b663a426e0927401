//! Settings loader and writer for config.toml

use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::types::Settings;
use skybook_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "skybook";

const DEFAULT_CONFIG: &str = r#"# SkyBook Configuration

[api]
base_url = "http://localhost:8080"
timeout_ms = 10000

[search]
price_step = 10                    # Left/Right step of the max-price slider
empty_result_policy = "date_only"  # "date_only" or "always"

[seats]
recommend_count = 3                # Seats requested from the recommendation endpoint
"#;

/// `<config_dir>/skybook/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// A missing, unreadable or invalid file falls back to defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the default config file unless one already exists
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .map_err(|e| Error::config(format!("Failed to create {}: {}", CONFIG_FILENAME, e)))?;

    file.lock_exclusive()
        .map_err(|e| Error::config(format!("Failed to lock {}: {}", CONFIG_FILENAME, e)))?;

    let mut file = file;
    file.write_all(DEFAULT_CONFIG.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write {}: {}", CONFIG_FILENAME, e)))?;
    file.flush()
        .map_err(|e| Error::config(format!("Failed to flush {}: {}", CONFIG_FILENAME, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
