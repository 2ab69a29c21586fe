//! # Configuration
//!
//! SpaceJunk reads a TOML file (default `config.toml`) describing the door
//! itself, where its game data lives, and how it logs.
//!
//! ## Configuration Structure
//!
//! - [`DoorConfig`] - Door name, sysop, default dropfile directory, time floor
//! - [`DataConfig`] - Data directory and catalog file names ([`CatalogConfig`])
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spacejunk::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Door: {}", config.door.name);
//!     Ok(())
//! }
//! ```
//!
//! ## File Format
//!
//! ```toml
//! [door]
//! name = "SpaceJunk 3000"
//! sysop = "sysop"
//! dropfile_dir = "/bbs/node1"
//! local_display = false
//! min_time_left = 1
//!
//! [data]
//! data_dir = "data"
//! start_art = "start.ans"
//! enemies = "enemies.json"
//! weapons = "weapons.json"
//! gear = "gear.json"
//! implants = "implants.json"
//!
//! [logging]
//! level = "info"
//! file = "spacejunk.log"
//! ```
//!
//! Command line flags take precedence over the file, and the file over defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub door: DoorConfig,
    #[serde(default)]
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorConfig {
    pub name: String,
    pub sysop: String,
    /// Node directory holding door32.sys when `--door32` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropfile_dir: Option<String>,
    /// Output goes to the sysop's local console rather than a remote caller.
    #[serde(default)]
    pub local_display: bool,
    /// Minutes a caller must have left to enter the game.
    #[serde(default = "default_min_time_left")]
    pub min_time_left: i32,
}

fn default_min_time_left() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub data_dir: String,
    /// ANSI art (`.ans`) shown before the welcome screen, relative to `data_dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_art: Option<String>,
    #[serde(flatten)]
    pub catalog: CatalogConfig,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            start_art: None,
            catalog: CatalogConfig::default(),
        }
    }
}

/// Catalog file names, relative to [`DataConfig::data_dir`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub enemies: String,
    pub weapons: String,
    pub gear: String,
    pub implants: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            enemies: "enemies.json".to_string(),
            weapons: "weapons.json".to_string(),
            gear: "gear.json".to_string(),
            implants: "implants.json".to_string(),
            locations: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load `path`, or fall back to defaults when the file does not exist.
    /// A file that exists but fails to parse is still an error.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        match fs::try_exists(path).await {
            Ok(false) => Ok(Config::default()),
            _ => Config::load(path).await,
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            door: DoorConfig {
                name: "SpaceJunk 3000".to_string(),
                sysop: "sysop".to_string(),
                dropfile_dir: None,
                local_display: false,
                min_time_left: default_min_time_left(),
            },
            data: DataConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                // stdout belongs to the caller's terminal, so log to a file by default
                file: Some("spacejunk.log".to_string()),
            },
        }
    }
}
