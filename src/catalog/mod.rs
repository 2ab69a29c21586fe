//! JSON catalogs describing the game's enemies, weapons, gear and implants.
//!
//! The files live under the configured data directory and are loaded once at
//! startup. Each file is a JSON array of records.

mod types;

pub use types::{DropItem, Enemy, Gear, Implant, Location, Weapon};

use crate::config::CatalogConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load enemies from `enemies.json`
pub fn load_enemies<P: AsRef<Path>>(path: P) -> Result<Vec<Enemy>, CatalogError> {
    load_json(path)
}

/// Load weapons from `weapons.json`
pub fn load_weapons<P: AsRef<Path>>(path: P) -> Result<Vec<Weapon>, CatalogError> {
    load_json(path)
}

/// Load gear from `gear.json`
pub fn load_gear<P: AsRef<Path>>(path: P) -> Result<Vec<Gear>, CatalogError> {
    load_json(path)
}

/// Load implants from `implants.json`
pub fn load_implants<P: AsRef<Path>>(path: P) -> Result<Vec<Implant>, CatalogError> {
    load_json(path)
}

pub fn load_locations<P: AsRef<Path>>(path: P) -> Result<Vec<Location>, CatalogError> {
    load_json(path)
}

/// All game data needed for a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub enemies: Vec<Enemy>,
    pub weapons: Vec<Weapon>,
    pub gear: Vec<Gear>,
    pub implants: Vec<Implant>,
    pub locations: Vec<Location>,
}

impl Catalog {
    /// Load every catalog file named in `files`, relative to `data_dir`.
    /// Locations are optional and left empty when not configured.
    pub fn load<P: AsRef<Path>>(data_dir: P, files: &CatalogConfig) -> Result<Self, CatalogError> {
        let dir = data_dir.as_ref();
        let locations = match &files.locations {
            Some(name) => load_locations(dir.join(name))?,
            None => Vec::new(),
        };
        Ok(Catalog {
            enemies: load_enemies(dir.join(&files.enemies))?,
            weapons: load_weapons(dir.join(&files.weapons))?,
            gear: load_gear(dir.join(&files.gear))?,
            implants: load_implants(dir.join(&files.implants))?,
            locations,
        })
    }

    /// Every weapon and gear entry as a possible drop.
    pub fn drop_table(&self) -> Vec<DropItem> {
        self.weapons
            .iter()
            .cloned()
            .map(DropItem::from)
            .chain(self.gear.iter().cloned().map(DropItem::from))
            .collect()
    }

    pub fn find_weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name.eq_ignore_ascii_case(name))
    }

    pub fn find_enemy(&self, name: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }
}
