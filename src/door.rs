//! Game bootstrap: turn a BBS handoff into a ready-to-play session.
//!
//! The dropfile is read exactly once, then the catalogs are loaded from the
//! configured data directory. Player lookup uses [`SessionInfo::alias`]
//! unchanged.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ansi;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::dropfile::{self, SessionInfo};
use crate::logutil::escape_log;

#[derive(Debug, Error)]
pub enum DoorError {
    #[error("{alias} has {minutes} minute(s) left, {required} required to play")]
    OutOfTime {
        alias: String,
        minutes: i32,
        required: i32,
    },
}

/// A caller's session together with the game data it plays against.
#[derive(Debug, Clone)]
pub struct DoorSession {
    pub session: SessionInfo,
    pub catalog: Catalog,
    pub door_name: String,
    pub sysop: String,
    /// Output goes to the sysop's console, so art is converted to UTF-8.
    pub local_display: bool,
    pub start_art: Option<PathBuf>,
}

impl DoorSession {
    /// Read `door32.sys` from `dropfile_dir` and load the catalogs named in `config`.
    pub fn bootstrap(dropfile_dir: &str, config: &Config) -> Result<Self> {
        let path = dropfile::dropfile_path(dropfile_dir);
        let session = dropfile::read_session_info(dropfile_dir)
            .with_context(|| format!("reading dropfile {}", path.display()))?;
        info!(
            "Session for '{}' on node {} ({} min left, emulation {})",
            escape_log(&session.alias),
            session.node_num,
            session.time_left_minutes,
            session.emulation_kind().label()
        );

        Self::with_session(session, config)
    }

    /// Build a session from an already parsed [`SessionInfo`].
    pub fn with_session(session: SessionInfo, config: &Config) -> Result<Self> {
        let required = config.door.min_time_left;
        if session.time_left_minutes < required {
            warn!(
                "Refusing '{}': {} min left, {} required",
                escape_log(&session.alias),
                session.time_left_minutes,
                required
            );
            return Err(DoorError::OutOfTime {
                alias: session.alias.clone(),
                minutes: session.time_left_minutes,
                required,
            }
            .into());
        }

        let data_dir = Path::new(&config.data.data_dir);
        let catalog = Catalog::load(data_dir, &config.data.catalog)
            .with_context(|| format!("loading game data from {}", data_dir.display()))?;
        debug!(
            "Loaded {} enemies, {} weapons, {} gear, {} implants",
            catalog.enemies.len(),
            catalog.weapons.len(),
            catalog.gear.len(),
            catalog.implants.len()
        );

        Ok(DoorSession {
            session,
            catalog,
            door_name: config.door.name.clone(),
            sysop: config.door.sysop.clone(),
            local_display: config.door.local_display,
            start_art: config.data.start_art.as_ref().map(|art| data_dir.join(art)),
        })
    }

    /// Title art shown before the welcome screen, if one is configured.
    pub fn start_screen(&self) -> io::Result<Option<Vec<u8>>> {
        match &self.start_art {
            Some(path) => ansi::load_art(path, self.local_display).map(Some),
            None => Ok(None),
        }
    }

    /// Greeting screen, colored only for ANSI-capable terminals.
    pub fn welcome_screen(&self) -> String {
        let emu = self.session.emulation_kind();
        let title = ansi::paint(&self.door_name, ansi::CYAN_HI, emu);
        let alias = ansi::paint(&self.session.alias, ansi::YELLOW_HI, emu);

        let mut lines = vec![
            ansi::center_text(&title, 80),
            String::new(),
            format!("Welcome aboard, {alias}."),
            format!(
                "Node {}  |  {} minute(s) remaining  |  {} terminal",
                self.session.node_num,
                self.session.time_left_minutes,
                emu.label()
            ),
            format!("Sysop on duty: {}", self.sysop),
            String::new(),
            format!(
                "{} hostiles, {} weapons, {} pieces of gear and {} implants on file.",
                self.catalog.enemies.len(),
                self.catalog.weapons.len(),
                self.catalog.gear.len(),
                self.catalog.implants.len()
            ),
        ];
        if emu.supports_ansi() {
            lines.insert(0, ansi::clear_screen());
        }
        lines.join("\r\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Implant;

    fn session(minutes: i32, emulation: i32) -> SessionInfo {
        SessionInfo {
            alias: "Trader_Jane".to_string(),
            time_left_minutes: minutes,
            emulation,
            node_num: 3,
        }
    }

    fn door(session: SessionInfo, catalog: Catalog) -> DoorSession {
        DoorSession {
            session,
            catalog,
            door_name: "SpaceJunk 3000".into(),
            sysop: "Nova".into(),
            local_display: false,
            start_art: None,
        }
    }

    #[test]
    fn out_of_time_is_rejected_before_loading_data() {
        let mut config = Config::default();
        config.data.data_dir = "/nonexistent/spacejunk".to_string();
        let err = DoorSession::with_session(session(0, 1), &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DoorError>(),
            Some(DoorError::OutOfTime { minutes: 0, required: 1, .. })
        ));
    }

    #[test]
    fn ascii_welcome_has_no_escape_sequences() {
        let catalog = Catalog {
            implants: vec![Implant {
                name: "Optic".into(),
                desc: String::new(),
            }],
            ..Catalog::default()
        };
        let screen = door(session(30, 0), catalog).welcome_screen();
        assert!(!screen.contains('\u{1b}'));
        assert!(screen.contains("Trader_Jane"));
        assert!(screen.contains("Node 3"));
        assert!(screen.contains("Sysop on duty: Nova"));
        assert!(screen.contains("1 implants"));
    }

    #[test]
    fn ansi_welcome_is_colored() {
        let screen = door(session(30, 1), Catalog::default()).welcome_screen();
        assert!(screen.starts_with(ansi::ERASE_SCREEN));
        assert!(screen.contains(ansi::YELLOW_HI));
    }

    #[test]
    fn start_art_follows_local_display() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("start.ans");
        std::fs::write(&path, [0xDB, 0x1A, b'S', b'A', b'U', b'C', b'E', b'0', b'0']).unwrap();

        let mut remote = door(session(30, 1), Catalog::default());
        assert_eq!(remote.start_screen().unwrap(), None);

        remote.start_art = Some(path);
        assert_eq!(remote.start_screen().unwrap(), Some(vec![0xDB]));

        let local = DoorSession {
            local_display: true,
            ..remote
        };
        assert_eq!(
            local.start_screen().unwrap(),
            Some("\u{2588}".as_bytes().to_vec())
        );
    }
}
