//! # door32.sys Dropfile Reader
//!
//! Before launching a door, the BBS host writes a small line-oriented file,
//! `door32.sys`, describing the caller. This module locates that file inside a
//! node directory and turns it into a validated [`SessionInfo`].
//!
//! ## Layout
//!
//! Fields are addressed by zero-based line number. Only four are consumed:
//!
//! ```text
//!  0  comm/socket handle        6  user alias        <- alias
//!  1  communication type        7  reserved
//!  2  baud rate                 8  minutes remaining <- time_left_minutes
//!  3  door name                 9  emulation code    <- emulation
//!  4  reserved                 10  node number       <- node_num
//!  5  BBS name / id
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spacejunk::dropfile::{read_session_info, DropfileError};
//!
//! match read_session_info("/bbs/node1") {
//!     Ok(session) => println!("{} on node {}", session.alias, session.node_num),
//!     Err(DropfileError::NotFound { .. }) => println!("no BBS session, running locally"),
//!     Err(e) => eprintln!("bad dropfile: {e}"),
//! }
//! ```
//!
//! The reader never logs, retries, or substitutes defaults. Every failure is
//! returned as a [`DropfileError`] so the caller picks the policy.

mod emulation;
mod errors;

pub use emulation::Emulation;
pub use errors::{DropfileError, DropfileField};

use codepage_437::{FromCp437, CP437_CONTROL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{PathBuf, MAIN_SEPARATOR};

/// Fixed dropfile name. Looked up in lowercase regardless of how the host wrote it.
pub const DROPFILE_NAME: &str = "door32.sys";

pub const ALIAS_LINE: usize = 6;
pub const TIME_LEFT_LINE: usize = 8;
pub const EMULATION_LINE: usize = 9;
pub const NODE_LINE: usize = 10;

/// Minimum line count of a usable door32.sys (indices 0 through 10).
pub const MIN_LINES: usize = NODE_LINE + 1;

/// Session metadata handed off by the BBS host. Built once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Caller's handle, exactly as the host wrote it. Used as the player key.
    pub alias: String,
    /// Minutes left in the BBS session; zero or negative means none.
    pub time_left_minutes: i32,
    /// Raw emulation code, see [`SessionInfo::emulation_kind`].
    pub emulation: i32,
    /// BBS node (connection slot) number.
    pub node_num: i32,
}

impl SessionInfo {
    pub fn emulation_kind(&self) -> Emulation {
        Emulation::from_code(self.emulation)
    }

    pub fn has_time_left(&self) -> bool {
        self.time_left_minutes > 0
    }

    /// Render a door32.sys carrying this session, CRLF-terminated, with
    /// placeholder values on the lines the reader ignores.
    ///
    /// The alias must not contain line breaks; an alias read back from a
    /// dropfile never does.
    pub fn to_dropfile(&self) -> String {
        let lines: [String; MIN_LINES] = [
            "0".to_string(),
            "0".to_string(),
            "38400".to_string(),
            "SpaceJunk 3000".to_string(),
            String::new(),
            "LOCAL".to_string(),
            self.alias.clone(),
            String::new(),
            self.time_left_minutes.to_string(),
            self.emulation.to_string(),
            self.node_num.to_string(),
        ];
        let mut out = lines.join("\r\n");
        out.push_str("\r\n");
        out
    }
}

/// Build the dropfile path for a node directory.
///
/// Trailing separators are collapsed to exactly one, `door32.sys` is
/// appended, and the whole path is lowercased. An empty directory means the
/// current working directory.
pub fn dropfile_path(dir: &str) -> PathBuf {
    let trimmed = dir.trim_end_matches(|c: char| c == '/' || c == MAIN_SEPARATOR);
    let base = if trimmed.is_empty() {
        if dir.is_empty() {
            ".".to_string()
        } else {
            // Filesystem root: every character was a separator.
            String::new()
        }
    } else {
        trimmed.to_string()
    };
    let joined = format!("{base}{MAIN_SEPARATOR}{DROPFILE_NAME}");
    PathBuf::from(joined.to_lowercase())
}

/// Locate, read and parse `door32.sys` in `dir`.
///
/// Performs one metadata lookup and one read of the target file.
pub fn read_session_info(dir: &str) -> Result<SessionInfo, DropfileError> {
    let path = dropfile_path(dir);

    let meta = match fs::metadata(&path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DropfileError::NotFound { path });
        }
        Err(source) => return Err(DropfileError::Io { path, source }),
    };
    if meta.len() == 0 {
        return Err(DropfileError::EmptyFile { path });
    }

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DropfileError::NotFound { path });
        }
        Err(source) => return Err(DropfileError::Io { path, source }),
    };

    parse_session_info(&decode(bytes))
}

/// Parse dropfile contents that have already been read into memory.
pub fn parse_session_info(contents: &str) -> Result<SessionInfo, DropfileError> {
    let lines: Vec<&str> = contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .collect();
    if lines.len() < MIN_LINES {
        return Err(DropfileError::TruncatedFile { lines: lines.len() });
    }

    let alias = lines[ALIAS_LINE];
    if alias.trim().is_empty() {
        return Err(DropfileError::EmptyAlias);
    }

    Ok(SessionInfo {
        alias: alias.to_string(),
        time_left_minutes: parse_field(&lines, DropfileField::TimeLeft)?,
        emulation: parse_field(&lines, DropfileField::Emulation)?,
        node_num: parse_field(&lines, DropfileField::NodeNumber)?,
    })
}

fn parse_field(lines: &[&str], field: DropfileField) -> Result<i32, DropfileError> {
    let raw = lines[field.line()];
    raw.parse::<i32>().map_err(|_| DropfileError::InvalidField {
        field,
        raw: raw.to_string(),
    })
}

// Hosts running under DOS write CP437 bytes. CP437 maps every byte to a
// distinct char, so distinct aliases stay distinct.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_cp437(e.into_bytes(), &CP437_CONTROL),
    }
}
