use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The integer fields of door32.sys that are parsed by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropfileField {
    TimeLeft,
    Emulation,
    NodeNumber,
}

impl DropfileField {
    /// Zero-based line offset of the field inside door32.sys.
    pub fn line(self) -> usize {
        match self {
            DropfileField::TimeLeft => super::TIME_LEFT_LINE,
            DropfileField::Emulation => super::EMULATION_LINE,
            DropfileField::NodeNumber => super::NODE_LINE,
        }
    }
}

impl fmt::Display for DropfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DropfileField::TimeLeft => "time-left",
            DropfileField::Emulation => "emulation",
            DropfileField::NodeNumber => "node-number",
        };
        f.write_str(name)
    }
}

/// Errors returned while locating or parsing a door32.sys dropfile.
///
/// None of these are retried by the reader; the caller decides whether a
/// missing dropfile means "local mode" or a hard failure.
#[derive(Debug, Error)]
pub enum DropfileError {
    /// No file at the normalized dropfile path.
    #[error("dropfile not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but has zero length (usually a BBS handoff race).
    #[error("dropfile is empty: {}", .path.display())]
    EmptyFile { path: PathBuf },

    /// Any other filesystem failure (permissions, read errors).
    #[error("io error on dropfile {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer than the 11 lines the door32.sys layout requires.
    #[error("dropfile truncated: expected at least {} lines, found {lines}", super::MIN_LINES)]
    TruncatedFile { lines: usize },

    /// One of the integer fields did not parse.
    #[error("invalid {field} field (line {}): {raw:?}", .field.line())]
    InvalidField { field: DropfileField, raw: String },

    /// Line 6 is empty or only whitespace.
    #[error("dropfile alias (line {}) is empty", super::ALIAS_LINE)]
    EmptyAlias,
}
