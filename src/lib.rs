//! # SpaceJunk 3000 - a BBS door game
//!
//! SpaceJunk is a single-player text adventure launched by a bulletin board
//! system as an external "door". The BBS host hands the caller's session over
//! through a `door32.sys` dropfile; the door reads it once at startup, loads its
//! JSON game data and talks to the caller over the inherited terminal.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spacejunk::config::Config;
//! use spacejunk::door::DoorSession;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let door = DoorSession::bootstrap("/bbs/node1", &config)?;
//!     print!("{}", door.welcome_screen());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`dropfile`] - door32.sys parsing into a validated [`dropfile::SessionInfo`]
//! - [`door`] - session bootstrap and the welcome screen
//! - [`catalog`] - enemy, weapon, gear and implant JSON catalogs
//! - [`ansi`] - escape sequences, SAUCE trimming and text alignment
//! - [`config`] - TOML configuration
//! - [`logutil`] - single-line log escaping for caller-controlled text

pub mod ansi;
pub mod catalog;
pub mod config;
pub mod door;
pub mod dropfile;
pub mod logutil;
