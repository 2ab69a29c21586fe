//! Binary entrypoint for the SpaceJunk door.
//!
//! Commands:
//! - `start [--door32 <dir>]` - read the dropfile, load game data, show the welcome screen
//! - `session [--door32 <dir>] [--json]` - print the parsed dropfile (for sysops)
//! - `init` - create a starter `config.toml`
//! - `dropfile --out <dir> --alias <name>` - write a door32.sys for local testing
//!
//! See the library crate docs for module-level details: `spacejunk::`.
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::io::Write;

use spacejunk::config::Config;
use spacejunk::door::DoorSession;
use spacejunk::dropfile::{self, SessionInfo};
use spacejunk::logutil::escape_log;

#[derive(Parser)]
#[command(name = "spacejunk")]
#[command(about = "SpaceJunk 3000, a door game for BBS systems")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a game session for the caller described by door32.sys
    Start {
        /// Node directory containing door32.sys
        #[arg(long)]
        door32: Option<String>,
    },
    /// Parse door32.sys and print the session it describes
    Session {
        /// Node directory containing door32.sys
        #[arg(long)]
        door32: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default configuration file
    Init,
    /// Write a door32.sys for local testing
    Dropfile {
        /// Directory to write door32.sys into
        #[arg(short, long)]
        out: String,
        /// Caller alias
        #[arg(short, long)]
        alias: String,
        /// Minutes remaining
        #[arg(short, long, default_value_t = 60)]
        time_left: i32,
        /// Emulation code (0 ASCII, 1 ANSI, 2 AVATAR, 3 RIP, 4 MAX)
        #[arg(short, long, default_value_t = 1)]
        emulation: i32,
        /// Node number
        #[arg(short, long, default_value_t = 1)]
        node: i32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init runs before a config file exists
    let config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Start { door32 } => {
            let config = match config {
                Some(c) => c,
                None => Config::load(&cli.config).await?,
            };
            let dir = resolve_dropfile_dir(door32, &config)?;
            info!("Starting SpaceJunk v{}", env!("CARGO_PKG_VERSION"));
            let door = match DoorSession::bootstrap(&dir, &config) {
                Ok(door) => door,
                Err(e) => {
                    error!("Session bootstrap failed: {:#}", e);
                    return Err(e);
                }
            };
            let mut out = std::io::stdout().lock();
            if let Some(art) = door
                .start_screen()
                .context("loading start screen art")?
            {
                out.write_all(&art)?;
            }
            write!(out, "{}\r\n", door.welcome_screen())?;
            out.flush()?;
            info!("Session for '{}' ended", escape_log(&door.session.alias));
        }
        Commands::Session { door32, json } => {
            let config = match config {
                Some(c) => c,
                None => Config::load_or_default(&cli.config).await?,
            };
            let dir = resolve_dropfile_dir(door32, &config)?;
            let session = dropfile::read_session_info(&dir).with_context(|| {
                format!(
                    "reading {}",
                    dropfile::dropfile_path(&dir).display()
                )
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else {
                println!("alias:     {}", session.alias);
                println!("time left: {} min", session.time_left_minutes);
                println!(
                    "emulation: {} ({})",
                    session.emulation,
                    session.emulation_kind().label()
                );
                println!("node:      {}", session.node_num);
            }
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Dropfile {
            out,
            alias,
            time_left,
            emulation,
            node,
        } => {
            if alias.trim().is_empty() || alias.contains(['\r', '\n']) {
                bail!("alias must be a single non-blank line");
            }
            let session = SessionInfo {
                alias,
                time_left_minutes: time_left,
                emulation,
                node_num: node,
            };
            tokio::fs::create_dir_all(&out).await?;
            let path = dropfile::dropfile_path(&out);
            tokio::fs::write(&path, session.to_dropfile())
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// CLI flag wins over the config file.
fn resolve_dropfile_dir(flag: Option<String>, config: &Config) -> Result<String> {
    match flag.or_else(|| config.door.dropfile_dir.clone()) {
        Some(dir) => Ok(dir),
        None => bail!("dropfile directory is required: pass --door32 <dir> or set door.dropfile_dir"),
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity raises the configured level
    let configured = config
        .as_ref()
        .map(|c| c.logging.level_filter())
        .unwrap_or(log::LevelFilter::Info);
    let level = match verbosity {
        0 => configured,
        1 => configured.max(log::LevelFilter::Debug),
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(f) = log_file {
        let file = std::sync::Mutex::new(f);
        // Mirror to the console only when a sysop is watching stderr
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
