//! CLI definition and parsing.
//!
//! Notes:
//! - The positional SOURCE_DIR/DEST_DIR/MODE triple only applies in legacy
//!   mode, i.e. when no config file is discovered. It mirrors the historic
//!   one-shot invocation.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::LogLevel;

/// CLI wrapper for the tidy_move engine.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Relocate files between directory trees by configurable rules"
)]
pub struct Args {
    /// Explicit config file path (else TIDY_MOVE_CONFIG, ./tidy_move.xml,
    /// then the per-user config dir are tried).
    #[arg(long = "config", short = 'c', value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Legacy-mode source directory (used only when no config file is found).
    #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
    pub source_dir: Option<PathBuf>,

    /// Legacy-mode destination directory.
    #[arg(value_name = "DEST_DIR", value_hint = ValueHint::DirPath)]
    pub destination_dir: Option<PathBuf>,

    /// Legacy-mode transfer mode: "move" or "copy".
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Show what would be done, but do not modify files/directories.
    #[arg(long, help = "Show what would be done, but do not modify files/directories")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print which config file tidy_move would use, then exit.
    #[arg(long, help = "Print the config file location used by tidy_move and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
